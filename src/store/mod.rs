//! Coordination store: the trait the elector coordinates through.
//!
//! ## Contents
//! - [`LeaseStore`] — required operations and contracts (get, set-if-absent,
//!   set-expiration, delete) against a single shared linearizable key space.
//! - [`StoreError`] — transient failure taxonomy for store calls.
//! - [`MemoryStore`] — in-process implementation with real TTL semantics,
//!   used for tests, demos, and single-node deployments.
//!
//! The store's own implementation and network protocol are out of scope for
//! this crate; any backend that honors the [`LeaseStore`] contracts (Redis,
//! etcd, a lock server) can be plugged in behind the trait.

mod client;
mod memory;

pub use client::{LeaseStore, StoreError};
pub use memory::MemoryStore;
