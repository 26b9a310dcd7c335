//! Core runtime: configuration, role state, and the election state machine.
//!
//! ## Contents
//! - [`ElectorConfig`] — immutable per-elector settings + validation
//! - [`Role`] — the two-state leadership role
//! - [`LeaderElector`] — lease acquisition, renewal, failover detection,
//!   and the poll loop that drives them

mod config;
mod elector;
mod role;

pub use config::ElectorConfig;
pub use elector::LeaderElector;
pub use role::Role;
