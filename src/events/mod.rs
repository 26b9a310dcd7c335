//! Leadership events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used by
//! passive observers of the election.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] — the closed two-signal event set plus metadata
//! - [`Bus`] — thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publisher**: the elector's sequential tick path (single publisher).
//! - **Consumers**: registered [`Subscribe`](crate::Subscribe) listeners
//!   (delivered inside the emitting tick) and any number of passive
//!   [`Bus::subscribe`] receivers (fire-and-forget broadcast).

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
