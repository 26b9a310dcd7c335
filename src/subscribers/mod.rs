//! Event listeners: the registration interface for dependent subsystems.
//!
//! ## Contents
//! - [`Subscribe`] — the listener contract for leadership events.
//! - [`SubscriberSet`] — sequential in-tick delivery with panic isolation.
//! - [`LogWriter`] — stdout demo subscriber (feature = `logging`).
//!
//! Listeners are the subsystems that start or stop leader-only duties.
//! Delivery happens synchronously with the emitting poll tick, in
//! registration order, before the tick continues.

mod set;
mod subscribe;

#[cfg(feature = "logging")]
mod log;

pub use set::SubscriberSet;
pub use subscribe::Subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
