//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for reacting to leadership changes:
//! start schedulers/pollers on [`EventKind::LeaderTakeover`], stop them on
//! [`EventKind::LeaderStepdown`].
//!
//! ## Contract
//! - Handlers run **inside the emitting poll tick**, sequentially; a slow
//!   handler delays the rest of the tick (and, transitively, the next tick).
//!   Keep handlers short; offload heavy work to spawned tasks.
//! - Handlers must be **idempotent**: redundant stepdowns are emitted by
//!   design on every vacancy detection, and a takeover may follow a
//!   stepdown within the same tick.
//!
//! ## Example (skeleton)
//! ```rust
//! use async_trait::async_trait;
//! use leadvisor::{Event, EventKind, Subscribe};
//!
//! struct Pollers;
//!
//! #[async_trait]
//! impl Subscribe for Pollers {
//!     async fn on_event(&self, ev: &Event) {
//!         match ev.kind {
//!             EventKind::LeaderTakeover => { /* start polling */ }
//!             EventKind::LeaderStepdown => { /* stop polling (safe if already stopped) */ }
//!         }
//!     }
//!     fn name(&self) -> &'static str { "pollers" }
//! }
//! ```
//!
//! [`EventKind::LeaderTakeover`]: crate::EventKind::LeaderTakeover
//! [`EventKind::LeaderStepdown`]: crate::EventKind::LeaderStepdown

use async_trait::async_trait;

use crate::events::Event;

/// Contract for leadership event listeners.
///
/// Called from the elector's poll tick. Implementations should avoid
/// blocking the async runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handle a single leadership event.
    async fn on_event(&self, event: &Event);

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
