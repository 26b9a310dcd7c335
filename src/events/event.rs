//! # Leadership events emitted by the elector.
//!
//! The event set is closed and carries no payload: consumers only need to
//! know *that* leadership started or stopped on this instance. The [`Event`]
//! struct still carries metadata (sequence, timestamp, instance id) for
//! logging and test assertions.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Events from one elector are emitted strictly in tick order.
//!
//! ## Duplicate-emission hazard
//! Vacancy detection emits [`EventKind::LeaderStepdown`] unconditionally,
//! including on instances that were already followers. Listeners must be
//! idempotent: a redundant stepdown must be safe to receive.
//!
//! ## Example
//! ```rust
//! use leadvisor::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::LeaderTakeover, "instance-a");
//! assert_eq!(ev.kind, EventKind::LeaderTakeover);
//! assert_eq!(&*ev.instance, "instance-a");
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of leadership events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// This instance gained leadership: start leader-only duties
    /// (triggers, pollers, pruning, queue recovery, ...).
    ///
    /// Emitted exactly once per successful acquisition.
    LeaderTakeover,

    /// This instance is not the leader: stop leader-only duties.
    ///
    /// Emitted when leadership is lost to another instance, and on **every**
    /// vacancy detection — even if this instance was already a follower.
    LeaderStepdown,
}

impl EventKind {
    /// Returns a short stable label (kebab-case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            EventKind::LeaderTakeover => "leader-takeover",
            EventKind::LeaderStepdown => "leader-stepdown",
        }
    }
}

/// Leadership event with metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - `instance`: id of the emitting instance
#[derive(Debug, Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Id of the instance that emitted this event.
    pub instance: Arc<str>,
    /// Event classification.
    pub kind: EventKind,
}

impl Event {
    /// Creates a new event of the given kind with the current timestamp and
    /// the next sequence number.
    pub fn new(kind: EventKind, instance: impl Into<Arc<str>>) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            instance: instance.into(),
            kind,
        }
    }

    #[inline]
    pub fn is_takeover(&self) -> bool {
        matches!(self.kind, EventKind::LeaderTakeover)
    }

    #[inline]
    pub fn is_stepdown(&self) -> bool {
        matches!(self.kind, EventKind::LeaderStepdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_is_monotonic() {
        let a = Event::new(EventKind::LeaderTakeover, "x");
        let b = Event::new(EventKind::LeaderStepdown, "x");
        assert!(b.seq > a.seq);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(EventKind::LeaderTakeover.as_label(), "leader-takeover");
        assert_eq!(EventKind::LeaderStepdown.as_label(), "leader-stepdown");
    }
}
