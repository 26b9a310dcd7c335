//! # In-tick event delivery to registered subscribers.
//!
//! Provides [`SubscriberSet`] — delivers each event to every subscriber,
//! sequentially and awaited inside the emitting poll tick, so that by the
//! time the tick proceeds (e.g. flips the role cell after a stepdown) all
//! listeners have observed the event.
//!
//! ## Architecture
//! ```text
//! emit(event)
//!     ├──► subscriber1.on_event().await ──┐
//!     ├──► subscriber2.on_event().await   ├─ panic → caught, logged,
//!     └──► subscriberN.on_event().await ──┘          remaining subs still run
//! ```
//!
//! ## Rules
//! - **Registration order**: subscribers see events in the order they were
//!   registered, one event fully delivered before the next is emitted.
//! - **Isolation**: a panicking subscriber doesn't affect the others or the
//!   elector; the panic is logged and delivery continues.
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state
//! inconsistent if a subscriber panics while holding a lock.

use std::sync::Arc;

use futures::FutureExt;

use crate::events::Event;
use crate::subscribers::Subscribe;

/// Ordered set of leadership event listeners.
pub struct SubscriberSet {
    subs: Vec<Arc<dyn Subscribe>>,
}

impl SubscriberSet {
    /// Creates a set from the given subscribers (delivery follows this order).
    #[must_use]
    pub fn new(subs: Vec<Arc<dyn Subscribe>>) -> Self {
        Self { subs }
    }

    /// Returns the number of registered subscribers.
    pub fn len(&self) -> usize {
        self.subs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    /// Delivers one event to every subscriber, sequentially, awaiting each.
    ///
    /// Panics are caught per subscriber and logged at warn; delivery to the
    /// remaining subscribers continues.
    pub async fn emit(&self, event: &Event) {
        for sub in &self.subs {
            let fut = sub.on_event(event);
            if let Err(panic_err) = std::panic::AssertUnwindSafe(fut).catch_unwind().await {
                let info = {
                    let any = &*panic_err;
                    if let Some(msg) = any.downcast_ref::<&'static str>() {
                        (*msg).to_string()
                    } else if let Some(msg) = any.downcast_ref::<String>() {
                        msg.clone()
                    } else {
                        "unknown panic".to_string()
                    }
                };
                log::warn!(
                    "subscriber {} panicked on {}: {}",
                    sub.name(),
                    event.kind.as_label(),
                    info
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Recorder {
        tag: &'static str,
        seen: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl Subscribe for Recorder {
        async fn on_event(&self, _event: &Event) {
            self.seen.lock().unwrap().push(self.tag);
        }
        fn name(&self) -> &'static str {
            self.tag
        }
    }

    struct Panicker;

    #[async_trait]
    impl Subscribe for Panicker {
        async fn on_event(&self, _event: &Event) {
            panic!("listener blew up");
        }
        fn name(&self) -> &'static str {
            "panicker"
        }
    }

    #[tokio::test]
    async fn delivers_in_registration_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let set = SubscriberSet::new(vec![
            Arc::new(Recorder { tag: "first", seen: Arc::clone(&seen) }),
            Arc::new(Recorder { tag: "second", seen: Arc::clone(&seen) }),
        ]);

        set.emit(&Event::new(EventKind::LeaderTakeover, "a")).await;
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn panicking_subscriber_does_not_stop_delivery() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let set = SubscriberSet::new(vec![
            Arc::new(Panicker) as Arc<dyn Subscribe>,
            Arc::new(Recorder { tag: "survivor", seen: Arc::clone(&seen) }),
        ]);

        set.emit(&Event::new(EventKind::LeaderStepdown, "a")).await;
        assert_eq!(*seen.lock().unwrap(), vec!["survivor"]);
    }

    #[tokio::test]
    async fn empty_set_is_a_no_op() {
        let set = SubscriberSet::new(Vec::new());
        assert!(set.is_empty());
        set.emit(&Event::new(EventKind::LeaderStepdown, "a")).await;
    }
}
