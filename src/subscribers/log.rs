//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints leadership events to stdout in a human-readable
//! format. This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [leader-takeover] instance=instance-a seq=4
//! [leader-stepdown] instance=instance-a seq=9
//! ```

use async_trait::async_trait;

use crate::events::Event;
use crate::subscribers::Subscribe;

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature. Not intended for production use —
/// implement a custom [`Subscribe`] for structured logging or metrics.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        println!("[{}] instance={} seq={}", e.kind.as_label(), e.instance, e.seq);
    }

    fn name(&self) -> &'static str {
        "log-writer"
    }
}
