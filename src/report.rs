//! Anomaly reporting: the elector's hook into an external error reporter.
//!
//! Leadership loss and store outages are operational anomalies, not crate
//! errors — no failure path terminates the elector. [`Reporter`] is the seam
//! for forwarding them to whatever error/event sink the host application runs
//! (Sentry-style reporters, alerting, audit logs). [`LogReporter`] is the
//! default and forwards to [`log::warn!`].

use std::fmt;

/// Operational anomalies observed by the elector.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    /// This instance believed it was the leader, but the store shows another
    /// holder: a renewal cycle was skipped or delayed beyond the lease TTL.
    MissedRenewal {
        /// Id of the instance that lost leadership.
        instance: String,
    },

    /// A store operation failed during a poll tick; the next tick retries.
    StoreUnavailable {
        /// Which operation failed (`get`, `set_if_absent`, ...).
        op: &'static str,
        /// Backend-specific failure detail.
        message: String,
    },
}

impl Anomaly {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            Anomaly::MissedRenewal { .. } => "missed_renewal",
            Anomaly::StoreUnavailable { .. } => "store_unavailable",
        }
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::MissedRenewal { instance } => {
                write!(f, "leader {instance} failed to renew the leader key")
            }
            Anomaly::StoreUnavailable { op, message } => {
                write!(f, "store {op} failed: {message}")
            }
        }
    }
}

/// Sink for operational anomalies.
///
/// Called synchronously from the poll tick; implementations should hand off
/// quickly (enqueue, fire-and-forget) rather than perform I/O inline.
pub trait Reporter: Send + Sync + 'static {
    /// Records one anomaly.
    fn report(&self, anomaly: &Anomaly);
}

/// Default reporter: forwards anomalies to [`log::warn!`].
#[derive(Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, anomaly: &Anomaly) {
        log::warn!("[{}] {}", anomaly.as_label(), anomaly);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_instance() {
        let anomaly = Anomaly::MissedRenewal { instance: "instance-a".into() };
        assert_eq!(anomaly.to_string(), "leader instance-a failed to renew the leader key");
        assert_eq!(anomaly.as_label(), "missed_renewal");
    }

    #[test]
    fn store_anomaly_names_the_operation() {
        let anomaly = Anomaly::StoreUnavailable { op: "get", message: "connection refused".into() };
        assert_eq!(anomaly.to_string(), "store get failed: connection refused");
    }
}
