//! # Coordination store contract.
//!
//! [`LeaseStore`] is the seam between the elector and whatever key-value
//! service coordinates the fleet. The elector relies on exactly four
//! operations, and on one of them — [`set_if_absent`](LeaseStore::set_if_absent)
//! — being atomic: it is the sole mutual-exclusion primitive in the design.
//!
//! ## Contracts
//! - `get` is linearizable relative to writes from all peers.
//! - `set_if_absent` writes only if the key currently has no value, atomically.
//! - `set_expiration` resets the key's TTL; after `ttl` with no further call
//!   the store deletes the key autonomously.
//! - `delete` removes the key unconditionally.
//!
//! All operations are asynchronous network calls and may fail. The elector
//! treats every failure as transient: errors are logged/reported and the next
//! poll tick retries naturally, with no extra backoff layered on top.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Failure of a coordination store call.
///
/// Every variant is transient by contract: the caller's polling cadence is
/// the retry mechanism, so implementations should not retry internally.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached or refused the operation.
    #[error("store unavailable: {message}")]
    Unavailable {
        /// Backend-specific detail (connection refused, cluster down, ...).
        message: String,
    },

    /// The operation did not complete within the client's deadline.
    #[error("store call timed out after {elapsed:?}")]
    Timeout {
        /// How long the client waited before giving up.
        elapsed: Duration,
    },
}

impl StoreError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            StoreError::Unavailable { .. } => "store_unavailable",
            StoreError::Timeout { .. } => "store_timeout",
        }
    }

    /// Builds an [`Unavailable`](StoreError::Unavailable) from any message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable {
            message: message.into(),
        }
    }
}

/// Contract for the shared coordination store.
///
/// Implementations must uphold the atomicity of `set_if_absent`; everything
/// else in the election design follows from it.
#[async_trait]
pub trait LeaseStore: Send + Sync + 'static {
    /// Reads the current value of `key`, or `None` if absent/expired.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Atomically writes `value` to `key` only if `key` has no value.
    ///
    /// Returns `true` if the write happened, `false` if the key was taken.
    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool, StoreError>;

    /// Resets `key`'s time-to-live. After `ttl` elapses with no further call,
    /// the store deletes the key autonomously.
    async fn set_expiration(&self, key: &str, ttl: Duration) -> Result<(), StoreError>;

    /// Unconditionally removes `key`.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}
