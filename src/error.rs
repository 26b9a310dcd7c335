//! Error types used by the elector and its collaborators.
//!
//! This module defines two error enums:
//!
//! - [`ConfigError`] — rejected [`ElectorConfig`](crate::ElectorConfig) values.
//! - [`ElectError`] — errors surfaced by the elector's public lifecycle API.
//!
//! Store-level failures ([`StoreError`](crate::StoreError)) never propagate out
//! of the poll loop: every one is treated as transient, logged/reported, and
//! left for the next scheduled tick to retry. Only `new()` and `init()` return
//! errors to the caller.

use thiserror::Error;

use crate::store::StoreError;

/// Rejected configuration values.
///
/// Produced by [`ElectorConfig::validate`](crate::ElectorConfig::validate),
/// which runs inside [`LeaderElector::new`](crate::LeaderElector::new).
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Instance id must be a non-empty string.
    #[error("instance id must not be empty")]
    EmptyInstanceId,

    /// Key prefix must be a non-empty string.
    #[error("key prefix must not be empty")]
    EmptyKeyPrefix,

    /// Key prefix may not contain whitespace or `:` (the key separator).
    #[error("key prefix {prefix:?} contains whitespace or ':'")]
    InvalidKeyPrefix {
        /// The offending prefix.
        prefix: String,
    },

    /// Lease TTL must be greater than zero.
    #[error("lease ttl must be greater than zero")]
    ZeroLeaseTtl,

    /// Poll interval must be greater than zero.
    #[error("poll interval must be greater than zero")]
    ZeroPollInterval,
}

/// # Errors produced by the elector's public API.
///
/// Nothing inside the poll loop escalates: the fixed polling cadence is the
/// retry mechanism, and the elector degrades to Follower on uncertainty
/// rather than failing.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ElectError {
    /// Configuration was rejected at construction.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// `init()` was called while a poll loop is already running.
    #[error("elector is already running (init called twice without shutdown)")]
    AlreadyRunning,

    /// A store operation failed on a diagnostic path (e.g. `fetch_leader_key`).
    #[error("store operation failed: {0}")]
    Store(#[from] StoreError),
}

impl ElectError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use leadvisor::ElectError;
    ///
    /// assert_eq!(ElectError::AlreadyRunning.as_label(), "elector_already_running");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ElectError::Config(_) => "elector_invalid_config",
            ElectError::AlreadyRunning => "elector_already_running",
            ElectError::Store(_) => "elector_store_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ElectError::Config(err) => format!("config rejected: {err}"),
            ElectError::AlreadyRunning => "already running".to_string(),
            ElectError::Store(err) => format!("store error: {err}"),
        }
    }
}
