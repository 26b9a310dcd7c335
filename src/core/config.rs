//! # Elector configuration.
//!
//! Provides [`ElectorConfig`] — immutable settings for one
//! [`LeaderElector`](crate::LeaderElector).
//!
//! ## Field semantics
//! - `instance_id`: stable unique id of this process (supplied externally)
//! - `key_prefix`: coordination-store namespace; the lease key is derived as
//!   `<prefix>:main_instance_leader`
//! - `lease_ttl`: seconds of silence after which the store drops the lease
//! - `poll_interval`: cadence of the check/renew loop, independent of the TTL
//! - `bus_capacity`: ring buffer size of the observer broadcast channel
//!
//! ## Tuning
//! `poll_interval` must be comfortably below `lease_ttl`, or a healthy leader
//! can lose its lease between renewals. The defaults (3s poll, 10s TTL) give
//! two renewal chances before expiry. Validation does not enforce the ratio —
//! the two knobs are independent by design — but `LeaderElector::new` logs a
//! warning when `poll_interval >= lease_ttl`.

use std::time::Duration;

use crate::error::ConfigError;

/// Suffix appended to the validated prefix to form the singleton lease key.
pub(crate) const LEADER_KEY_SUFFIX: &str = "main_instance_leader";

/// Immutable configuration for one elector.
#[derive(Clone, Debug)]
pub struct ElectorConfig {
    /// Stable unique id of this running process.
    pub instance_id: String,

    /// Namespace prefix for the lease key (no whitespace, no `:`).
    pub key_prefix: String,

    /// Lease time-to-live. After this much silence the store deletes the
    /// lease key autonomously and leadership becomes vacant.
    pub lease_ttl: Duration,

    /// Interval between poll ticks (check/renew/acquire).
    pub poll_interval: Duration,

    /// Capacity of the observer broadcast channel (min 1, clamped by Bus).
    pub bus_capacity: usize,
}

impl ElectorConfig {
    /// Creates a config with the given identity and namespace, and default
    /// timing (10s TTL, 3s poll interval, bus capacity 64).
    pub fn new(instance_id: impl Into<String>, key_prefix: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            key_prefix: key_prefix.into(),
            lease_ttl: Duration::from_secs(10),
            poll_interval: Duration::from_secs(3),
            bus_capacity: 64,
        }
    }

    /// Sets the lease TTL.
    #[must_use]
    pub fn with_lease_ttl(mut self, ttl: Duration) -> Self {
        self.lease_ttl = ttl;
        self
    }

    /// Sets the poll interval.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Sets the observer bus capacity.
    #[must_use]
    pub fn with_bus_capacity(mut self, capacity: usize) -> Self {
        self.bus_capacity = capacity;
        self
    }

    /// Checks every field against its constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.instance_id.is_empty() {
            return Err(ConfigError::EmptyInstanceId);
        }
        if self.key_prefix.is_empty() {
            return Err(ConfigError::EmptyKeyPrefix);
        }
        if self.key_prefix.contains(char::is_whitespace) || self.key_prefix.contains(':') {
            return Err(ConfigError::InvalidKeyPrefix {
                prefix: self.key_prefix.clone(),
            });
        }
        if self.lease_ttl.is_zero() {
            return Err(ConfigError::ZeroLeaseTtl);
        }
        if self.poll_interval.is_zero() {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }

    /// Derives the singleton lease key for this namespace.
    pub fn leader_key(&self) -> String {
        format!("{}:{}", self.key_prefix, LEADER_KEY_SUFFIX)
    }

    /// Returns a bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config_passes() {
        let cfg = ElectorConfig::new("instance-a", "myapp");
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.leader_key(), "myapp:main_instance_leader");
    }

    #[test]
    fn empty_instance_id_rejected() {
        let cfg = ElectorConfig::new("", "myapp");
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyInstanceId));
    }

    #[test]
    fn empty_prefix_rejected() {
        let cfg = ElectorConfig::new("a", "");
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyKeyPrefix));
    }

    #[test]
    fn prefix_with_separator_rejected() {
        let cfg = ElectorConfig::new("a", "my:app");
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidKeyPrefix { .. })
        ));
    }

    #[test]
    fn prefix_with_whitespace_rejected() {
        let cfg = ElectorConfig::new("a", "my app");
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidKeyPrefix { .. })
        ));
    }

    #[test]
    fn zero_durations_rejected() {
        let cfg = ElectorConfig::new("a", "app").with_lease_ttl(Duration::ZERO);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroLeaseTtl));

        let cfg = ElectorConfig::new("a", "app").with_poll_interval(Duration::ZERO);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroPollInterval));
    }
}
