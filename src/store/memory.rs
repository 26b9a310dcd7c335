//! # In-process lease store with real TTL semantics.
//!
//! [`MemoryStore`] implements [`LeaseStore`] over a mutexed map. It exists for
//! three reasons: deterministic tests, runnable demos, and single-node
//! deployments where a fleet-wide coordination service would be overkill
//! (one instance, always the leader).
//!
//! ## TTL behavior
//! Expiry is lazy: every access first drops entries whose deadline has
//! passed, so a `get` after the TTL elapses observes the key as absent even
//! though no background sweeper runs. Deadlines use [`tokio::time::Instant`],
//! so tests running under paused virtual time drive expiry deterministically.
//!
//! ## Rules
//! - `set_if_absent` checks and writes under one lock hold, which makes it
//!   atomic with respect to all concurrent callers sharing the store.
//! - A key written by `set_if_absent` has **no** deadline until
//!   `set_expiration` assigns one, matching stores where creation and expiry
//!   are separate commands.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use super::client::{LeaseStore, StoreError};

/// One stored value and its optional expiry deadline.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    deadline: Option<Instant>,
}

impl Entry {
    fn expired(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| d <= now)
    }
}

/// In-process [`LeaseStore`] backed by a mutexed map.
///
/// Cheap to share: wrap in an `Arc` and hand clones to every elector under
/// test to simulate a fleet against one coordination namespace.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every entry whose deadline has passed.
    fn purge_expired(entries: &mut HashMap<String, Entry>) {
        let now = Instant::now();
        entries.retain(|_, entry| !entry.expired(now));
    }
}

#[async_trait]
impl LeaseStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        Self::purge_expired(&mut entries);
        Ok(entries.get(key).map(|e| e.value.clone()))
    }

    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool, StoreError> {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        Self::purge_expired(&mut entries);
        if entries.contains_key(key) {
            return Ok(false);
        }
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                deadline: None,
            },
        );
        Ok(true)
    }

    async fn set_expiration(&self, key: &str, ttl: Duration) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        Self::purge_expired(&mut entries);
        if let Some(entry) = entries.get_mut(key) {
            entry.deadline = Some(Instant::now() + ttl);
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        entries.remove(key);
        Ok(())
    }
}
