//! # Leadership role state.
//!
//! [`Role`] is the two-state machine the elector drives; [`RoleCell`] holds
//! it with single-writer discipline: only the elector's sequential tick path
//! mutates the cell, every other party reads. Reads are lock-free.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

/// The two leadership roles.
///
/// Before the first check completes an elector reads as [`Role::Follower`];
/// there is no separate "undefined" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// This instance holds a valid lease and runs leader-only duties.
    Leader,
    /// This instance does not hold the lease.
    Follower,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Leader => f.write_str("leader"),
            Role::Follower => f.write_str("follower"),
        }
    }
}

/// Single-writer cell holding the current [`Role`].
///
/// The elector is the only writer; collaborators read freely. Between poll
/// ticks the value may be briefly stale relative to the store (eventual, not
/// instantaneous, consistency).
#[derive(Debug, Default)]
pub(crate) struct RoleCell {
    is_leader: AtomicBool,
}

impl RoleCell {
    /// Starts as Follower.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn get(&self) -> Role {
        if self.is_leader.load(AtomicOrdering::Acquire) {
            Role::Leader
        } else {
            Role::Follower
        }
    }

    pub(crate) fn is_leader(&self) -> bool {
        self.is_leader.load(AtomicOrdering::Acquire)
    }

    /// Elector-only. All writes happen inside the sequential tick path.
    pub(crate) fn set(&self, role: Role) {
        self.is_leader
            .store(matches!(role, Role::Leader), AtomicOrdering::Release);
    }
}
