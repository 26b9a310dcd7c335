//! # leadvisor
//!
//! **Leadvisor** elects exactly one leader among a fleet of identical peer
//! instances that share a coordination store (any key-value service offering
//! atomic conditional writes and key expiry).
//!
//! The leader performs exclusive duties (schedulers, pollers, recovery scans);
//! followers stay passive until the leader fails or steps down, at which point
//! another instance takes over without manual intervention.
//!
//! ## Architecture
//! ```text
//!  instance A              instance B              instance C
//! ┌───────────────┐       ┌───────────────┐       ┌───────────────┐
//! │ LeaderElector │       │ LeaderElector │       │ LeaderElector │
//! │  role: Leader │       │ role: Follower│       │ role: Follower│
//! └───────┬───────┘       └───────┬───────┘       └───────┬───────┘
//!         │ renew (TTL)           │ poll                  │ poll
//!         ▼                       ▼                       ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  coordination store (LeaseStore)                              │
//! │  <prefix>:main_instance_leader = "A"   (expires in N seconds) │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each elector runs one poll loop:
//! ```text
//! init()
//!   ├─► try_become_leader()              (immediate, no initial wait)
//!   └─► spawn poll loop, every poll_interval:
//!         check_leader()
//!           ├─ holder == self  ─► refresh TTL                   (no event)
//!           ├─ holder == other ─► was Leader?   ─► LeaderStepdown + anomaly
//!           │                     was Follower? ─► nothing
//!           └─ vacant          ─► LeaderStepdown (always)
//!                                 └─► try_become_leader()
//!                                       ├─ won  ─► LeaderTakeover
//!                                       └─ lost ─► stay Follower
//! shutdown()
//!   ├─► cancel poll loop (no further ticks)
//!   └─► if Leader: best-effort delete of the lease key
//! ```
//!
//! ## Guarantees (and non-guarantees)
//! - At most one instance holds the lease at any instant; a crashed leader's
//!   lease self-expires after `lease_ttl`, bounding leaderless time.
//! - This is a **soft, TTL-bounded lease**: it favors availability and
//!   simplicity over strict consensus. No quorum, no fencing tokens.
//! - Listeners must be idempotent: vacancy detection re-emits
//!   [`EventKind::LeaderStepdown`] even on instances that were already
//!   followers, so back-to-back stepdowns are possible by design.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use leadvisor::{ElectorConfig, LeaderElector, MemoryStore};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cfg = ElectorConfig::new("instance-a", "myapp")
//!         .with_lease_ttl(Duration::from_secs(10))
//!         .with_poll_interval(Duration::from_secs(3));
//!
//!     let store = Arc::new(MemoryStore::new());
//!     let elector = Arc::new(LeaderElector::new(cfg, store, Vec::new())?);
//!
//!     elector.init().await?;
//!     assert!(elector.is_leader()); // empty store: first caller wins
//!     elector.shutdown().await;
//!     Ok(())
//! }
//! ```

mod core;
mod error;
mod events;
mod report;
mod store;
mod subscribers;

// ---- Public re-exports ----

pub use core::{ElectorConfig, LeaderElector, Role};
pub use error::{ConfigError, ElectError};
pub use events::{Bus, Event, EventKind};
pub use report::{Anomaly, LogReporter, Reporter};
pub use store::{LeaseStore, MemoryStore, StoreError};
pub use subscribers::{Subscribe, SubscriberSet};

// Optional: expose a simple built-in logging subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
