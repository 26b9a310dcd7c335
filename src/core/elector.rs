//! # LeaderElector: the election state machine and its poll loop.
//!
//! Owns the lease key, the local [`Role`], and the recurring timer. The only
//! mutator of role state; all store mutations happen inside the sequential
//! tick path.
//!
//! ## Tick flow
//! ```text
//! check_leader()
//!   ├─ get(lease_key) fails ──► log + report, tick ends (cadence retries)
//!   ├─ holder == self ────────► set_expiration(lease_ttl)        (no event)
//!   ├─ holder == other ───────► was Leader?
//!   │                             ├─ yes ─► emit LeaderStepdown
//!   │                             │         role = Follower
//!   │                             │         report MissedRenewal
//!   │                             └─ no  ─► nothing (normal observation)
//!   └─ vacant ────────────────► emit LeaderStepdown (unconditional)
//!                               role = Follower
//!                               try_become_leader()
//!                                 ├─ set_if_absent won ─► role = Leader
//!                                 │                       set_expiration
//!                                 │                       emit LeaderTakeover
//!                                 ├─ lost the race ─────► role = Follower
//!                                 └─ store failed ──────► role = Follower
//! ```
//!
//! ## Rules
//! - Ticks run **sequentially** inside one spawned loop; a slow tick delays
//!   the next (`MissedTickBehavior::Delay`), never overlaps it.
//! - On any transition out of Leader the stepdown event is fully delivered
//!   to registered subscribers **before** the role cell changes, so a
//!   listener reading the role during the event still sees Leader.
//! - Vacancy emits a stepdown even on instances that were already followers.
//!   Listeners must be idempotent; this is a known duplicate-emission hazard
//!   preserved so consumers get a defensive signal on every vacancy.
//! - The elector degrades to Follower on uncertainty rather than assuming
//!   leadership it cannot prove it holds.

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::core::config::ElectorConfig;
use crate::core::role::{Role, RoleCell};
use crate::error::ElectError;
use crate::events::{Bus, Event, EventKind};
use crate::report::{Anomaly, LogReporter, Reporter};
use crate::store::{LeaseStore, StoreError};
use crate::subscribers::{Subscribe, SubscriberSet};

/// Handle to the running poll loop; exists between `init()` and `shutdown()`.
struct PollGuard {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

/// State shared between the elector handle and its spawned poll loop.
struct Shared {
    cfg: ElectorConfig,
    /// `<prefix>:main_instance_leader`, derived once at construction.
    leader_key: String,
    /// Instance id attached to every emitted event.
    instance: Arc<str>,
    store: Arc<dyn LeaseStore>,
    role: RoleCell,
    bus: Bus,
    subs: SubscriberSet,
    reporter: Arc<dyn Reporter>,
}

/// Elects one leader among peers sharing a [`LeaseStore`].
///
/// Construct with [`new`](LeaderElector::new), then drive with
/// [`init`](LeaderElector::init) / [`shutdown`](LeaderElector::shutdown).
/// At most one poll loop runs per elector.
pub struct LeaderElector {
    shared: Arc<Shared>,
    poll: Mutex<Option<PollGuard>>,
}

impl LeaderElector {
    /// Creates an elector over the given store with the given listeners.
    ///
    /// Validates the configuration and derives the lease key. The default
    /// anomaly reporter logs at warn; replace it with
    /// [`with_reporter`](LeaderElector::with_reporter).
    pub fn new(
        cfg: ElectorConfig,
        store: Arc<dyn LeaseStore>,
        subscribers: Vec<Arc<dyn Subscribe>>,
    ) -> Result<Self, ElectError> {
        cfg.validate()?;

        if cfg.poll_interval >= cfg.lease_ttl {
            log::warn!(
                "[instance {}] poll interval {:?} >= lease ttl {:?}; a healthy leader may lose its lease between renewals",
                cfg.instance_id,
                cfg.poll_interval,
                cfg.lease_ttl,
            );
        }

        let leader_key = cfg.leader_key();
        let instance: Arc<str> = cfg.instance_id.as_str().into();
        let bus = Bus::new(cfg.bus_capacity_clamped());

        Ok(Self {
            shared: Arc::new(Shared {
                cfg,
                leader_key,
                instance,
                store,
                role: RoleCell::new(),
                bus,
                subs: SubscriberSet::new(subscribers),
                reporter: Arc::new(LogReporter),
            }),
            poll: Mutex::new(None),
        })
    }

    /// Replaces the anomaly reporter. Call before [`init`](LeaderElector::init).
    #[must_use]
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        match Arc::get_mut(&mut self.shared) {
            Some(shared) => shared.reporter = reporter,
            // Only possible while a poll loop holds a clone.
            None => log::warn!(
                "[instance {}] reporter not replaced: elector is running",
                self.shared.cfg.instance_id,
            ),
        }
        self
    }

    /// Starts the elector: one immediate acquisition attempt (no initial
    /// wait), then a recurring poll loop every `poll_interval`.
    ///
    /// Returns [`ElectError::AlreadyRunning`] if a poll loop is already live.
    pub async fn init(&self) -> Result<(), ElectError> {
        {
            let mut poll = self.poll.lock().expect("poll guard lock poisoned");
            if poll.is_some() {
                return Err(ElectError::AlreadyRunning);
            }

            let token = CancellationToken::new();
            let handle = tokio::spawn(run_poll_loop(Arc::clone(&self.shared), token.clone()));
            *poll = Some(PollGuard { token, handle });
        }

        self.shared.try_become_leader().await;
        Ok(())
    }

    /// Stops the elector: cancels the poll loop (no tick runs after this
    /// returns), then if currently Leader issues a best-effort delete of the
    /// lease key. Release failure is swallowed — the lease self-expires at
    /// most `lease_ttl` after the last renewal. Idempotent.
    pub async fn shutdown(&self) {
        let guard = self.poll.lock().expect("poll guard lock poisoned").take();
        if let Some(PollGuard { token, handle }) = guard {
            token.cancel();
            let _ = handle.await;
        }

        if self.shared.role.is_leader() {
            if let Err(err) = self.shared.store.delete(&self.shared.leader_key).await {
                log::warn!(
                    "[instance {}] lease release failed ({err}); key expires within {:?}",
                    self.shared.cfg.instance_id,
                    self.shared.cfg.lease_ttl,
                );
            }
        }
    }

    /// Read-only diagnostic: the current holder id, independent of local role.
    pub async fn fetch_leader_key(&self) -> Result<Option<String>, StoreError> {
        self.shared.store.get(&self.shared.leader_key).await
    }

    /// This instance's stable unique id.
    pub fn instance_id(&self) -> &str {
        &self.shared.cfg.instance_id
    }

    /// Current local role. May be briefly stale between poll ticks.
    pub fn role(&self) -> Role {
        self.shared.role.get()
    }

    /// Whether this instance currently believes it is the leader.
    pub fn is_leader(&self) -> bool {
        self.shared.role.is_leader()
    }

    /// Whether a poll loop is currently live (between `init` and `shutdown`).
    pub fn is_running(&self) -> bool {
        self.poll.lock().expect("poll guard lock poisoned").is_some()
    }

    /// New passive observer of leadership events (broadcast, may lag).
    pub fn watch(&self) -> tokio::sync::broadcast::Receiver<Event> {
        self.shared.bus.subscribe()
    }
}

/// The recurring timer. First tick fires one interval after `init` (the
/// immediate acquisition attempt covers startup).
async fn run_poll_loop(shared: Arc<Shared>, token: CancellationToken) {
    let start = time::Instant::now() + shared.cfg.poll_interval;
    let mut ticker = time::interval_at(start, shared.cfg.poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = ticker.tick() => shared.check_leader().await,
        }
    }
}

impl Shared {
    /// One poll tick: reaffirm, detect takeover, or detect vacancy.
    async fn check_leader(&self) {
        let holder = match self.store.get(&self.leader_key).await {
            Ok(holder) => holder,
            Err(err) => {
                log::warn!(
                    "[instance {}] leader check failed, retrying next tick: {err}",
                    self.cfg.instance_id,
                );
                self.reporter.report(&Anomaly::StoreUnavailable {
                    op: "get",
                    message: err.to_string(),
                });
                return;
            }
        };

        match holder.as_deref() {
            Some(id) if id == self.cfg.instance_id => {
                log::debug!("[instance {}] leader is this instance", self.cfg.instance_id);

                if let Err(err) = self
                    .store
                    .set_expiration(&self.leader_key, self.cfg.lease_ttl)
                    .await
                {
                    log::warn!(
                        "[instance {}] lease renewal failed, retrying next tick: {err}",
                        self.cfg.instance_id,
                    );
                    self.reporter.report(&Anomaly::StoreUnavailable {
                        op: "set_expiration",
                        message: err.to_string(),
                    });
                }
            }
            Some(other) => {
                log::debug!(
                    "[instance {}] leader is other instance {other:?}",
                    self.cfg.instance_id,
                );

                if self.role.is_leader() {
                    // We missed a renewal: the lease expired or another
                    // instance raced a concurrent acquisition.
                    self.emit(EventKind::LeaderStepdown).await;
                    self.role.set(Role::Follower);
                    self.reporter.report(&Anomaly::MissedRenewal {
                        instance: self.cfg.instance_id.clone(),
                    });
                }
            }
            None => {
                log::debug!(
                    "[instance {}] leadership vacant, attempting to become leader",
                    self.cfg.instance_id,
                );

                // Emitted even when already a follower; listeners must
                // tolerate back-to-back stepdowns.
                self.emit(EventKind::LeaderStepdown).await;
                self.role.set(Role::Follower);
                self.try_become_leader().await;
            }
        }
    }

    /// One atomic conditional write: succeeds only if leadership is vacant.
    async fn try_become_leader(&self) {
        let won = match self
            .store
            .set_if_absent(&self.leader_key, &self.cfg.instance_id)
            .await
        {
            Ok(won) => won,
            Err(err) => {
                log::warn!(
                    "[instance {}] acquisition attempt failed, retrying next tick: {err}",
                    self.cfg.instance_id,
                );
                self.reporter.report(&Anomaly::StoreUnavailable {
                    op: "set_if_absent",
                    message: err.to_string(),
                });
                // Cannot prove leadership; degrade.
                self.role.set(Role::Follower);
                return;
            }
        };

        if won {
            log::debug!("[instance {}] leader is now this instance", self.cfg.instance_id);

            self.role.set(Role::Leader);

            if let Err(err) = self
                .store
                .set_expiration(&self.leader_key, self.cfg.lease_ttl)
                .await
            {
                log::warn!(
                    "[instance {}] initial lease expiry failed, retrying next tick: {err}",
                    self.cfg.instance_id,
                );
                self.reporter.report(&Anomaly::StoreUnavailable {
                    op: "set_expiration",
                    message: err.to_string(),
                });
            }

            self.emit(EventKind::LeaderTakeover).await;
        } else {
            // Lost the race, or a concurrent holder appeared.
            self.role.set(Role::Follower);
        }
    }

    /// Publishes to passive observers, then delivers to registered listeners
    /// inside this tick.
    async fn emit(&self, kind: EventKind) {
        let ev = Event::new(kind, Arc::clone(&self.instance));
        self.bus.publish_ref(&ev);
        self.subs.emit(&ev).await;
    }
}
