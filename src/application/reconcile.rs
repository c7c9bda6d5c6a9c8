//! Reconciliation loop: state polling, change detection and re-scheduling.
//!
//! # Architecture
//!
//! ```text
//!   poll loop (fixed tick)                      send loop (scheduler tick)
//!          │                                              │
//!          ▼                                              ▼
//!   Reconciler::refresh ──reschedule/cancel──> IntervalScheduler::take_due
//!          │                                              │
//!          └──── on change ──> Dispatcher::send_rates <───┘
//! ```
//!
//! Both loops share the [`Reconciler`] through an `Arc`. Snapshot state is
//! written only by `refresh`; the trigger table is guarded by the
//! scheduler's own lock.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use super::dispatch::Dispatcher;
use super::schedule::{period_of, IntervalScheduler};
use super::state::SnapshotStore;
use crate::error::{Error, Result};
use crate::port::StateProvider;

/// What a single `refresh` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The provider could not be reached or returned garbage. Nothing changed.
    FetchFailed,
    /// Sending is disabled; every interval trigger was cancelled.
    Disabled,
    /// On-change mode saw a new snapshot and broadcast it.
    Dispatched,
    /// On-change mode saw the same snapshot again.
    Unchanged,
    /// On-interval mode (re)built the interval schedule.
    Rescheduled,
    /// On-interval mode kept the schedule already in effect.
    ScheduleKept,
    /// On-interval mode with an unknown unit or a zero value. No trigger.
    Unschedulable,
    /// Neither on-change nor on-interval is set.
    Idle,
}

/// Loop timing for [`Reconciler::spawn`].
#[derive(Debug, Clone, Copy)]
pub struct LoopTiming {
    /// Period of the poll loop.
    pub poll_interval: Duration,
    /// How often the send loop checks for due triggers.
    pub scheduler_tick: Duration,
}

impl Default for LoopTiming {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
            scheduler_tick: Duration::from_secs(1),
        }
    }
}

/// Owns the snapshot state, the interval schedule and the dispatcher.
pub struct Reconciler {
    provider: Arc<dyn StateProvider>,
    snapshots: Arc<SnapshotStore>,
    scheduler: Arc<IntervalScheduler>,
    dispatcher: Arc<Dispatcher>,
}

impl Reconciler {
    pub fn new(
        provider: Arc<dyn StateProvider>,
        snapshots: Arc<SnapshotStore>,
        scheduler: Arc<IntervalScheduler>,
        dispatcher: Arc<Dispatcher>,
    ) -> Self {
        Self {
            provider,
            snapshots,
            scheduler,
            dispatcher,
        }
    }

    #[must_use]
    pub fn snapshots(&self) -> &Arc<SnapshotStore> {
        &self.snapshots
    }

    #[must_use]
    pub fn scheduler(&self) -> &Arc<IntervalScheduler> {
        &self.scheduler
    }

    #[must_use]
    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    /// Poll the provider once and act on the new snapshot.
    ///
    /// Never fails: a fetch error is logged and leaves all state untouched.
    /// On success the old current snapshot becomes previous before any
    /// broadcast, and the new snapshot becomes current afterwards.
    pub async fn refresh(&self) -> RefreshOutcome {
        let snapshot = match self.provider.fetch().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(
                    provider = %self.provider.describe(),
                    error = %e,
                    "Failed to fetch state"
                );
                return RefreshOutcome::FetchFailed;
            }
        };

        let changed = self.snapshots.differs_from_current(&snapshot);
        self.snapshots.demote_current();

        let behavior = snapshot.behavior();
        let outcome = if behavior.disabled {
            self.scheduler.cancel_all();
            RefreshOutcome::Disabled
        } else if behavior.on_change {
            if changed {
                self.dispatch("state changed").await;
                RefreshOutcome::Dispatched
            } else {
                RefreshOutcome::Unchanged
            }
        } else if behavior.on_interval {
            if period_of(&behavior.interval).is_none() {
                let cancelled = self.scheduler.cancel_all();
                let repeated = self.snapshots.previous().is_some_and(|p| {
                    p.behavior().on_interval && p.behavior().interval == behavior.interval
                });
                if cancelled > 0 || !repeated {
                    warn!(
                        interval = %behavior.interval,
                        "Unsupported send interval, nothing scheduled"
                    );
                }
                RefreshOutcome::Unschedulable
            } else if self.scheduler.active_interval().as_ref() == Some(&behavior.interval) {
                RefreshOutcome::ScheduleKept
            } else {
                info!(interval = %behavior.interval, "Send interval changed, rescheduling");
                self.scheduler.reschedule(&behavior.interval);
                RefreshOutcome::Rescheduled
            }
        } else {
            RefreshOutcome::Idle
        };

        self.snapshots.set_current(snapshot);
        debug!(outcome = ?outcome, changed, "State refreshed");
        outcome
    }

    /// Fire every trigger due at `now`. Returns the number of broadcasts run.
    pub async fn run_due(&self, now: Instant) -> usize {
        let due = self.scheduler.take_due(now);
        for _ in 0..due {
            self.dispatch("interval elapsed").await;
        }
        due
    }

    async fn dispatch(&self, reason: &'static str) {
        debug!(reason, "Sending rates");
        if let Err(e) = self.dispatcher.send_rates().await {
            warn!(reason, error = %e, "Rates not sent, state fetch failed");
        }
    }

    /// Start the poll loop and the send loop.
    ///
    /// Both loops stop within one tick of [`ReconcilerHandle::shutdown`].
    pub fn spawn(self: Arc<Self>, timing: LoopTiming) -> ReconcilerHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let poll_task = tokio::spawn(
            Arc::clone(&self).poll_loop(timing.poll_interval, shutdown_rx.clone()),
        );
        let send_task = tokio::spawn(self.send_loop(timing.scheduler_tick, shutdown_rx));

        info!(
            poll_interval_ms = timing.poll_interval.as_millis() as u64,
            scheduler_tick_ms = timing.scheduler_tick.as_millis() as u64,
            "Reconciler started"
        );

        ReconcilerHandle {
            shutdown_tx,
            poll_task,
            send_task,
        }
    }

    async fn poll_loop(self: Arc<Self>, period: Duration, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.changed() => break,
                _ = ticker.tick() => {
                    self.refresh().await;
                }
            }
            if *shutdown.borrow() {
                break;
            }
        }
        info!("Poll loop stopped");
    }

    async fn send_loop(self: Arc<Self>, period: Duration, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.changed() => break,
                _ = ticker.tick() => {
                    self.run_due(Instant::now()).await;
                }
            }
            if *shutdown.borrow() {
                break;
            }
        }
        info!("Send loop stopped");
    }
}

/// Handle for controlling the reconciler's background loops.
pub struct ReconcilerHandle {
    shutdown_tx: watch::Sender<bool>,
    poll_task: JoinHandle<()>,
    send_task: JoinHandle<()>,
}

impl ReconcilerHandle {
    /// Signal both loops to stop and wait for them to finish.
    pub async fn shutdown(self) -> Result<()> {
        let _ = self.shutdown_tx.send(true);

        let poll = self.poll_task.await;
        let send = self.send_task.await;

        for (name, result) in [("poll", poll), ("send", send)] {
            if let Err(e) = result {
                error!(task = name, error = %e, "Reconciler task ended abnormally");
                return Err(Error::Task(format!("{name} loop: {e}")));
            }
        }
        info!("Reconciler stopped");
        Ok(())
    }
}
