//! Interval scheduler for "send rates now" triggers.
//!
//! The scheduler only keeps the trigger table. The send loop polls
//! [`IntervalScheduler::take_due`] every tick and runs one dispatch per due
//! firing. The poll loop reshapes the table through [`schedule`],
//! [`cancel_all`] and [`reschedule`].
//!
//! Cancelling clears the whole table, not a single trigger.
//!
//! [`schedule`]: IntervalScheduler::schedule
//! [`cancel_all`]: IntervalScheduler::cancel_all
//! [`reschedule`]: IntervalScheduler::reschedule

use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::{info, warn};

use crate::domain::{Interval, IntervalUnit};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Identifier of a registered trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerId(u64);

/// A live repeating trigger.
#[derive(Debug, Clone)]
pub struct Trigger {
    pub id: TriggerId,
    pub interval: Interval,
    pub period: Duration,
    pub next_due: Instant,
}

#[derive(Debug, Default)]
struct TriggerTable {
    triggers: Vec<Trigger>,
    next_id: u64,
}

impl TriggerTable {
    fn push(&mut self, interval: &Interval, now: Instant) -> Option<TriggerId> {
        let Some(period) = period_of(interval) else {
            warn!(interval = %interval, "Unsupported send interval, no trigger registered");
            return None;
        };

        let id = TriggerId(self.next_id);
        self.next_id += 1;
        self.triggers.push(Trigger {
            id,
            interval: interval.clone(),
            period,
            next_due: now + period,
        });
        info!(interval = %interval, "Send interval scheduled");
        Some(id)
    }

    fn clear(&mut self) -> usize {
        let cleared = self.triggers.len();
        self.triggers.clear();
        cleared
    }
}

/// Wall-clock period of an interval.
///
/// Returns `None` for unknown units and zero values.
#[must_use]
pub fn period_of(interval: &Interval) -> Option<Duration> {
    let unit_secs = match interval.unit {
        IntervalUnit::Minute => SECS_PER_MINUTE,
        IntervalUnit::Hour => SECS_PER_HOUR,
        IntervalUnit::Day => SECS_PER_DAY,
        IntervalUnit::Unknown => return None,
    };
    if interval.value == 0 {
        return None;
    }
    Some(Duration::from_secs(unit_secs * u64::from(interval.value)))
}

/// Table of repeating send triggers.
#[derive(Debug, Default)]
pub struct IntervalScheduler {
    table: Mutex<TriggerTable>,
}

impl IntervalScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a repeating trigger, first due one period from now.
    pub fn schedule(&self, interval: &Interval) -> Option<TriggerId> {
        self.schedule_at(interval, Instant::now())
    }

    /// Register a repeating trigger, first due one period after `now`.
    pub fn schedule_at(&self, interval: &Interval, now: Instant) -> Option<TriggerId> {
        self.table.lock().push(interval, now)
    }

    /// Drop every registered trigger. Returns how many were dropped.
    pub fn cancel_all(&self) -> usize {
        let cleared = self.table.lock().clear();
        if cleared > 0 {
            info!(cancelled = cleared, "Pending send triggers cancelled");
        }
        cleared
    }

    /// Replace the whole table with a single trigger for `interval`.
    ///
    /// Equivalent to `cancel_all` followed by `schedule`, under one lock so
    /// the send loop never observes the table in between.
    pub fn reschedule(&self, interval: &Interval) -> Option<TriggerId> {
        self.reschedule_at(interval, Instant::now())
    }

    pub fn reschedule_at(&self, interval: &Interval, now: Instant) -> Option<TriggerId> {
        let mut table = self.table.lock();
        let cleared = table.clear();
        if cleared > 0 {
            info!(cancelled = cleared, "Pending send triggers cancelled");
        }
        table.push(interval, now)
    }

    /// Interval of the active schedule, if any.
    #[must_use]
    pub fn active_interval(&self) -> Option<Interval> {
        self.table
            .lock()
            .triggers
            .first()
            .map(|t| t.interval.clone())
    }

    /// Copy of the registered triggers.
    #[must_use]
    pub fn triggers(&self) -> Vec<Trigger> {
        self.table.lock().triggers.clone()
    }

    /// Earliest due time across all triggers.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.table.lock().triggers.iter().map(|t| t.next_due).min()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.lock().triggers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.lock().triggers.is_empty()
    }

    /// Count the triggers due at `now` and advance each to its next
    /// period after `now`. Missed periods collapse into one firing.
    pub fn take_due(&self, now: Instant) -> usize {
        let mut table = self.table.lock();
        let mut due = 0;
        for trigger in table.triggers.iter_mut() {
            if trigger.next_due > now {
                continue;
            }
            due += 1;
            while trigger.next_due <= now {
                trigger.next_due += trigger.period;
            }
        }
        due
    }
}
