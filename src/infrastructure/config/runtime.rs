//! Loop timing configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::application::LoopTiming;

/// Tick periods of the poll loop and the send loop.
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    /// Period between state polls (default: 1000).
    #[serde(default = "default_tick_ms")]
    pub poll_interval_ms: u64,
    /// Granularity at which interval triggers are checked (default: 1000).
    #[serde(default = "default_tick_ms")]
    pub scheduler_tick_ms: u64,
}

const fn default_tick_ms() -> u64 {
    1_000
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_tick_ms(),
            scheduler_tick_ms: default_tick_ms(),
        }
    }
}

impl RuntimeConfig {
    #[must_use]
    pub fn timing(&self) -> LoopTiming {
        LoopTiming {
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            scheduler_tick: Duration::from_millis(self.scheduler_tick_ms),
        }
    }
}
