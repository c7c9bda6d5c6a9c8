//! Scripted [`StateProvider`] for tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::StateSnapshot;
use crate::error::FetchError;
use crate::port::StateProvider;

#[derive(Default)]
struct Script {
    queue: VecDeque<Result<StateSnapshot, FetchError>>,
    steady: Option<StateSnapshot>,
}

/// A provider that answers from a queue, then from a steady snapshot.
///
/// Each `fetch()` pops the next queued result. When the queue is empty the
/// steady snapshot is returned, or [`FetchError::Unavailable`] if none is set.
/// Clones share the same script.
#[derive(Clone, Default)]
pub struct ScriptedProvider {
    script: Arc<Mutex<Script>>,
    fetch_count: Arc<AtomicU32>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider that always returns `snapshot`.
    pub fn steady(snapshot: StateSnapshot) -> Self {
        let provider = Self::new();
        provider.set_steady(snapshot);
        provider
    }

    pub fn set_steady(&self, snapshot: StateSnapshot) {
        self.script.lock().steady = Some(snapshot);
    }

    pub fn push(&self, snapshot: StateSnapshot) {
        self.script.lock().queue.push_back(Ok(snapshot));
    }

    pub fn push_error(&self, error: FetchError) {
        self.script.lock().queue.push_back(Err(error));
    }

    pub fn fetch_count(&self) -> u32 {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StateProvider for ScriptedProvider {
    async fn fetch(&self) -> Result<StateSnapshot, FetchError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        let mut script = self.script.lock();
        match script.queue.pop_front() {
            Some(result) => result,
            None => script
                .steady
                .clone()
                .ok_or_else(|| FetchError::Unavailable("script exhausted".into())),
        }
    }

    fn describe(&self) -> String {
        "scripted".into()
    }
}
