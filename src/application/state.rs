//! Shared snapshot state.
//!
//! Holds the "current" and "previous" snapshots. Only the poll loop writes;
//! the dispatcher reads `previous` to compute price arrows.

use parking_lot::RwLock;

use crate::domain::StateSnapshot;

#[derive(Debug, Default)]
struct Snapshots {
    current: Option<StateSnapshot>,
    previous: Option<StateSnapshot>,
}

/// Current/previous snapshot pair behind a single lock.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    inner: RwLock<Snapshots>,
}

impl SnapshotStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the current snapshot.
    #[must_use]
    pub fn current(&self) -> Option<StateSnapshot> {
        self.inner.read().current.clone()
    }

    /// Clone of the previous snapshot.
    #[must_use]
    pub fn previous(&self) -> Option<StateSnapshot> {
        self.inner.read().previous.clone()
    }

    /// Whether `candidate` differs from the current snapshot.
    ///
    /// Having no current snapshot counts as a difference.
    #[must_use]
    pub fn differs_from_current(&self, candidate: &StateSnapshot) -> bool {
        self.inner.read().current.as_ref() != Some(candidate)
    }

    /// Move current into previous. Returns whether there was a current
    /// snapshot to move.
    pub fn demote_current(&self) -> bool {
        let mut guard = self.inner.write();
        guard.previous = guard.current.clone();
        guard.previous.is_some()
    }

    /// Replace the current snapshot.
    pub fn set_current(&self, snapshot: StateSnapshot) {
        self.inner.write().current = Some(snapshot);
    }
}
