//! Recipient registry.
//!
//! Chats are added when they first interact with the bot and removed only
//! after a delivery attempt reports them as invalid.

use std::collections::HashSet;

use parking_lot::RwLock;

use crate::domain::RecipientId;

/// Thread-safe set of broadcast destinations.
#[derive(Debug, Default)]
pub struct RecipientRegistry {
    members: RwLock<HashSet<RecipientId>>,
}

impl RecipientRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a recipient. Returns `true` if it was not registered yet.
    pub fn add(&self, id: RecipientId) -> bool {
        self.members.write().insert(id)
    }

    /// Remove a batch of recipients. Returns how many were present.
    pub fn remove<'a, I>(&self, ids: I) -> usize
    where
        I: IntoIterator<Item = &'a RecipientId>,
    {
        let mut members = self.members.write();
        ids.into_iter().filter(|id| members.remove(*id)).count()
    }

    /// Point-in-time copy of the members, safe to iterate while other
    /// tasks add or remove.
    #[must_use]
    pub fn snapshot(&self) -> Vec<RecipientId> {
        let mut ids: Vec<_> = self.members.read().iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn contains(&self, id: RecipientId) -> bool {
        self.members.read().contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.read().is_empty()
    }
}

impl FromIterator<RecipientId> for RecipientRegistry {
    fn from_iter<I: IntoIterator<Item = RecipientId>>(iter: I) -> Self {
        Self {
            members: RwLock::new(iter.into_iter().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn add_is_idempotent() {
        let registry = RecipientRegistry::new();
        assert!(registry.add(RecipientId::new(1)));
        assert!(!registry.add(RecipientId::new(1)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn remove_batch_counts_present_members() {
        let registry: RecipientRegistry = [1, 2, 3].into_iter().map(RecipientId::new).collect();

        let removed = registry.remove(&[RecipientId::new(2), RecipientId::new(9)]);

        assert_eq!(removed, 1);
        assert_eq!(registry.snapshot(), vec![RecipientId::new(1), RecipientId::new(3)]);
    }

    #[test]
    fn snapshot_is_detached_from_later_changes() {
        let registry = RecipientRegistry::new();
        registry.add(RecipientId::new(1));

        let snapshot = registry.snapshot();
        registry.add(RecipientId::new(2));

        assert_eq!(snapshot, vec![RecipientId::new(1)]);
        assert!(registry.contains(RecipientId::new(2)));
    }

    #[test]
    fn concurrent_adds_are_all_kept() {
        let registry = Arc::new(RecipientRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for i in 0..100 {
                        registry.add(RecipientId::new(t * 1000 + i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.len(), 800);
    }
}
