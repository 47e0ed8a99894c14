//! Pending-Set Tracker
//!
//! Ids with an outstanding request. Drives loader overlays only.

use std::collections::BTreeSet;

use crate::models::TodoId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingIds(BTreeSet<TodoId>);

impl PendingIds {
    pub fn mark(&mut self, id: TodoId) {
        self.0.insert(id);
    }

    pub fn mark_all(&mut self, ids: &[TodoId]) {
        self.0.extend(ids.iter().copied());
    }

    pub fn release(&mut self, id: TodoId) {
        self.0.remove(&id);
    }

    pub fn release_all(&mut self, ids: &[TodoId]) {
        for id in ids {
            self.0.remove(id);
        }
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.0.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = TodoId> + '_ {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_release_batch() {
        let mut pending = PendingIds::default();
        pending.mark(1);
        pending.mark_all(&[2, 3]);
        assert_eq!(pending.iter().collect::<Vec<_>>(), vec![1, 2, 3]);

        pending.release_all(&[2, 3]);
        assert!(pending.contains(1));
        assert_eq!(pending.len(), 1);

        // Releasing twice is harmless
        pending.release(1);
        pending.release(1);
        assert!(pending.is_empty());
    }
}
