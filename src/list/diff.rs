//! Keyed diff between two row key sequences.
//!
//! Rows are identified by record id, so a key present in both sequences keeps
//! its row. The edit script only names keys that appear on one side; moves are
//! never produced because the store never reorders.

use crate::record::RecordId;
use std::collections::HashSet;

/// A row to drop, with its index in the previous sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRemoval {
    pub key: RecordId,
    pub index: usize,
}

/// A row to add, with its index in the next sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowInsertion {
    pub key: RecordId,
    pub index: usize,
}

/// Minimal set of row changes between two key sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditScript {
    /// Removals in ascending previous-index order
    pub removals: Vec<RowRemoval>,
    /// Insertions in ascending next-index order
    pub insertions: Vec<RowInsertion>,
}

impl EditScript {
    /// Returns true if applying the script would change nothing.
    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.insertions.is_empty()
    }

    /// Total number of row operations.
    pub fn len(&self) -> usize {
        self.removals.len() + self.insertions.len()
    }
}

/// Computes the edit script that turns `prev` into `next`.
///
/// Both sequences must hold unique keys.
pub fn diff_keys(prev: &[RecordId], next: &[RecordId]) -> EditScript {
    if prev == next {
        return EditScript::default();
    }

    let prev_set: HashSet<RecordId> = prev.iter().copied().collect();
    let next_set: HashSet<RecordId> = next.iter().copied().collect();

    let removals = prev
        .iter()
        .enumerate()
        .filter(|(_, key)| !next_set.contains(key))
        .map(|(index, &key)| RowRemoval { key, index })
        .collect();

    let insertions = next
        .iter()
        .enumerate()
        .filter(|(_, key)| !prev_set.contains(key))
        .map(|(index, &key)| RowInsertion { key, index })
        .collect();

    EditScript { removals, insertions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sequences_produce_empty_script() {
        let script = diff_keys(&[1, 2, 3], &[1, 2, 3]);
        assert!(script.is_empty());
    }

    #[test]
    fn test_single_removal() {
        let script = diff_keys(&[1, 2, 3, 4, 5], &[1, 2, 4, 5]);

        assert_eq!(script.removals, vec![RowRemoval { key: 3, index: 2 }]);
        assert!(script.insertions.is_empty());
        assert_eq!(script.len(), 1);
    }

    #[test]
    fn test_removals_and_insertions_together() {
        let script = diff_keys(&[1, 2, 3], &[2, 3, 7]);

        assert_eq!(script.removals, vec![RowRemoval { key: 1, index: 0 }]);
        assert_eq!(script.insertions, vec![RowInsertion { key: 7, index: 2 }]);
    }

    #[test]
    fn test_from_and_to_empty() {
        let filled = diff_keys(&[], &[4, 5]);
        assert_eq!(filled.insertions.len(), 2);
        assert!(filled.removals.is_empty());

        let drained = diff_keys(&[4, 5], &[]);
        assert_eq!(drained.removals.len(), 2);
        assert!(drained.insertions.is_empty());

        assert!(diff_keys(&[], &[]).is_empty());
    }

    #[test]
    fn test_reordered_keys_keep_their_rows() {
        let script = diff_keys(&[1, 2, 3], &[3, 1, 2]);
        assert!(script.is_empty());
    }
}
