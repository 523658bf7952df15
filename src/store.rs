//! Ordered in-memory record collection.
//!
//! The store owns the only mutable handle to the collection. Readers get a
//! [`Snapshot`], an immutable shared slice; every effective mutation publishes
//! a whole new snapshot, so a reader never sees a half-applied change.

use crate::record::{Record, RecordId};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::sync::Arc;

/// Immutable view of the collection at one point in time.
pub type Snapshot = Arc<[Record]>;

/// Owns the ordered collection of records and its single mutation.
#[derive(Debug, Clone)]
pub struct RecordStore {
    snapshot: Snapshot,
    /// Advances on every effective mutation
    generation: u64,
}

impl RecordStore {
    /// Adopts `records` as the initial collection.
    ///
    /// Ids must be unique. A duplicate id keeps its first occurrence and the
    /// later ones are dropped with a warning.
    pub fn new(records: Vec<Record>) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        let mut unique = Vec::with_capacity(records.len());

        for record in records {
            if seen.insert(record.id()) {
                unique.push(record);
            } else {
                warn!("event=duplicate_record_dropped module=store id={}", record.id());
            }
        }

        info!("event=store_init module=store records={}", unique.len());

        Self {
            snapshot: Arc::from(unique),
            generation: 0,
        }
    }

    /// Returns the current snapshot.
    pub fn current(&self) -> Snapshot {
        Arc::clone(&self.snapshot)
    }

    /// Removes the record with the given id and returns the new snapshot.
    ///
    /// An absent id leaves the collection untouched and returns the current
    /// snapshot; a delete tapped twice lands here.
    pub fn remove(&mut self, id: RecordId) -> Snapshot {
        let Some(position) = self.snapshot.iter().position(|r| r.id() == id) else {
            debug!("event=remove_noop module=store id={}", id);
            return self.current();
        };

        let next: Vec<Record> = self
            .snapshot
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != position)
            .map(|(_, record)| record.clone())
            .collect();

        self.snapshot = Arc::from(next);
        self.generation += 1;

        info!(
            "event=record_removed module=store id={} remaining={} generation={}",
            id,
            self.snapshot.len(),
            self.generation
        );

        self.current()
    }

    /// Looks up a record by id in the current snapshot.
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.snapshot.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Number of effective mutations since creation.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(ids: &[RecordId]) -> Vec<Record> {
        ids.iter()
            .map(|&id| Record::new(id, format!("img-{id}"), format!("User {id}"), "status"))
            .collect()
    }

    fn ids(snapshot: &Snapshot) -> Vec<RecordId> {
        snapshot.iter().map(Record::id).collect()
    }

    #[test]
    fn test_remove_present_keeps_relative_order() {
        let mut store = RecordStore::new(records(&[10, 20, 30, 40]));

        let after = store.remove(30);

        assert_eq!(ids(&after), vec![10, 20, 40]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.generation(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = RecordStore::new(records(&[1, 2, 3]));
        let before = store.current();

        let after = store.remove(99);

        assert!(Arc::ptr_eq(&before, &after));
        assert_eq!(store.generation(), 0);
    }

    #[test]
    fn test_remove_twice_second_is_noop() {
        let mut store = RecordStore::new(records(&[1, 2, 3]));

        store.remove(2);
        let after = store.remove(2);

        assert_eq!(ids(&after), vec![1, 3]);
        assert_eq!(store.generation(), 1);
    }

    #[test]
    fn test_remove_all_in_arbitrary_order() {
        let order = [4, 1, 5, 3, 2];
        let mut store = RecordStore::new(records(&[1, 2, 3, 4, 5]));

        for (removed, id) in order.iter().enumerate() {
            let after = store.remove(*id);
            assert_eq!(after.len(), order.len() - removed - 1);
        }

        assert!(store.is_empty());
        assert_eq!(store.generation(), 5);
    }

    #[test]
    fn test_old_snapshot_is_not_affected_by_removal() {
        let mut store = RecordStore::new(records(&[1, 2, 3]));
        let held = store.current();

        store.remove(1);

        assert_eq!(ids(&held), vec![1, 2, 3]);
        assert_eq!(ids(&store.current()), vec![2, 3]);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut input = records(&[1, 2]);
        input.push(Record::new(1, "other", "Duplicate", "dropped"));

        let store = RecordStore::new(input);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).map(Record::title), Some("User 1"));
    }
}
