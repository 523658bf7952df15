//! Key-indexed pool of realized rows.

use crate::list::row::RowView;
use crate::record::RecordId;
use std::collections::{HashMap, HashSet};

/// A row that currently has resources attached.
#[derive(Debug)]
pub struct RealizedRow<H> {
    /// Content computed when the row was realized
    pub view: RowView,
    /// Image handle obtained from the loader
    pub image: H,
}

/// Realized rows keyed by record id.
///
/// The pool has no size cap; the renderer keeps it bounded by releasing rows
/// that fall outside the realized window.
#[derive(Debug)]
pub struct RowPool<H> {
    rows: HashMap<RecordId, RealizedRow<H>>,
}

impl<H> RowPool<H> {
    pub fn new() -> Self {
        Self { rows: HashMap::new() }
    }

    /// Attaches a row to `key`. Returns false (and leaves the existing row in
    /// place) if the key is already realized.
    pub fn acquire(&mut self, key: RecordId, row: RealizedRow<H>) -> bool {
        if self.rows.contains_key(&key) {
            return false;
        }
        self.rows.insert(key, row);
        true
    }

    /// Detaches the row for `key`, handing its resources back to the caller.
    pub fn release(&mut self, key: RecordId) -> Option<RealizedRow<H>> {
        self.rows.remove(&key)
    }

    pub fn contains(&self, key: RecordId) -> bool {
        self.rows.contains_key(&key)
    }

    pub fn get(&self, key: RecordId) -> Option<&RealizedRow<H>> {
        self.rows.get(&key)
    }

    /// Keys currently realized but not in `keep`.
    pub fn keys_outside(&self, keep: &HashSet<RecordId>) -> Vec<RecordId> {
        self.rows.keys().filter(|key| !keep.contains(key)).copied().collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<H> Default for RowPool<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(key: RecordId) -> RealizedRow<u32> {
        RealizedRow {
            view: RowView {
                key,
                title: format!("User {key}"),
                subtitle: String::new(),
                image_ref: String::new(),
            },
            image: key as u32,
        }
    }

    #[test]
    fn test_acquire_twice_keeps_first() {
        let mut pool = RowPool::new();

        assert!(pool.acquire(1, row(1)));
        let mut replacement = row(1);
        replacement.image = 99;
        assert!(!pool.acquire(1, replacement));

        assert_eq!(pool.get(1).map(|r| r.image), Some(1));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_release_returns_resources() {
        let mut pool = RowPool::new();
        pool.acquire(5, row(5));

        let released = pool.release(5);

        assert_eq!(released.map(|r| r.image), Some(5));
        assert!(pool.is_empty());
        assert!(pool.release(5).is_none());
    }

    #[test]
    fn test_keys_outside() {
        let mut pool = RowPool::new();
        for key in 1..=4 {
            pool.acquire(key, row(key));
        }

        let keep: HashSet<RecordId> = [2, 3].into_iter().collect();
        let mut outside = pool.keys_outside(&keep);
        outside.sort_unstable();

        assert_eq!(outside, vec![1, 4]);
    }
}
