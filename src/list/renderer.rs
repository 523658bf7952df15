//! Keyed, virtualized list renderer.
//!
//! Each render pass runs in two steps:
//! 1. `sync` diffs the store's snapshot against the last rendered one and
//!    releases rows whose keys disappeared.
//! 2. `layout` computes the realized window for the viewport, releases rows
//!    that scrolled out of it and realizes the ones that scrolled in.
//!
//! Rows whose key survives both steps keep their view and image handle.

use crate::images::ImageLoader;
use crate::list::diff::{diff_keys, EditScript};
use crate::list::pool::{RealizedRow, RowPool};
use crate::list::row::{render_user_row, RenderRowFn};
use crate::list::window::{ScrollTracker, Viewport, VisibleWindow, DEFAULT_BUFFER_ROWS, DEFAULT_ROW_HEIGHT};
use crate::record::{Record, RecordId};
use crate::store::Snapshot;
use log::debug;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Geometry and buffering for a list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListConfig {
    pub row_height: f32,
    pub buffer_rows: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            buffer_rows: DEFAULT_BUFFER_ROWS,
        }
    }
}

/// Counters describing the work the renderer has done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Rows realized (pool acquisitions)
    pub rows_created: u64,
    /// Rows released, by scrolling or by removal
    pub rows_destroyed: u64,
    /// Calls to the row mapping function
    pub row_renders: u64,
    /// Sync passes that found a changed snapshot
    pub syncs: u64,
}

/// A realized row placed in the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRow {
    /// Position in the current snapshot
    pub index: usize,
    pub key: RecordId,
}

/// Output of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ListFrame {
    /// Realized rows in display order
    pub rows: Vec<FrameRow>,
    /// Spacer height above the first realized row
    pub top_padding: f32,
    /// Spacer height below the last realized row
    pub bottom_padding: f32,
    /// Height of the whole list
    pub content_height: f32,
    pub window: VisibleWindow,
}

impl ListFrame {
    /// Keys of the realized rows, in display order.
    pub fn keys(&self) -> Vec<RecordId> {
        self.rows.iter().map(|row| row.key).collect()
    }

    /// Keys of the rows intersecting the viewport, in display order.
    pub fn visible_keys(&self) -> Vec<RecordId> {
        self.rows
            .iter()
            .filter(|row| self.window.visible.contains(&row.index))
            .map(|row| row.key)
            .collect()
    }
}

/// Maintains realized rows for a sequence of store snapshots.
pub struct ListRenderer<L: ImageLoader> {
    config: ListConfig,
    render_row: RenderRowFn,
    loader: L,
    pool: RowPool<L::Handle>,
    /// Snapshot the current rows were built from
    rendered: Snapshot,
    keys: Vec<RecordId>,
    index_of: HashMap<RecordId, usize>,
    scroll: ScrollTracker,
    stats: RenderStats,
}

impl<L: ImageLoader> ListRenderer<L> {
    /// Creates a renderer with the default row mapping.
    pub fn new(loader: L, config: ListConfig) -> Self {
        Self::with_row_renderer(loader, config, render_user_row)
    }

    pub fn with_row_renderer(loader: L, config: ListConfig, render_row: RenderRowFn) -> Self {
        Self {
            config,
            render_row,
            loader,
            pool: RowPool::new(),
            rendered: Arc::from(Vec::new()),
            keys: Vec::new(),
            index_of: HashMap::new(),
            scroll: ScrollTracker::new(),
            stats: RenderStats::default(),
        }
    }

    /// Brings the renderer up to date with `snapshot`.
    ///
    /// The diff is always taken against the last rendered snapshot, so several
    /// store mutations between two passes collapse into one edit script.
    pub fn sync(&mut self, snapshot: &Snapshot) -> EditScript {
        if Arc::ptr_eq(&self.rendered, snapshot) {
            return EditScript::default();
        }

        let next_keys: Vec<RecordId> = snapshot.iter().map(Record::id).collect();
        let script = diff_keys(&self.keys, &next_keys);

        for removal in &script.removals {
            self.release_row(removal.key);
        }

        self.index_of = next_keys.iter().enumerate().map(|(index, &key)| (key, index)).collect();
        self.keys = next_keys;
        self.rendered = Arc::clone(snapshot);
        self.stats.syncs += 1;

        debug!(
            "event=list_synced module=renderer removals={} insertions={} rows={}",
            script.removals.len(),
            script.insertions.len(),
            self.keys.len()
        );

        script
    }

    /// Realizes the rows for `viewport` and returns their placement.
    pub fn layout(&mut self, viewport: Viewport) -> ListFrame {
        let total = self.keys.len();
        let row_height = self.config.row_height;
        let direction = self.scroll.update(viewport.offset);
        let window = VisibleWindow::compute(viewport, row_height, self.config.buffer_rows, total);

        let keep: HashSet<RecordId> = self.keys[window.realized.clone()].iter().copied().collect();
        for key in self.pool.keys_outside(&keep) {
            self.release_row(key);
        }

        for index in window.realization_order(direction) {
            let key = self.keys[index];
            if !self.pool.contains(key) {
                self.realize_row(index);
            }
        }

        let rows = window
            .realized
            .clone()
            .map(|index| FrameRow { index, key: self.keys[index] })
            .collect();

        ListFrame {
            rows,
            top_padding: window.top_padding(row_height),
            bottom_padding: window.bottom_padding(row_height, total),
            content_height: total as f32 * row_height,
            window,
        }
    }

    fn realize_row(&mut self, index: usize) {
        let record = &self.rendered[index];
        let view = (self.render_row)(record);
        let image = self.loader.load(&view.image_ref);

        self.stats.row_renders += 1;
        if self.pool.acquire(record.id(), RealizedRow { view, image }) {
            self.stats.rows_created += 1;
        }
    }

    fn release_row(&mut self, key: RecordId) {
        if let Some(row) = self.pool.release(key) {
            self.loader.cancel(row.image);
            self.stats.rows_destroyed += 1;
        }
    }

    /// Looks up a record of the last rendered snapshot.
    pub fn record(&self, key: RecordId) -> Option<&Record> {
        self.index_of.get(&key).map(|&index| &self.rendered[index])
    }

    /// Returns the realized row for `key`, if any.
    pub fn row(&self, key: RecordId) -> Option<&RealizedRow<L::Handle>> {
        self.pool.get(key)
    }

    pub fn realized_count(&self) -> usize {
        self.pool.len()
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    pub fn config(&self) -> ListConfig {
        self.config
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }
}
