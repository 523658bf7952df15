//! Viewport windowing for virtual scrolling.
//!
//! Rows have a fixed height, so the visible range is plain arithmetic on the
//! scroll offset. The realized range extends the visible range by a buffer of
//! rows on both sides; everything outside it is released.

use std::ops::Range;

/// Default row height in pixels (card plus the gap above it)
pub const DEFAULT_ROW_HEIGHT: f32 = 96.0;

/// Default number of rows realized above/below the viewport
pub const DEFAULT_BUFFER_ROWS: usize = 3;

/// Scrollable area geometry for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Distance scrolled from the top of the content, in pixels
    pub offset: f32,
    /// Height of the visible area, in pixels
    pub height: f32,
}

impl Viewport {
    pub fn new(offset: f32, height: f32) -> Self {
        Self { offset, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    /// Offset growing (content moving up)
    #[default]
    Forward,
    /// Offset shrinking
    Backward,
}

/// Remembers the last scroll offset to tell which way the user is scrolling.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    last_offset: Option<f32>,
    direction: ScrollDirection,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new offset and returns the current direction.
    ///
    /// An unchanged offset keeps the previous direction.
    pub fn update(&mut self, offset: f32) -> ScrollDirection {
        if let Some(last) = self.last_offset {
            if offset > last {
                self.direction = ScrollDirection::Forward;
            } else if offset < last {
                self.direction = ScrollDirection::Backward;
            }
        }
        self.last_offset = Some(offset);
        self.direction
    }
}

/// Row ranges for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleWindow {
    /// Rows intersecting the viewport
    pub visible: Range<usize>,
    /// Visible rows plus the buffer, clamped to the collection
    pub realized: Range<usize>,
}

impl VisibleWindow {
    /// Computes the visible and realized row ranges.
    ///
    /// # Arguments
    /// * `viewport` - Current scroll offset and height
    /// * `row_height` - Fixed height of every row
    /// * `buffer_rows` - Rows kept realized beyond each edge of the viewport
    /// * `total` - Number of rows in the collection
    pub fn compute(viewport: Viewport, row_height: f32, buffer_rows: usize, total: usize) -> Self {
        if total == 0 || row_height <= 0.0 {
            return Self { visible: 0..0, realized: 0..0 };
        }

        let offset = viewport.offset.max(0.0);
        let height = viewport.height.max(0.0);

        let first_visible = ((offset / row_height).floor() as usize).min(total);
        let last_visible = (((offset + height) / row_height).ceil() as usize).min(total);

        let first_realized = first_visible.saturating_sub(buffer_rows);
        let last_realized = last_visible.saturating_add(buffer_rows).min(total);

        Self {
            visible: first_visible..last_visible,
            realized: first_realized..last_realized,
        }
    }

    /// Row indices in the order they should be realized.
    ///
    /// Visible rows come first, then the buffer ahead of the scroll, then the
    /// buffer behind it.
    pub fn realization_order(&self, direction: ScrollDirection) -> Vec<usize> {
        let ahead_of_visible = self.visible.end..self.realized.end;
        let behind_visible = self.realized.start..self.visible.start;

        match direction {
            ScrollDirection::Forward => self
                .visible
                .clone()
                .chain(ahead_of_visible)
                .chain(behind_visible.rev())
                .collect(),
            ScrollDirection::Backward => self
                .visible
                .clone()
                .rev()
                .chain(behind_visible.rev())
                .chain(ahead_of_visible)
                .collect(),
        }
    }

    /// Height of the spacer standing in for rows above the realized range.
    pub fn top_padding(&self, row_height: f32) -> f32 {
        self.realized.start as f32 * row_height
    }

    /// Height of the spacer standing in for rows below the realized range.
    pub fn bottom_padding(&self, row_height: f32, total: usize) -> f32 {
        total.saturating_sub(self.realized.end) as f32 * row_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_at_top() {
        let window = VisibleWindow::compute(Viewport::new(0.0, 300.0), 100.0, 2, 50);

        assert_eq!(window.visible, 0..3);
        assert_eq!(window.realized, 0..5);
        assert_eq!(window.top_padding(100.0), 0.0);
        assert_eq!(window.bottom_padding(100.0, 50), 4500.0);
    }

    #[test]
    fn test_window_partial_rows_are_visible() {
        let window = VisibleWindow::compute(Viewport::new(150.0, 300.0), 100.0, 1, 50);

        assert_eq!(window.visible, 1..5);
        assert_eq!(window.realized, 0..6);
    }

    #[test]
    fn test_window_clamped_at_end() {
        let window = VisibleWindow::compute(Viewport::new(900.0, 400.0), 100.0, 3, 10);

        assert_eq!(window.visible, 9..10);
        assert_eq!(window.realized, 6..10);
        assert_eq!(window.bottom_padding(100.0, 10), 0.0);
    }

    #[test]
    fn test_window_overscrolled_past_end() {
        let window = VisibleWindow::compute(Viewport::new(5000.0, 400.0), 100.0, 3, 10);

        assert_eq!(window.visible, 10..10);
        assert_eq!(window.realized, 7..10);
    }

    #[test]
    fn test_huge_buffer_realizes_everything() {
        let window = VisibleWindow::compute(Viewport::new(300.0, 300.0), 100.0, usize::MAX, 50);

        assert_eq!(window.visible, 3..6);
        assert_eq!(window.realized, 0..50);
        assert_eq!(window.top_padding(100.0), 0.0);
        assert_eq!(window.bottom_padding(100.0, 50), 0.0);
    }

    #[test]
    fn test_empty_collection() {
        let window = VisibleWindow::compute(Viewport::new(0.0, 400.0), 100.0, 3, 0);
        assert!(window.realized.is_empty());
        assert!(window.realization_order(ScrollDirection::Forward).is_empty());
    }

    #[test]
    fn test_realization_order_follows_direction() {
        let window = VisibleWindow {
            visible: 3..5,
            realized: 1..7,
        };

        assert_eq!(window.realization_order(ScrollDirection::Forward), vec![3, 4, 5, 6, 2, 1]);
        assert_eq!(window.realization_order(ScrollDirection::Backward), vec![4, 3, 2, 1, 5, 6]);
    }

    #[test]
    fn test_scroll_tracker() {
        let mut tracker = ScrollTracker::new();

        assert_eq!(tracker.update(0.0), ScrollDirection::Forward);
        assert_eq!(tracker.update(120.0), ScrollDirection::Forward);
        assert_eq!(tracker.update(40.0), ScrollDirection::Backward);
        assert_eq!(tracker.update(40.0), ScrollDirection::Backward);
        assert_eq!(tracker.update(41.0), ScrollDirection::Forward);
    }
}
