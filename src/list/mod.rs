//! Keyed list rendering core.
//!
//! - Diff (edit script between key sequences)
//! - Window (viewport arithmetic, scroll direction)
//! - Pool (realized rows keyed by record id)
//! - Row (record-to-view mapping)
//! - Events (row taps and their callbacks)
//! - Renderer (ties the above together per render pass)

pub mod diff;
pub mod events;
pub mod pool;
pub mod renderer;
pub mod row;
pub mod window;

pub use diff::{diff_keys, EditScript, RowInsertion, RowRemoval};
pub use events::{resolve_tap, ListCallbacks, RowEvent};
pub use pool::{RealizedRow, RowPool};
pub use renderer::{FrameRow, ListConfig, ListFrame, ListRenderer, RenderStats};
pub use row::{render_user_row, RenderRowFn, RowView};
pub use window::{ScrollDirection, ScrollTracker, Viewport, VisibleWindow};
