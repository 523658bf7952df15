pub mod record;
pub mod store;
pub mod source;
pub mod list;
pub mod images;
pub mod messages;
pub mod strings;
pub mod text;
pub mod screen;
pub mod config;
pub mod logging;

// Export data model
pub use record::{Record, RecordId};
pub use store::{RecordStore, Snapshot};
pub use source::{FakeUserSource, RecordSource};

// Export list core
pub use list::{
    diff_keys, resolve_tap, EditScript, FrameRow, ListCallbacks, ListConfig, ListFrame,
    ListRenderer, RealizedRow, RenderStats, RowEvent, RowView, ScrollDirection, Viewport,
    VisibleWindow,
};

// Export collaborator interfaces
pub use images::{ImageLoader, NoImages};
pub use messages::{MessageSink, Toast, ToastQueue};
pub use strings::{StringLookup, StringTable};

pub use screen::UserListScreen;
pub use config::AppConfig;
