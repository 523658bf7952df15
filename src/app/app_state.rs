//! Centralized application state for the user cards viewer.

use crate::io::AsyncImageLoader;
use usercards::{AppConfig, FakeUserSource, RecordSource, StringTable, ToastQueue, UserListScreen};

/// The list screen as wired in the GUI.
pub type Screen = UserListScreen<AsyncImageLoader, ToastQueue>;

/// Main application state.
///
/// The screen owns the record store, the list renderer and the toast queue;
/// the only GUI-specific state kept here is the scroll position from the
/// previous frame.
pub struct AppState {
    /// Record store, renderer and collaborators
    pub screen: Screen,

    /// Vertical scroll offset reported by the scroll area last frame
    pub scroll_offset: f32,
}

impl AppState {
    /// Generates the initial records and builds the screen around `loader`.
    pub fn new(config: &AppConfig, loader: AsyncImageLoader) -> Self {
        let records = FakeUserSource::with_seed(config.seed).generate(config.record_count);
        let screen = UserListScreen::new(
            records,
            loader,
            ToastQueue::new(config.toast_duration()),
            Box::new(StringTable::english()),
            config.list_config(),
        );

        Self {
            screen,
            scroll_offset: 0.0,
        }
    }
}
