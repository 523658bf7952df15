//! The user list screen: store, renderer and collaborators wired together.

use crate::images::ImageLoader;
use crate::list::{ListCallbacks, ListConfig, ListFrame, ListRenderer, RowEvent, Viewport};
use crate::messages::MessageSink;
use crate::record::Record;
use crate::store::RecordStore;
use crate::strings::{StringLookup, CLICKED_ON};
use log::debug;

/// Composition root for one list screen.
///
/// All methods run on the UI thread. Store mutations made by `handle_event`
/// become visible to the renderer at the next `render_pass`.
pub struct UserListScreen<L: ImageLoader, S: MessageSink> {
    store: RecordStore,
    renderer: ListRenderer<L>,
    sink: S,
    strings: Box<dyn StringLookup>,
}

impl<L: ImageLoader, S: MessageSink> UserListScreen<L, S> {
    pub fn new(
        records: Vec<Record>,
        loader: L,
        sink: S,
        strings: Box<dyn StringLookup>,
        config: ListConfig,
    ) -> Self {
        Self {
            store: RecordStore::new(records),
            renderer: ListRenderer::new(loader, config),
            sink,
            strings,
        }
    }

    /// Syncs the renderer with the store and lays out `viewport`.
    pub fn render_pass(&mut self, viewport: Viewport) -> ListFrame {
        let snapshot = self.store.current();
        self.renderer.sync(&snapshot);
        self.renderer.layout(viewport)
    }

    /// Applies a row interaction.
    ///
    /// Events for rows that are no longer rendered are ignored.
    pub fn handle_event(&mut self, event: RowEvent) {
        let Some(record) = self.renderer.record(event.key()).cloned() else {
            debug!("event=stale_row_event module=screen id={}", event.key());
            return;
        };

        let mut actions = ScreenActions {
            store: &mut self.store,
            sink: &mut self.sink,
            strings: self.strings.as_ref(),
        };
        event.dispatch(&record, &mut actions);
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn renderer(&self) -> &ListRenderer<L> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut ListRenderer<L> {
        &mut self.renderer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn strings(&self) -> &dyn StringLookup {
        self.strings.as_ref()
    }
}

/// Callbacks bound to the screen's collaborators for one event.
struct ScreenActions<'a, S: MessageSink> {
    store: &'a mut RecordStore,
    sink: &'a mut S,
    strings: &'a dyn StringLookup,
}

impl<S: MessageSink> ListCallbacks for ScreenActions<'_, S> {
    fn on_row_activated(&mut self, record: &Record) {
        let text = self.strings.resolve(CLICKED_ON, &[record.title()]);
        self.sink.notify(text);
    }

    fn on_row_delete_requested(&mut self, record: &Record) {
        self.store.remove(record.id());
    }
}
