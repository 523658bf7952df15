//! Row interactions.

use crate::record::{Record, RecordId};

/// A discrete tap on a realized row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEvent {
    /// Tap on the row body (outside the delete control)
    Activated(RecordId),
    /// Tap on the row's delete control
    DeleteRequested(RecordId),
}

impl RowEvent {
    /// Returns the key of the row the event came from.
    pub fn key(&self) -> RecordId {
        match self {
            RowEvent::Activated(key) | RowEvent::DeleteRequested(key) => *key,
        }
    }

    /// Invokes the matching callback exactly once.
    pub fn dispatch<C: ListCallbacks + ?Sized>(self, record: &Record, callbacks: &mut C) {
        match self {
            RowEvent::Activated(_) => callbacks.on_row_activated(record),
            RowEvent::DeleteRequested(_) => callbacks.on_row_delete_requested(record),
        }
    }
}

/// Receiver for row interactions.
pub trait ListCallbacks {
    fn on_row_activated(&mut self, record: &Record);
    fn on_row_delete_requested(&mut self, record: &Record);
}

/// Turns the click state of one row into at most one event.
///
/// The delete control sits on top of the row body, so a click on it can be
/// reported by both; the delete control wins.
pub fn resolve_tap(key: RecordId, body_clicked: bool, delete_clicked: bool) -> Option<RowEvent> {
    if delete_clicked {
        Some(RowEvent::DeleteRequested(key))
    } else if body_clicked {
        Some(RowEvent::Activated(key))
    } else {
        None
    }
}
