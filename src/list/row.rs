//! Row content derived from a record.

use crate::record::{Record, RecordId};

/// Display content of one realized row.
///
/// Built once when the row is realized and kept for as long as the row lives,
/// so the mapping from record to view runs once per realization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub key: RecordId,
    pub title: String,
    pub subtitle: String,
    pub image_ref: String,
}

/// Signature of the pure record-to-row mapping.
pub type RenderRowFn = fn(&Record) -> RowView;

/// Default row mapping: name on the first line, status on the second.
pub fn render_user_row(record: &Record) -> RowView {
    RowView {
        key: record.id(),
        title: record.title().to_string(),
        subtitle: record.subtitle().to_string(),
        image_ref: record.image_ref().to_string(),
    }
}
