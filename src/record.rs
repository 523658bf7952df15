use serde::{Deserialize, Serialize};

/// Type alias for record IDs (stable identity keys for list rows)
pub type RecordId = u64;

/// One user entry in the list.
///
/// Records are immutable once created. The `id` is the only identity used for
/// row keying; two records with equal text but different ids are different rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    image_ref: String,
    title: String,
    subtitle: String,
}

impl Record {
    pub fn new(
        id: RecordId,
        image_ref: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            id,
            image_ref: image_ref.into(),
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }

    /// Returns the record ID
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the opaque image reference (a URL for the shipped data source)
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    /// Returns the primary display line
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the secondary display line
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }
}
