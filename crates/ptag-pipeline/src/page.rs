//! Host-owned page records.

use ptag_meta::{FILTER_FIELD, RawMeta, TAGS_FIELD, effective_labels, normalized_labels};
use serde::{Deserialize, Serialize};

/// A page record flowing through the host pipeline.
///
/// Identity and lifecycle are owned by the host; the extension only reads
/// and patches the `tags` and `filter` entries of `meta`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// URL path identifying the page.
    pub path: String,
    /// Page title.
    pub title: String,
    /// Parsed meta block.
    #[serde(default)]
    pub meta: RawMeta,
}

impl Page {
    /// Create a page with an empty meta block.
    #[must_use]
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            meta: RawMeta::new(),
        }
    }

    /// Normalized tag labels of the page.
    ///
    /// Reads the `tags` meta entry as a label array; a raw or absent entry
    /// yields no labels. Pages that passed through the normalization stage
    /// always carry an array here.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        self.meta.get(TAGS_FIELD).map(normalized_labels).unwrap_or_default()
    }

    /// Filter labels declared by the page.
    ///
    /// Tolerant of un-normalized values: arrays are read back, raw strings
    /// are parsed, anything else yields no labels.
    #[must_use]
    pub fn filter(&self) -> Vec<String> {
        self.meta.get(FILTER_FIELD).map(effective_labels).unwrap_or_default()
    }
}
