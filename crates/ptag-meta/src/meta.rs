//! Meta mapping model: header registration and host-merged patches.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parsed meta block of a single page, as produced by the host.
pub type RawMeta = serde_json::Map<String, Value>;

/// Meta mapping key for a page's tag list.
pub const TAGS_FIELD: &str = "tags";

/// Meta mapping key for a page's filter list.
pub const FILTER_FIELD: &str = "filter";

/// Default header label for the tags field.
pub const DEFAULT_TAGS_LABEL: &str = "Tags";

/// Default header label for the filter field.
pub const DEFAULT_FILTER_LABEL: &str = "Filter";

/// A meta header field an extension asks the host to extract.
///
/// `key` is the mapping key the parsed value lands under; `label` is the
/// header name the host's metadata parser matches in the page's leading
/// meta block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderField {
    /// Meta mapping key (e.g. `"tags"`).
    pub key: String,
    /// Header label in the meta block (e.g. `"Tags"`).
    pub label: String,
}

impl HeaderField {
    /// Create a header field registration.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Fields a hook wants written into a meta mapping.
///
/// Hooks return patches instead of mutating shared structures; the host
/// merges them with [`MetaPatch::apply_to`]. Entries are applied in
/// insertion order, later entries overwriting earlier ones for the same
/// field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetaPatch {
    entries: Vec<(String, Value)>,
}

impl MetaPatch {
    /// Create an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a field to add or overwrite.
    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.entries.push((field.into(), value));
    }

    /// Whether the patch carries no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the pending value for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.entries
            .iter()
            .rev()
            .find(|(key, _)| key == field)
            .map(|(_, value)| value)
    }

    /// Merge the patch into a meta mapping.
    pub fn apply_to(self, meta: &mut RawMeta) {
        for (field, value) in self.entries {
            meta.insert(field, value);
        }
    }
}
