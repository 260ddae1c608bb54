//! The tags extension: `Tags` and `Filter` meta headers.
//!
//! Pages declare tags in their meta block with a comma-separated `Tags`
//! header. A page may also declare a `Filter` header; when that page is
//! served, the page collection is restricted to pages sharing at least one
//! of its filter labels. This enables index pages that feature only posts
//! of a certain type, while pages without a filter keep the unfiltered
//! collection.

use ptag_config::ExtensionConfig;
use ptag_meta::{
    DEFAULT_FILTER_LABEL, DEFAULT_TAGS_LABEL, FILTER_FIELD, HeaderField, MetaPatch, RawMeta,
    TAGS_FIELD, effective_labels, is_normalized, normalize,
};
use serde_json::Value;

use crate::extension::{NavContext, PageExtension, PagesOutcome, RequestState, TemplateVars};
use crate::filter::filter_pages;
use crate::page::Page;

/// Template variable holding the filtered page subset.
pub const FILTERED_PAGES_VAR: &str = "filtered_pages";

/// Template variable holding the current page's tag list.
pub const PAGE_TAGS_VAR: &str = "page_tags";

/// Extension implementing tag collection and page filtering.
#[derive(Clone, Debug)]
pub struct TagsExtension {
    tags_label: String,
    filter_label: String,
}

impl TagsExtension {
    /// Create an extension with the default header labels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tags_label: DEFAULT_TAGS_LABEL.to_owned(),
            filter_label: DEFAULT_FILTER_LABEL.to_owned(),
        }
    }

    /// Create an extension with header labels from configuration.
    #[must_use]
    pub fn from_config(config: &ExtensionConfig) -> Self {
        Self {
            tags_label: config.tags_label.clone(),
            filter_label: config.filter_label.clone(),
        }
    }
}

impl Default for TagsExtension {
    fn default() -> Self {
        Self::new()
    }
}

impl PageExtension for TagsExtension {
    fn header_fields(&self) -> Vec<HeaderField> {
        vec![
            HeaderField::new(TAGS_FIELD, self.tags_label.clone()),
            HeaderField::new(FILTER_FIELD, self.filter_label.clone()),
        ]
    }

    fn meta_parsed(&self, meta: &RawMeta) -> MetaPatch {
        let mut patch = MetaPatch::new();
        for field in [TAGS_FIELD, FILTER_FIELD] {
            let value = meta.get(field).unwrap_or(&Value::Null);
            if let Some(labels) = normalize(value) {
                patch.set(field, labels);
            }
        }
        patch
    }

    fn pages_loaded(&self, pages: &[Page], nav: NavContext<'_>) -> PagesOutcome {
        let mut outcome = PagesOutcome::default();

        // Normalize every page's tags before any filtering decision; any
        // page could be served as the current page later and must present
        // normalized tags to the template layer.
        let mut normalized = Vec::with_capacity(pages.len());
        for page in pages {
            let mut entry = page.clone();
            let value = page.meta.get(TAGS_FIELD).unwrap_or(&Value::Null);
            if !value.is_null() && !value.is_string() && !is_normalized(value) {
                tracing::warn!(
                    page = %page.path,
                    "tags meta entry has unexpected type, treating as empty"
                );
            }
            if let Some(labels) = normalize(value) {
                let mut patch = MetaPatch::new();
                patch.set(TAGS_FIELD, labels.clone());
                outcome.meta_patches.push((page.path.clone(), patch));
                entry.meta.insert(TAGS_FIELD.to_owned(), labels);
            }
            normalized.push(entry);
        }

        if let Some(current) = nav.current {
            outcome.state.page_tags = current
                .meta
                .get(TAGS_FIELD)
                .map(effective_labels)
                .unwrap_or_default();

            let filter = current.filter();
            if !filter.is_empty() {
                outcome.state.filtered_pages = filter_pages(&normalized, &filter);
                tracing::debug!(
                    page = %current.path,
                    labels = ?filter,
                    matched = outcome.state.filtered_pages.len(),
                    total = pages.len(),
                    "Filtered page collection"
                );
            }
        }

        outcome
    }

    fn render_data(&self, state: &RequestState) -> TemplateVars {
        let mut vars = TemplateVars::new();
        if !state.filtered_pages.is_empty()
            && let Ok(pages) = serde_json::to_value(&state.filtered_pages)
        {
            vars.insert(FILTERED_PAGES_VAR.to_owned(), pages);
        }
        if !state.page_tags.is_empty()
            && let Ok(tags) = serde_json::to_value(&state.page_tags)
        {
            vars.insert(PAGE_TAGS_VAR.to_owned(), tags);
        }
        vars
    }
}
