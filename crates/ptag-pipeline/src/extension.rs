//! Extension contract for the host page pipeline.
//!
//! The host calls registered extensions at four fixed stages: header
//! registration at startup, meta normalization once per page, page
//! collection processing once per request, and template data collection
//! once per request before template expansion. Hooks receive immutable
//! views and return the fields they want added or overwritten; the host
//! merges (see [`Pipeline`](crate::Pipeline)).

use ptag_meta::{HeaderField, MetaPatch, RawMeta};
use serde_json::Value;

use crate::page::Page;

/// Template variable namespace entries contributed by extensions.
pub type TemplateVars = serde_json::Map<String, Value>;

/// Navigational context for the page being served.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavContext<'a> {
    /// Page being served.
    pub current: Option<&'a Page>,
    /// Previous page in the host's ordering.
    pub previous: Option<&'a Page>,
    /// Next page in the host's ordering.
    pub next: Option<&'a Page>,
}

/// Derived state for one request.
///
/// Overwritten on every request and never shared across requests; a
/// concurrent host gets isolation by owning one value per request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestState {
    /// Filtered page subset. Empty when no filter is active, or when an
    /// active filter matched nothing; either way the template layer falls
    /// back to the host's unfiltered collection.
    pub filtered_pages: Vec<Page>,
    /// Tag labels of the current page.
    pub page_tags: Vec<String>,
}

impl RequestState {
    /// Whether no stage produced derived state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered_pages.is_empty() && self.page_tags.is_empty()
    }
}

/// Result of the pages-loaded stage.
#[derive(Clone, Debug, Default)]
pub struct PagesOutcome {
    /// Meta patches keyed by page path, for the host to merge.
    pub meta_patches: Vec<(String, MetaPatch)>,
    /// Request-scoped derived state.
    pub state: RequestState,
}

/// A page-pipeline extension.
///
/// All methods have empty defaults so an extension implements only the
/// stages it participates in.
pub trait PageExtension: Send + Sync {
    /// Meta header fields this extension wants the host to extract.
    fn header_fields(&self) -> Vec<HeaderField> {
        Vec::new()
    }

    /// Normalize freshly parsed meta fields.
    ///
    /// Invoked once per page immediately after the host extracts raw meta
    /// fields. The returned patch is merged into the page's meta mapping.
    fn meta_parsed(&self, _meta: &RawMeta) -> MetaPatch {
        MetaPatch::new()
    }

    /// Inspect the loaded page collection.
    ///
    /// Invoked once per request after all pages are loaded and the
    /// current/previous/next pages are identified.
    fn pages_loaded(&self, _pages: &[Page], _nav: NavContext<'_>) -> PagesOutcome {
        PagesOutcome::default()
    }

    /// Template variables to expose for rendering.
    ///
    /// Invoked once per request before template expansion.
    fn render_data(&self, _state: &RequestState) -> TemplateVars {
        TemplateVars::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopExtension;

    impl PageExtension for NoopExtension {}

    #[test]
    fn test_default_hooks_are_empty() {
        let ext = NoopExtension;
        assert!(ext.header_fields().is_empty());
        assert!(ext.meta_parsed(&RawMeta::new()).is_empty());

        let outcome = ext.pages_loaded(&[], NavContext::default());
        assert!(outcome.meta_patches.is_empty());
        assert!(outcome.state.is_empty());

        assert!(ext.render_data(&RequestState::default()).is_empty());
    }

    #[test]
    fn test_request_state_is_empty() {
        let mut state = RequestState::default();
        assert!(state.is_empty());

        state.page_tags.push("x".to_owned());
        assert!(!state.is_empty());
    }
}
