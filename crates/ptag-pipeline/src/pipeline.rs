//! Host-side pipeline driver.
//!
//! Owns the registered extensions and drives a request through the fixed
//! stages, performing the merging the hook contract leaves to the host:
//! meta patches are applied to host-owned mappings, and request states
//! from multiple extensions are combined with later non-default fields
//! winning.

use ptag_config::Config;
use ptag_meta::{HeaderField, RawMeta};

use crate::extension::{NavContext, PageExtension, RequestState, TemplateVars};
use crate::page::Page;
use crate::tags::TagsExtension;

/// Positions of the current, previous and next pages in the collection.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavPositions {
    /// Index of the page being served.
    pub current: Option<usize>,
    /// Index of the previous page.
    pub previous: Option<usize>,
    /// Index of the next page.
    pub next: Option<usize>,
}

/// Fully processed request, ready for the template layer.
#[derive(Clone, Debug, Default)]
pub struct ProcessedRequest {
    /// Page collection with normalized meta.
    pub pages: Vec<Page>,
    /// Request-scoped derived state.
    pub state: RequestState,
    /// Template variables contributed by extensions.
    pub template_vars: TemplateVars,
}

/// Driver calling registered extensions at fixed pipeline stages.
#[derive(Default)]
pub struct Pipeline {
    extensions: Vec<Box<dyn PageExtension>>,
}

impl Pipeline {
    /// Create an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline from configuration.
    ///
    /// Registers the tags extension unless it is disabled.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut pipeline = Self::new();
        if config.extension.enabled {
            pipeline.register(Box::new(TagsExtension::from_config(&config.extension)));
        }
        pipeline
    }

    /// Register an extension. Hooks run in registration order.
    pub fn register(&mut self, extension: Box<dyn PageExtension>) {
        self.extensions.push(extension);
    }

    /// Meta header fields requested by all extensions.
    #[must_use]
    pub fn header_fields(&self) -> Vec<HeaderField> {
        self.extensions
            .iter()
            .flat_map(|extension| extension.header_fields())
            .collect()
    }

    /// Run the meta normalization stage for one page.
    #[must_use]
    pub fn parse_meta(&self, mut meta: RawMeta) -> RawMeta {
        for extension in &self.extensions {
            extension.meta_parsed(&meta).apply_to(&mut meta);
        }
        meta
    }

    /// Run the page-collection stage for one request.
    ///
    /// Applies every returned meta patch to the owned collection and
    /// merges request states.
    #[must_use]
    pub fn process_pages(
        &self,
        mut pages: Vec<Page>,
        nav: NavPositions,
    ) -> (Vec<Page>, RequestState) {
        let mut state = RequestState::default();
        let mut patches = Vec::new();

        let context = NavContext {
            current: nav.current.and_then(|i| pages.get(i)),
            previous: nav.previous.and_then(|i| pages.get(i)),
            next: nav.next.and_then(|i| pages.get(i)),
        };
        for extension in &self.extensions {
            let outcome = extension.pages_loaded(&pages, context);
            patches.extend(outcome.meta_patches);
            if !outcome.state.filtered_pages.is_empty() {
                state.filtered_pages = outcome.state.filtered_pages;
            }
            if !outcome.state.page_tags.is_empty() {
                state.page_tags = outcome.state.page_tags;
            }
        }

        for (path, patch) in patches {
            if let Some(page) = pages.iter_mut().find(|page| page.path == path) {
                patch.apply_to(&mut page.meta);
            }
        }

        (pages, state)
    }

    /// Collect template variables for one request.
    #[must_use]
    pub fn render_vars(&self, state: &RequestState) -> TemplateVars {
        let mut vars = TemplateVars::new();
        for extension in &self.extensions {
            vars.extend(extension.render_data(state));
        }
        vars
    }

    /// Run a full request: page-collection stage, then template data.
    #[must_use]
    pub fn run_request(&self, pages: Vec<Page>, nav: NavPositions) -> ProcessedRequest {
        let (pages, state) = self.process_pages(pages, nav);
        let template_vars = self.render_vars(&state);
        ProcessedRequest {
            pages,
            state,
            template_vars,
        }
    }
}
