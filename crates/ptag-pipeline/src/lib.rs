//! Page pipeline extension point for ptag.
//!
//! This crate provides:
//! - [`Page`]: host-owned page records carrying tag metadata
//! - [`filter_pages`]: label-intersection page filtering
//! - [`PageExtension`]: the hook contract extensions implement
//! - [`TagsExtension`]: tag collection and page filtering over the `Tags`
//!   and `Filter` meta headers
//! - [`Pipeline`]: host-side driver that calls hooks at fixed stages and
//!   merges their outputs
//!
//! # Quick Start
//!
//! ```
//! use ptag_pipeline::{NavPositions, Page, Pipeline, TagsExtension};
//! use serde_json::json;
//!
//! let mut pipeline = Pipeline::new();
//! pipeline.register(Box::new(TagsExtension::new()));
//!
//! let mut index = Page::new("blog", "Blog");
//! index.meta.insert("filter".to_owned(), json!("post"));
//! let mut article = Page::new("blog/hello", "Hello");
//! article.meta.insert("tags".to_owned(), json!("post, intro"));
//!
//! let processed = pipeline.run_request(
//!     vec![index, article],
//!     NavPositions {
//!         current: Some(0),
//!         ..Default::default()
//!     },
//! );
//! assert_eq!(processed.state.filtered_pages.len(), 1);
//! assert_eq!(processed.state.filtered_pages[0].path, "blog/hello");
//! ```

mod extension;
mod filter;
mod page;
mod pipeline;
mod tags;

pub use extension::{NavContext, PageExtension, PagesOutcome, RequestState, TemplateVars};
pub use filter::filter_pages;
pub use page::Page;
pub use pipeline::{NavPositions, Pipeline, ProcessedRequest};
pub use tags::{FILTERED_PAGES_VAR, PAGE_TAGS_VAR, TagsExtension};

// Re-export the meta surface for host convenience
pub use ptag_meta::{HeaderField, MetaPatch, RawMeta};
