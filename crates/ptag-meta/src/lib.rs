//! Tag and filter metadata for the ptag extension point.
//!
//! This crate provides:
//! - Label parsing from raw meta header strings: [`parse_tags`], [`parse_tag_list`]
//! - Normalization detected by value type: [`normalize`], [`is_normalized`],
//!   [`normalized_labels`], [`effective_labels`]
//! - Header registration and host-merged patches: [`HeaderField`], [`MetaPatch`]
//!
//! Meta values travel as JSON (`serde_json::Value`): the host's metadata
//! parser produces raw strings, normalization replaces them with label
//! arrays, and the template layer reads the arrays back. Malformed or
//! missing values degrade to empty label sequences, never an error.

mod labels;
mod meta;

pub use labels::{
    effective_labels, is_normalized, normalize, normalized_labels, parse_tag_list, parse_tags,
};
pub use meta::{
    DEFAULT_FILTER_LABEL, DEFAULT_TAGS_LABEL, FILTER_FIELD, HeaderField, MetaPatch, RawMeta,
    TAGS_FIELD,
};
