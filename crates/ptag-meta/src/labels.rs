//! Label parsing and normalization.
//!
//! A label is a trimmed, case-sensitive tag token. A `tags` or `filter`
//! meta value holds either a raw comma-separated string (as extracted from
//! the page's meta block) or an already-normalized JSON array of labels.
//! Normalization is idempotent: arrays pass through untouched, detected by
//! value type rather than re-split.

use serde_json::Value;

/// Split a raw comma-separated header string into trimmed labels.
///
/// Order is preserved. Empty tokens from consecutive or trailing delimiters
/// are kept as empty-string labels; there is no compaction step.
#[must_use]
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|token| token.trim().to_owned()).collect()
}

/// Parse a meta value into labels.
///
/// Non-string values (absent, arrays, numbers, booleans, objects) and
/// zero-length strings produce no labels. Malformed input never errors.
#[must_use]
pub fn parse_tags(value: &Value) -> Vec<String> {
    match value.as_str() {
        Some(raw) if !raw.is_empty() => parse_tag_list(raw),
        _ => Vec::new(),
    }
}

/// Whether a meta value is already a normalized label sequence.
#[must_use]
pub fn is_normalized(value: &Value) -> bool {
    value.is_array()
}

/// Read labels out of a normalized meta value.
///
/// Non-array values yield no labels. Non-string elements are skipped.
#[must_use]
pub fn normalized_labels(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(ToOwned::to_owned)
            .collect(),
        _ => Vec::new(),
    }
}

/// Read labels from a meta value in either form.
///
/// Normalized arrays are read back verbatim; raw strings are parsed;
/// anything else yields no labels. Used where a value may not have passed
/// through normalization yet.
#[must_use]
pub fn effective_labels(value: &Value) -> Vec<String> {
    if is_normalized(value) {
        normalized_labels(value)
    } else {
        parse_tags(value)
    }
}

/// Normalize a meta value into a label array.
///
/// Returns `None` when the value is already an array, so repeated
/// normalization cannot corrupt parsed labels. Anything else, including
/// absent or mistyped values, becomes an array via [`parse_tags`].
#[must_use]
pub fn normalize(value: &Value) -> Option<Value> {
    if is_normalized(value) {
        return None;
    }
    Some(Value::Array(
        parse_tags(value).into_iter().map(Value::String).collect(),
    ))
}
