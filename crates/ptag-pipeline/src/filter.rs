//! Page filtering by label intersection.

use crate::page::Page;

/// Filter a page collection by label intersection.
///
/// An empty `filter_labels` applies no filtering: the full collection is
/// returned unchanged. Otherwise the result contains exactly the pages
/// whose tag sequence shares at least one label with `filter_labels`,
/// compared by exact string equality, case-sensitive. Result order is the
/// collection order; no re-sorting.
///
/// Pages are expected to carry normalized tags; an un-normalized `tags`
/// entry reads as empty and never matches.
#[must_use]
pub fn filter_pages(pages: &[Page], filter_labels: &[String]) -> Vec<Page> {
    if filter_labels.is_empty() {
        return pages.to_vec();
    }
    pages
        .iter()
        .filter(|page| page.tags().iter().any(|tag| filter_labels.contains(tag)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn make_page(path: &str, tags: &[&str]) -> Page {
        let mut page = Page::new(path, path);
        page.meta.insert("tags".to_owned(), json!(tags));
        page
    }

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    fn paths(pages: &[Page]) -> Vec<&str> {
        pages.iter().map(|page| page.path.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_returns_collection_unchanged() {
        let pages = vec![make_page("a", &["x"]), make_page("b", &["y"])];
        let result = filter_pages(&pages, &[]);
        assert_eq!(result, pages);
    }

    #[test]
    fn test_single_label_intersection() {
        let pages = vec![
            make_page("p1", &["x", "y"]),
            make_page("p2", &["y", "z"]),
            make_page("p3", &[]),
        ];
        assert_eq!(paths(&filter_pages(&pages, &labels(&["x"]))), vec!["p1"]);
        assert_eq!(
            paths(&filter_pages(&pages, &labels(&["y"]))),
            vec!["p1", "p2"]
        );
    }

    #[test]
    fn test_multiple_labels_match_any() {
        let pages = vec![
            make_page("p1", &["x"]),
            make_page("p2", &["y"]),
            make_page("p3", &["z"]),
        ];
        assert_eq!(
            paths(&filter_pages(&pages, &labels(&["x", "z"]))),
            vec!["p1", "p3"]
        );
    }

    #[test]
    fn test_no_match_yields_empty() {
        let pages = vec![make_page("p1", &["x"])];
        assert_eq!(filter_pages(&pages, &labels(&["missing"])), Vec::new());
    }

    #[test]
    fn test_order_preserved() {
        let pages = vec![
            make_page("z-last", &["t"]),
            make_page("a-first", &["t"]),
            make_page("m-mid", &["t"]),
        ];
        assert_eq!(
            paths(&filter_pages(&pages, &labels(&["t"]))),
            vec!["z-last", "a-first", "m-mid"]
        );
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let pages = vec![make_page("p1", &["Work"])];
        assert_eq!(filter_pages(&pages, &labels(&["work"])), Vec::new());
        assert_eq!(paths(&filter_pages(&pages, &labels(&["Work"]))), vec!["p1"]);
    }

    #[test]
    fn test_empty_string_labels_participate() {
        // "a,,b" normalizes with an empty token; a filter carrying an empty
        // label matches it, mirroring the literal split behavior.
        let pages = vec![make_page("p1", &["a", "", "b"]), make_page("p2", &["c"])];
        assert_eq!(paths(&filter_pages(&pages, &labels(&[""]))), vec!["p1"]);
    }

    #[test]
    fn test_unnormalized_tags_never_match() {
        let mut page = Page::new("raw", "Raw");
        page.meta.insert("tags".to_owned(), json!("x, y"));
        let pages = vec![page];
        assert_eq!(filter_pages(&pages, &labels(&["x"])), Vec::new());
    }
}
