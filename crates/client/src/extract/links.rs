//! Link harvesting from HTML documents.

use scraper::{Html, Selector};

/// Collect the `href` of every anchor whose value starts with `http`.
///
/// Document order is preserved and duplicates are kept. Relative links are
/// skipped rather than resolved.
pub fn extract_links(document: &Html) -> Vec<String> {
    let selector = Selector::parse("a[href]").expect("invalid selector");

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::trim)
        .filter(|href| href.starts_with("http"))
        .map(str::to_string)
        .collect()
}
