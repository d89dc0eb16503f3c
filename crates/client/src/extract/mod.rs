//! Outline extraction from HTML.
//!
//! Produces the line-oriented result stored for HTML responses:
//!
//! - `h1`/`h2`/`h3` become `---- `, `--- `, `-- ` prefixed lines
//! - `p` becomes a `- ` prefixed line
//! - then a `-- Links --` line and every absolute `http*` href
//!
//! The `Extractor` trait keeps the fetch pipeline independent of the
//! extraction engine.

pub mod links;

pub use links::extract_links;

use rawfetch_core::extracted::LINKS_SEPARATOR;
use scraper::{ElementRef, Html, Selector};

/// Stable extractor trait for HTML bodies.
pub trait Extractor: Send + Sync {
    /// Turn an HTML document into ordered output lines.
    fn extract(&self, html: &str) -> Vec<String>;
}

/// Headings, paragraphs and absolute links, in document order.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineExtractor;

impl OutlineExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for OutlineExtractor {
    fn extract(&self, html: &str) -> Vec<String> {
        extract_outline(html)
    }
}

/// Extract the outline of an HTML document.
pub fn extract_outline(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("h1, h2, h3, p").expect("invalid selector");

    let mut lines: Vec<String> = document
        .select(&selector)
        .map(|element| {
            let marker = match element.value().name() {
                "h1" => "----",
                "h2" => "---",
                "h3" => "--",
                _ => "-",
            };
            format!("{marker} {}", element_text(element))
        })
        .collect();

    lines.push(LINKS_SEPARATOR.to_string());
    lines.extend(extract_links(&document));
    lines
}

/// Text content with runs of whitespace collapsed to single spaces.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().flat_map(str::split_whitespace).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_document() {
        let lines = extract_outline(r#"<h1>T</h1><p>Body</p><a href="http://x.com">x</a>"#);
        assert_eq!(lines, vec!["---- T", "- Body", "-- Links --", "http://x.com"]);
    }

    #[test]
    fn test_heading_depth_markers() {
        let lines = extract_outline("<h3>c</h3><h2>b</h2><h1>a</h1><h4>ignored</h4>");
        assert_eq!(lines, vec!["-- c", "--- b", "---- a", "-- Links --"]);
    }

    #[test]
    fn test_document_order_is_kept() {
        let html = r#"
            <!DOCTYPE html>
            <html>
            <head><title>Ignored Title</title></head>
            <body>
                <p>Intro</p>
                <article>
                    <h2>Section</h2>
                    <p>First <b>bold</b> paragraph</p>
                    <a href="https://a.example">a</a>
                    <p>Second
                       paragraph</p>
                    <a href="/relative">r</a>
                    <a href="https://a.example">again</a>
                </article>
            </body>
            </html>
        "#;

        let lines = extract_outline(html);
        assert_eq!(
            lines,
            vec![
                "- Intro",
                "--- Section",
                "- First bold paragraph",
                "- Second paragraph",
                "-- Links --",
                "https://a.example",
                "https://a.example",
            ]
        );
    }

    #[test]
    fn test_one_line_per_element_even_if_empty() {
        let lines = extract_outline("<p></p><p>x</p>");
        assert_eq!(lines, vec!["- ", "- x", "-- Links --"]);
    }

    #[test]
    fn test_empty_html() {
        assert_eq!(extract_outline(""), vec!["-- Links --"]);
    }

    #[test]
    fn test_trait_object() {
        let extractor: Box<dyn Extractor> = Box::new(OutlineExtractor::new());
        assert_eq!(extractor.extract("<h1>T</h1>"), vec!["---- T", "-- Links --"]);
    }
}
