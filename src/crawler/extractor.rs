//! HTML extraction for harvested pages
//!
//! This module turns a fetched HTML body into:
//! - Outbound links to follow (absolute `http://` / `https://` anchors only)
//! - A sanitized title usable as a file name
//! - The visible text of the page

use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

/// Elements whose text is never rendered
const NON_VISIBLE_ELEMENTS: &[&str] = &["head", "script", "style", "noscript", "template"];

/// Extracted information from an HTML page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Title reduced to alphanumerics and spaces, trailing whitespace trimmed
    pub sanitized_title: String,

    /// Visible text of the document
    pub plain_text: String,

    /// Absolute HTTP(S) links, unique, in first-seen order
    pub outbound_links: Vec<String>,
}

impl ExtractedPage {
    /// Returns true if the page carries no visible text
    pub fn is_empty(&self) -> bool {
        self.plain_text.trim().is_empty()
    }
}

/// Parses HTML content and extracts links, title, and text
///
/// # Link Extraction Rules
///
/// Only the `href` of `<a>` elements is considered, and only when it begins
/// with `http://` or `https://`. Relative links are not resolved. Anchors
/// without an `href` are dropped.
///
/// # Example
///
/// ```
/// use corpus_harvest::crawler::extract;
///
/// let html = r#"<html><head><title>Home!</title></head>
///     <body>Hello World<a href="https://example.com/a">A</a></body></html>"#;
/// let page = extract(html);
/// assert_eq!(page.sanitized_title, "Home");
/// assert_eq!(page.outbound_links, vec!["https://example.com/a".to_string()]);
/// ```
pub fn extract(html: &str) -> ExtractedPage {
    let document = Html::parse_document(html);

    ExtractedPage {
        sanitized_title: sanitize_title(&extract_title(&document)),
        plain_text: extract_text(&document),
        outbound_links: extract_links(&document),
    }
}

/// Extracts the raw text of the first `<title>` element
fn extract_title(document: &Html) -> String {
    let Ok(title_selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .unwrap_or_default()
}

/// Reduces a title to alphanumeric characters and spaces
///
/// Trailing whitespace is trimmed; leading spaces are kept.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Concatenates every text node outside non-visible elements
fn extract_text(document: &Html) -> String {
    let mut text = String::new();
    collect_visible_text(document.root_element(), &mut text);
    text
}

fn collect_visible_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if !NON_VISIBLE_ELEMENTS.contains(&child_element.value().name()) {
                collect_visible_text(child_element, out);
            }
        }
    }
}

/// Collects absolute HTTP(S) anchor targets
fn extract_links(document: &Html) -> Vec<String> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&a_selector) {
        if let Some(href) = element.value().attr("href") {
            if is_crawlable_link(href) && seen.insert(href) {
                links.push(href.to_string());
            }
        }
    }

    links
}

/// Returns true if the href is an absolute HTTP(S) URL
pub fn is_crawlable_link(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}
