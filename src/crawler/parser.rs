//! HTML parser for extracting links
//!
//! This module turns a fetched page into the ordered list of absolute URLs
//! its anchor elements point at.

use crate::url::{is_valid_url, resolve_url};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts every valid anchor target from an HTML document
///
/// # Link Extraction Rules
///
/// - Only `<a href="...">` elements are considered, in document order
/// - `mailto:` links and inline `data:image/` links are skipped
/// - Each href is resolved against `base_url` with standard relative-reference
///   resolution, then kept only if the result is a valid absolute URL
/// - Repeated targets are kept once, at their first position
///
/// Malformed markup is recovered by the HTML5 parser rather than rejected.
/// An unusable `base_url` yields no links.
///
/// # Arguments
///
/// * `html` - The HTML content
/// * `base_url` - The URL relative references are resolved against
///
/// # Example
///
/// ```
/// use deadlink_crawler::crawler::extract_links;
///
/// let links = extract_links(r#"<a href="relative.html">x</a>"#, "https://example.com/");
/// assert_eq!(links, vec!["https://example.com/relative.html".to_string()]);
/// ```
pub fn extract_links(html: &str, base_url: &str) -> Vec<String> {
    if let Err(e) = Url::parse(base_url) {
        tracing::warn!("Cannot resolve links against base {}: {}", base_url, e);
        return Vec::new();
    }

    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if is_skipped_href(href) {
            continue;
        }

        let absolute = match resolve_url(base_url, href) {
            Ok(absolute) => absolute,
            Err(e) => {
                tracing::debug!("Error resolving URL {}: {}", href, e);
                continue;
            }
        };

        if !is_valid_url(&absolute) {
            tracing::debug!("Invalid URL: {}", absolute);
            continue;
        }

        if seen.insert(absolute.clone()) {
            links.push(absolute);
        }
    }

    links
}

/// Hrefs that never name a page worth checking
fn is_skipped_href(href: &str) -> bool {
    href.starts_with("mailto:") || href.starts_with("data:image/")
}
