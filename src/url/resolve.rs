use crate::UrlError;
use url::Url;

/// Resolves `href` against `base` using standard relative-reference rules
///
/// An already-absolute `href` (scheme and host present) is returned exactly
/// as written, so host case and explicit ports survive into the report.
///
/// # Examples
///
/// ```
/// use deadlink_crawler::url::resolve_url;
///
/// let resolved = resolve_url("https://x.org/dir/", "page2").unwrap();
/// assert_eq!(resolved, "https://x.org/dir/page2");
/// ```
pub fn resolve_url(base: &str, href: &str) -> Result<String, UrlError> {
    if let Ok(absolute) = Url::parse(href) {
        if absolute.host_str().is_some_and(|host| !host.is_empty()) {
            return Ok(href.to_string());
        }
    }

    let base = Url::parse(base).map_err(|e| UrlError::Parse(format!("{}: {}", base, e)))?;

    let absolute = base
        .join(href)
        .map_err(|e| UrlError::Parse(format!("{}: {}", href, e)))?;

    Ok(absolute.to_string())
}
