//! URL classification for the crawler
//!
//! Every decision the traversal makes about a URL before touching the network
//! lives here: whether it is well formed, whether it belongs to the crawled
//! site, and whether it is a documentation placeholder that must never be
//! fetched. All functions are pure and operate on absolute URL strings.

mod resolve;

use crate::config::SiteConfig;
use url::Url;

pub use resolve::resolve_url;

/// Checks whether a string is a usable absolute URL
///
/// A URL is valid when it parses and carries both a non-empty scheme and a
/// non-empty host. Bare words, scheme-less strings such as `example.com` and
/// host-less URLs such as `mailto:` addresses are all rejected.
///
/// # Examples
///
/// ```
/// use deadlink_crawler::url::is_valid_url;
///
/// assert!(is_valid_url("https://www.example.com"));
/// assert!(!is_valid_url("www.example.com"));
/// assert!(!is_valid_url("invalid"));
/// ```
pub fn is_valid_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => {
            !parsed.scheme().is_empty() && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Checks whether a URL belongs to the crawled site
///
/// The URL must start with `domain` verbatim and must not contain the
/// excluded subtree marker placed directly after the domain. An empty marker
/// excludes nothing.
///
/// # Examples
///
/// ```
/// use deadlink_crawler::url::is_internal_url;
///
/// let domain = "https://example.org/";
/// assert!(is_internal_url("https://example.org/index.html", domain, "cgit"));
/// assert!(!is_internal_url("https://example.org/cgit/repo", domain, "cgit"));
/// assert!(!is_internal_url("https://other.org/", domain, "cgit"));
/// ```
pub fn is_internal_url(url: &str, domain: &str, excluded_subpath: &str) -> bool {
    if !url.starts_with(domain) {
        return false;
    }

    if excluded_subpath.is_empty() {
        return true;
    }

    !url.contains(&format!("{}{}", domain, excluded_subpath))
}

/// Checks whether a URL points at a documentation placeholder host
pub fn is_fake_url<S: AsRef<str>>(url: &str, placeholder_hosts: &[S]) -> bool {
    placeholder_hosts
        .iter()
        .any(|host| url.contains(host.as_ref()))
}

/// Site-specific URL rules, built once per run from the site configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPolicy {
    domain: String,
    excluded_subpath: String,
    placeholder_hosts: Vec<String>,
}

impl UrlPolicy {
    /// Creates a policy for `domain` with the given exclusions
    pub fn new(
        domain: impl Into<String>,
        excluded_subpath: impl Into<String>,
        placeholder_hosts: Vec<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            excluded_subpath: excluded_subpath.into(),
            placeholder_hosts,
        }
    }

    /// Builds the policy described by a `[site]` config section
    pub fn from_site_config(site: &SiteConfig) -> Self {
        Self::new(
            site.domain.clone(),
            site.excluded_subpath.clone(),
            site.placeholder_hosts.clone(),
        )
    }

    /// The canonical origin internal URLs are measured against
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns true if `url` is inside the crawled site
    pub fn is_internal(&self, url: &str) -> bool {
        is_internal_url(url, &self.domain, &self.excluded_subpath)
    }

    /// Returns true if `url` is a placeholder that must be skipped entirely
    pub fn is_fake(&self, url: &str) -> bool {
        is_fake_url(url, self.placeholder_hosts.as_slice())
    }
}
