use serde::Deserialize;

/// Site crawled when no domain is configured
pub const DEFAULT_DOMAIN: &str = "https://kdlp.underground.software/";

/// Subtree marker excluded from internal crawling (the cgit repository browser)
pub const DEFAULT_EXCLUDED_SUBPATH: &str = "cgit";

/// Placeholder host used in copy-pasteable documentation examples
pub const DEFAULT_PLACEHOLDER_HOST: &str = "your.computers.ip.addr";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Returns the home URL, deriving `<domain>index.html` when none is set
    pub fn home_url(&self) -> String {
        match &self.site.home_url {
            Some(home) => home.clone(),
            None => format!("{}index.html", self.site.domain),
        }
    }
}

/// Which site to crawl and which URLs to leave alone
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Canonical origin every internal/external decision is measured against
    pub domain: String,

    /// Entry point of the crawl
    #[serde(rename = "home-url")]
    pub home_url: Option<String>,

    /// Marker placed directly after the domain that excludes a subtree
    #[serde(rename = "excluded-subpath")]
    pub excluded_subpath: String,

    /// Host substrings that mark a URL as a documentation placeholder
    #[serde(rename = "placeholder-hosts")]
    pub placeholder_hosts: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            home_url: None,
            excluded_subpath: DEFAULT_EXCLUDED_SUBPATH.to_string(),
            placeholder_hosts: vec![DEFAULT_PLACEHOLDER_HOST.to_string()],
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Overall request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Maximum number of redirects followed per request
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("deadlink-crawler/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_redirects: 10,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the dead link report, rewritten on every new dead link
    #[serde(rename = "report-path")]
    pub report_path: String,

    /// Path of the log file mirrored from the console
    #[serde(rename = "log-path")]
    pub log_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: "dead_links.txt".to_string(),
            log_path: "error_log.txt".to_string(),
        }
    }
}
