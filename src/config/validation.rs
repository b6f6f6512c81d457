use crate::config::types::{Config, HttpConfig, OutputConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Upper bound accepted for `max-redirects`
const MAX_REDIRECT_LIMIT: usize = 50;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site, &config.home_url())?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the crawled site's domain and home URL
fn validate_site_config(site: &SiteConfig, home_url: &str) -> Result<(), ConfigError> {
    let domain = Url::parse(&site.domain)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid domain '{}': {}", site.domain, e)))?;

    if domain.scheme() != "http" && domain.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "domain '{}' must use the http or https scheme",
            site.domain
        )));
    }

    if domain.host_str().map_or(true, str::is_empty) {
        return Err(ConfigError::Validation(format!(
            "domain '{}' must contain a host",
            site.domain
        )));
    }

    // Internal checks compare raw string prefixes, so the origin must end at a path boundary
    if !site.domain.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "domain '{}' must end with '/'",
            site.domain
        )));
    }

    Url::parse(home_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid home URL '{}': {}", home_url, e)))?;

    if !home_url.starts_with(&site.domain) {
        return Err(ConfigError::Validation(format!(
            "home URL '{}' must be under domain '{}'",
            home_url, site.domain
        )));
    }

    if site.placeholder_hosts.iter().any(String::is_empty) {
        return Err(ConfigError::Validation(
            "placeholder-hosts cannot contain empty entries".to_string(),
        ));
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    if config.max_redirects > MAX_REDIRECT_LIMIT {
        return Err(ConfigError::Validation(format!(
            "max-redirects must be at most {}, got {}",
            MAX_REDIRECT_LIMIT, config.max_redirects
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.report_path.is_empty() {
        return Err(ConfigError::Validation(
            "report-path cannot be empty".to_string(),
        ));
    }

    if config.log_path.is_empty() {
        return Err(ConfigError::Validation(
            "log-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
