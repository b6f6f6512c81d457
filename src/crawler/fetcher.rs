//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client from configuration
//! - Status checks (GET, redirects followed, body discarded)
//! - Body retrieval for healthy internal pages
//! - Error classification for transport failures

use crate::config::HttpConfig;
use crate::CrawlError;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The HTTP configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use deadlink_crawler::config::HttpConfig;
/// use deadlink_crawler::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .redirect(Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Thin wrapper over a shared client exposing the two requests the crawl needs
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Wraps an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a fetcher from HTTP configuration
    pub fn from_config(config: &HttpConfig) -> crate::Result<Self> {
        Ok(Self::new(build_http_client(config)?))
    }

    /// Returns the final status code of a GET request
    ///
    /// Redirects are followed; the body is dropped without being read.
    /// Transport failures (DNS, refused connection, timeout, redirect limit)
    /// are returned as errors: they mean the status could not be determined.
    pub async fn fetch_status(&self, url: &str) -> crate::Result<u16> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        Ok(response.status().as_u16())
    }

    /// Returns the body of a GET request as text
    ///
    /// A final status outside `[200, 300)` is an error and the body is not read.
    pub async fn fetch_body(&self, url: &str) -> crate::Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::BadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| classify_error(url, e))
    }
}

/// Maps a reqwest error onto the crawler's error type
fn classify_error(url: &str, error: reqwest::Error) -> CrawlError {
    if error.is_timeout() {
        CrawlError::Timeout {
            url: url.to_string(),
        }
    } else {
        CrawlError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
