//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP status checks and page fetching
//! - HTML parsing and link extraction
//! - Depth-first traversal with dead link reporting

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::Crawler;
pub use fetcher::{build_http_client, Fetcher};
pub use parser::extract_links;

use crate::config::Config;
use crate::output::CrawlStatistics;
use crate::CrawlError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client
/// 2. Walk every page reachable from the home URL
/// 3. Write dead links to the report file as they are found
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlStatistics)` - Crawl completed
/// * `Err(CrawlError)` - The crawl could not be started
pub async fn crawl(config: &Config) -> Result<CrawlStatistics, CrawlError> {
    let mut crawler = Crawler::from_config(config)?;
    Ok(crawler.run().await.clone())
}
