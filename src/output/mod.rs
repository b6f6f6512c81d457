//! Output module for crawl results
//!
//! This module handles:
//! - Persisting dead links to the report file as they are discovered
//! - Tallying per-outcome statistics for the end-of-run summary

mod report;
pub mod stats;
mod traits;

pub use report::{format_dead_link, save_dead_links, FileReporter};
pub use stats::{print_statistics, CrawlStatistics};
pub use traits::DeadLinkReporter;
