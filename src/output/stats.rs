//! Crawl statistics
//!
//! This module tallies visit outcomes during a run and prints the summary
//! shown when the crawl finishes.

use crate::state::VisitOutcome;
use chrono::{DateTime, Duration, Utc};

/// Per-run tally of visit outcomes
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    /// When the crawl started
    pub started_at: DateTime<Utc>,

    /// When the crawl finished (None while running)
    pub finished_at: Option<DateTime<Utc>>,

    /// Internal pages fetched and parsed
    pub pages_crawled: u64,

    /// External URLs checked for liveness
    pub external_checked: u64,

    /// Links extracted across all crawled pages
    pub links_extracted: u64,

    /// URLs that answered 404
    pub dead_links: u64,

    /// URLs whose status could not be determined
    pub unreachable: u64,

    /// URLs that answered an error status other than 404
    pub error_status: u64,

    /// Internal pages whose body could not be read
    pub body_failed: u64,

    /// Malformed URLs skipped
    pub invalid: u64,

    /// Placeholder URLs skipped
    pub fake: u64,

    /// Repeat dispatches short-circuited by the visited set
    pub already_visited: u64,
}

impl CrawlStatistics {
    /// Creates an empty tally starting now
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            pages_crawled: 0,
            external_checked: 0,
            links_extracted: 0,
            dead_links: 0,
            unreachable: 0,
            error_status: 0,
            body_failed: 0,
            invalid: 0,
            fake: 0,
            already_visited: 0,
        }
    }

    /// Counts one visit outcome
    pub fn record(&mut self, outcome: &VisitOutcome) {
        match outcome {
            VisitOutcome::AlreadyVisited => self.already_visited += 1,
            VisitOutcome::Invalid => self.invalid += 1,
            VisitOutcome::Fake => self.fake += 1,
            VisitOutcome::Unreachable => self.unreachable += 1,
            VisitOutcome::Dead => self.dead_links += 1,
            VisitOutcome::ErrorStatus(_) => self.error_status += 1,
            VisitOutcome::BodyFailed => self.body_failed += 1,
            VisitOutcome::Crawled { links } => {
                self.pages_crawled += 1;
                self.links_extracted += *links as u64;
            }
            VisitOutcome::External => self.external_checked += 1,
        }
    }

    /// Marks the crawl as finished
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Elapsed time, measured to now while the crawl is still running
    pub fn duration(&self) -> Duration {
        self.finished_at.unwrap_or_else(Utc::now) - self.started_at
    }

    /// Number of distinct URLs dispatched (everything but repeat visits)
    pub fn urls_visited(&self) -> u64 {
        self.urls_fetched() + self.invalid + self.fake
    }

    /// Number of URLs that reached the network
    pub fn urls_fetched(&self) -> u64 {
        self.pages_crawled
            + self.external_checked
            + self.dead_links
            + self.unreachable
            + self.error_status
            + self.body_failed
    }
}

impl Default for CrawlStatistics {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints statistics to stdout
pub fn print_statistics(stats: &CrawlStatistics) {
    let duration = stats.duration();

    println!("=== Crawl Statistics ===\n");
    println!("Started: {}", stats.started_at.to_rfc3339());
    if let Some(finished) = stats.finished_at {
        println!("Finished: {}", finished.to_rfc3339());
    }
    println!(
        "Elapsed time: {}.{:03}s",
        duration.num_seconds(),
        duration.num_milliseconds() % 1000
    );

    println!("\nURLs visited: {}", stats.urls_visited());
    println!("  Internal pages crawled: {}", stats.pages_crawled);
    println!("  External links checked: {}", stats.external_checked);
    println!("  Links extracted: {}", stats.links_extracted);

    println!("\nProblems:");
    println!("  Dead links (404): {}", stats.dead_links);
    println!("  Other error statuses: {}", stats.error_status);
    println!("  Unreachable: {}", stats.unreachable);
    println!("  Unreadable bodies: {}", stats.body_failed);

    println!("\nSkipped:");
    println!("  Invalid URLs: {}", stats.invalid);
    println!("  Placeholder URLs: {}", stats.fake);
    println!("  Repeat links: {}", stats.already_visited);
}
