//! Crawler coordinator - the traversal engine
//!
//! This module owns the per-run traversal state and walks the site's link
//! graph depth-first:
//! - Gating every URL through the visited set before any I/O
//! - Classifying URLs (invalid, placeholder, internal, external)
//! - Checking status, reporting 404s with their referrer
//! - Fetching and parsing internal pages to discover more links

use crate::config::Config;
use crate::crawler::fetcher::Fetcher;
use crate::crawler::parser::extract_links;
use crate::output::{CrawlStatistics, DeadLinkReporter, FileReporter};
use crate::state::VisitOutcome;
use crate::url::{is_valid_url, UrlPolicy};
use crate::CrawlError;
use std::collections::HashSet;

/// The only status that makes a link dead
const NOT_FOUND: u16 = 404;

/// Main crawler structure
///
/// One instance drives one run. `visited` only grows, and every URL is
/// inserted before it is fetched, so no URL is dispatched twice and the walk
/// terminates on cyclic link graphs.
pub struct Crawler<R: DeadLinkReporter = FileReporter> {
    policy: UrlPolicy,
    home_url: String,
    visited: HashSet<String>,
    fetcher: Fetcher,
    reporter: R,
    stats: CrawlStatistics,
}

/// Result of dispatching a single URL
struct Step {
    outcome: VisitOutcome,
    links: Vec<String>,
}

impl Step {
    fn done(outcome: VisitOutcome) -> Self {
        Self {
            outcome,
            links: Vec::new(),
        }
    }
}

impl Crawler<FileReporter> {
    /// Creates a crawler from configuration, reporting to the configured file
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to run
    /// * `Err(CrawlError)` - The HTTP client could not be built
    pub fn from_config(config: &Config) -> Result<Self, CrawlError> {
        let fetcher = Fetcher::from_config(&config.http)?;
        let reporter = FileReporter::new(&config.output.report_path);

        Ok(Self::new(
            UrlPolicy::from_site_config(&config.site),
            config.home_url(),
            fetcher,
            reporter,
        ))
    }
}

impl<R: DeadLinkReporter> Crawler<R> {
    /// Creates a crawler with empty traversal state
    pub fn new(policy: UrlPolicy, home_url: impl Into<String>, fetcher: Fetcher, reporter: R) -> Self {
        Self {
            policy,
            home_url: home_url.into(),
            visited: HashSet::new(),
            fetcher,
            reporter,
            stats: CrawlStatistics::new(),
        }
    }

    /// The canonical origin internal URLs are measured against
    pub fn domain(&self) -> &str {
        self.policy.domain()
    }

    /// The entry point of the crawl
    pub fn home_url(&self) -> &str {
        &self.home_url
    }

    /// URLs dispatched so far
    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    /// Returns true if `url` has already been dispatched
    pub fn has_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Dead link report lines recorded so far, in discovery order
    pub fn dead_links(&self) -> &[String] {
        self.reporter.dead_links()
    }

    /// The dead link sink
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Outcome tally for the run
    pub fn statistics(&self) -> &CrawlStatistics {
        &self.stats
    }

    /// Runs the crawl from the home URL until no unvisited link remains
    pub async fn run(&mut self) -> &CrawlStatistics {
        let home = self.home_url.clone();
        tracing::info!("Starting crawl at: {}", home);

        self.visit(&home, &home).await;
        self.stats.finish();

        tracing::info!(
            "Crawl completed: {} URLs visited, {} dead links in {}ms",
            self.visited.len(),
            self.reporter.dead_links().len(),
            self.stats.duration().num_milliseconds()
        );

        &self.stats
    }

    /// Visits `url`, found on `referrer`, and everything reachable from it
    ///
    /// Traversal is depth-first and sequential: links are followed in the
    /// order they appear on their page, and each fetch completes before the
    /// next begins. Returns the outcome for `url` itself.
    pub async fn visit(&mut self, url: &str, referrer: &str) -> VisitOutcome {
        let mut stack = vec![(url.to_string(), referrer.to_string())];
        let mut root_outcome = None;

        while let Some((next, from)) = stack.pop() {
            let step = self.step(&next, &from).await;
            tracing::debug!("{} -> {}", next, step.outcome);
            self.stats.record(&step.outcome);
            root_outcome.get_or_insert(step.outcome);

            // Reverse so the first link on the page is popped first
            for link in step.links.into_iter().rev() {
                stack.push((link, next.clone()));
            }

            if let VisitOutcome::Crawled { .. } = step.outcome {
                if self.stats.pages_crawled % 10 == 0 {
                    tracing::info!(
                        "Progress: {} pages crawled, {} URLs visited, {} pending",
                        self.stats.pages_crawled,
                        self.visited.len(),
                        stack.len()
                    );
                }
            }
        }

        root_outcome.unwrap_or(VisitOutcome::AlreadyVisited)
    }

    /// Dispatches a single URL and returns the links to follow from it
    async fn step(&mut self, url: &str, referrer: &str) -> Step {
        if !self.visited.insert(url.to_string()) {
            tracing::debug!("Already visited: {}", url);
            return Step::done(VisitOutcome::AlreadyVisited);
        }
        tracing::debug!("Added {} to visited set", url);

        if !is_valid_url(url) {
            tracing::warn!("Invalid URL: {} (found on {})", url, referrer);
            return Step::done(VisitOutcome::Invalid);
        }

        if self.policy.is_fake(url) {
            tracing::info!("Skipping placeholder URL: {}", url);
            return Step::done(VisitOutcome::Fake);
        }

        tracing::info!("Checking {}", url);
        let status = match self.fetcher.fetch_status(url).await {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!("Error checking status for URL: {} Error: {}", url, e);
                return Step::done(VisitOutcome::Unreachable);
            }
        };

        if status == NOT_FOUND {
            self.reporter.record_dead_link(referrer, url, status);
            return Step::done(VisitOutcome::Dead);
        }

        if self.policy.is_internal(url) {
            return self.crawl_internal(url).await;
        }

        if status >= 400 {
            tracing::warn!("External URL {} answered status {}", url, status);
            return Step::done(VisitOutcome::ErrorStatus(status));
        }

        Step::done(VisitOutcome::External)
    }

    /// Fetches an internal page and extracts its outbound links
    async fn crawl_internal(&mut self, url: &str) -> Step {
        let content = match self.fetcher.fetch_body(url).await {
            Ok(content) => content,
            Err(CrawlError::BadStatus { status, .. }) => {
                tracing::warn!("Not crawling {}: received status code {}", url, status);
                return Step::done(VisitOutcome::ErrorStatus(status));
            }
            Err(e) => {
                tracing::warn!("Error fetching contents of URL: {} Error: {}", url, e);
                return Step::done(VisitOutcome::BodyFailed);
            }
        };

        let links = extract_links(&content, url);
        tracing::debug!("Found {} links on {}", links.len(), url);

        Step {
            outcome: VisitOutcome::Crawled { links: links.len() },
            links,
        }
    }
}
