//! Reporter trait
//!
//! The traversal engine only talks to its dead link sink through this trait,
//! so any crawl front end can share the same report contract.

/// Sink for dead links discovered during a crawl
pub trait DeadLinkReporter {
    /// Records a dead link together with the page that referenced it
    ///
    /// Implementations must persist the full accumulated report on every
    /// call. Persistence failures are logged, never propagated: a broken
    /// report sink must not abort the traversal.
    ///
    /// # Arguments
    ///
    /// * `referrer` - The page on which the link was found
    /// * `url` - The dead URL
    /// * `status_code` - The HTTP status the URL answered with
    fn record_dead_link(&mut self, referrer: &str, url: &str, status_code: u16);

    /// Returns the report lines recorded so far, in discovery order
    fn dead_links(&self) -> &[String];
}
