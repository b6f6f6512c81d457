//! Per-URL visit state
//!
//! Every URL handed to the traversal ends in exactly one [`VisitOutcome`]:
//! skipped before any I/O, failed in transport, reported dead, or checked
//! (and, for internal pages, crawled).

mod visit_outcome;

pub use visit_outcome::VisitOutcome;
