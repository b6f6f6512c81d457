/// Visit outcome definitions for the traversal state machine
///
/// A URL moves from unvisited either straight to a skip state (duplicate,
/// invalid, placeholder) or through a status fetch into one of the checked
/// states below.
use std::fmt;

/// Terminal state reached by a single `visit` of a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisitOutcome {
    // ===== Skip States (no network access) =====
    /// URL was already dispatched earlier in the run
    AlreadyVisited,

    /// URL is not a well-formed absolute URL
    Invalid,

    /// URL points at a documentation placeholder host
    Fake,

    // ===== Error States =====
    /// Status could not be determined (DNS failure, refused connection, timeout)
    Unreachable,

    /// URL answered HTTP 404 and was reported as a dead link
    Dead,

    /// URL answered an error status other than 404; not reported, not crawled
    ErrorStatus(u16),

    /// Internal page answered a healthy status but its body could not be read
    BodyFailed,

    // ===== Success States =====
    /// Internal page fetched and parsed; holds the number of links extracted
    Crawled { links: usize },

    /// External URL answered a non-error status; checked but never crawled
    External,
}

impl VisitOutcome {
    /// Short machine-friendly label, used in logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::AlreadyVisited => "already_visited",
            Self::Invalid => "invalid",
            Self::Fake => "fake",
            Self::Unreachable => "unreachable",
            Self::Dead => "dead_link",
            Self::ErrorStatus(_) => "error_status",
            Self::BodyFailed => "body_failed",
            Self::Crawled { .. } => "crawled",
            Self::External => "external",
        }
    }
}

impl fmt::Display for VisitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ErrorStatus(status) => write!(f, "{} ({})", self.label(), status),
            Self::Crawled { links } => write!(f, "{} ({} links)", self.label(), links),
            _ => write!(f, "{}", self.label()),
        }
    }
}
