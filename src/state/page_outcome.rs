//! Page outcome definitions for crawl statistics
//!
//! Every URL picked from the frontier ends in exactly one of these outcomes.
use std::fmt;

/// Represents how the processing of one picked URL ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageOutcome {
    // ===== Success =====
    /// Page was fetched, had text, and was written to the corpus
    Harvested,

    // ===== Discarded =====
    /// Server answered with a status other than 200
    HttpError,

    /// Connection, DNS, or timeout failure
    NetworkError,

    /// Page parsed but had no visible text
    EmptyContent,

    // ===== Anomaly =====
    /// URL was no longer pending when the controller tried to remove it
    FrontierAnomaly,
}

impl PageOutcome {
    /// Returns true if the URL was dropped from the frontier without a visit
    pub fn is_discarded(&self) -> bool {
        matches!(
            self,
            Self::HttpError | Self::NetworkError | Self::EmptyContent
        )
    }

    /// Short label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Harvested => "harvested",
            Self::HttpError => "http_error",
            Self::NetworkError => "network_error",
            Self::EmptyContent => "empty_content",
            Self::FrontierAnomaly => "frontier_anomaly",
        }
    }

    /// Returns all outcomes in report order
    pub fn all() -> [Self; 5] {
        [
            Self::Harvested,
            Self::HttpError,
            Self::NetworkError,
            Self::EmptyContent,
            Self::FrontierAnomaly,
        ]
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
