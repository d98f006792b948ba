//! Corpus-Harvest: a seed-driven text corpus crawler
//!
//! This crate walks web pages reachable from a single seed URL, picking the
//! next page at random from the discovered frontier, and writes the visible
//! text of every page it harvests into a plain-text corpus directory.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;

use thiserror::Error;

/// Main error type for fatal Corpus-Harvest failures
///
/// Any of these aborts the crawl. Failures that only concern a single URL
/// are reported as [`PageError`] instead.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Corpus storage error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Non-fatal failure while processing one URL
///
/// The URL is discarded from the frontier and the crawl continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    #[error("HTTP {status_code} for {url}")]
    Http { url: String, status_code: u16 },

    #[error("No visible text found on page {url}")]
    EmptyContent { url: String },
}

impl PageError {
    /// The URL this failure concerns
    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. } | Self::Http { url, .. } | Self::EmptyContent { url } => url,
        }
    }

    /// Classifies the failure for crawl statistics
    pub fn outcome(&self) -> PageOutcome {
        match self {
            Self::Network { .. } => PageOutcome::NetworkError,
            Self::Http { .. } => PageOutcome::HttpError,
            Self::EmptyContent { .. } => PageOutcome::EmptyContent,
        }
    }
}

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, Coordinator, Frontier};
pub use output::CrawlReport;
pub use state::{CrawlState, PageOutcome};
