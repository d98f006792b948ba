//! Output module for the harvested corpus and crawl reports
//!
//! This module handles:
//! - Writing one plain-text corpus file per harvested page
//! - Building the end-of-crawl report (visited and still-pending URLs)
//! - Rendering the report for stdout and as a markdown file

mod corpus;
mod markdown;
mod report;

pub use corpus::CorpusWriter;
pub use markdown::{format_markdown_report, write_markdown_report};
pub use report::{print_report, CrawlReport};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during output operations
///
/// All of these are fatal to a crawl: a corpus with missing pages is unusable.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Output directory does not exist: {0}")]
    MissingDirectory(PathBuf),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
