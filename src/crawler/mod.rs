//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - Frontier bookkeeping and random next-URL selection
//! - HTTP fetching and outcome classification
//! - HTML link, title, and text extraction
//! - Overall crawl coordination

mod coordinator;
mod extractor;
mod fetcher;
mod frontier;

pub use coordinator::Coordinator;
pub use extractor::{extract, is_crawlable_link, sanitize_title, ExtractedPage};
pub use fetcher::{build_http_client, fetch_url, FetchResult, HttpFetcher, PageFetcher};
pub use frontier::{Frontier, FrontierError};

use crate::config::Config;
use crate::output::{write_markdown_report, CrawlReport};
use crate::HarvestError;
use std::path::Path;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Check the seed URL and the output directory
/// 2. Clear old corpus files if configured
/// 3. Crawl until the frontier is empty or the page cap is reached
/// 4. Write the markdown report if a summary path is configured
///
/// A failed markdown write is logged and does not fail the crawl; the
/// corpus is already complete by then.
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `seed_url` - The URL the crawl starts from
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed, possibly with zero pages harvested
/// * `Err(HarvestError)` - Crawl could not start or the corpus could not be written
pub async fn crawl(config: &Config, seed_url: &str) -> Result<CrawlReport, HarvestError> {
    let mut coordinator = Coordinator::new(config, seed_url)?;
    let report = coordinator.run().await?;

    if let Some(summary_path) = &config.output.summary_path {
        match write_markdown_report(&report, Path::new(summary_path)) {
            Ok(()) => tracing::info!("Report written to {}", summary_path),
            Err(e) => tracing::warn!("Failed to write report to {}: {}", summary_path, e),
        }
    }

    Ok(report)
}
