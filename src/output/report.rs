//! End-of-crawl report
//!
//! The report is built from the frontier once the crawl is done: the final
//! visited set, then the URLs that were discovered but never fetched.

use crate::state::PageOutcome;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;

/// Final state of a crawl run
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// The URL the crawl started from
    pub seed_url: String,

    /// Cap on the number of visited pages
    pub max_links: usize,

    /// Visited URLs, in visit order
    pub visited: Vec<String>,

    /// Discovered but unfetched URLs, sorted
    pub pending: Vec<String>,

    /// How every picked URL ended
    pub outcomes: BTreeMap<PageOutcome, u64>,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlReport {
    /// Number of URLs that ended with the given outcome
    pub fn outcome_count(&self, outcome: PageOutcome) -> u64 {
        self.outcomes.get(&outcome).copied().unwrap_or(0)
    }

    /// Total number of URLs picked from the frontier
    pub fn attempted(&self) -> u64 {
        self.outcomes.values().sum()
    }

    /// Number of URLs dropped without a visit
    pub fn discarded(&self) -> u64 {
        self.outcomes
            .iter()
            .filter(|(outcome, _)| outcome.is_discarded())
            .map(|(_, count)| count)
            .sum()
    }

    /// Wall-clock duration of the crawl in seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }

    /// Returns true if the crawl stopped because of the visited cap
    pub fn hit_cap(&self) -> bool {
        self.visited.len() >= self.max_links && !self.pending.is_empty()
    }
}

impl fmt::Display for CrawlReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Visited URLs:")?;
        for url in &self.visited {
            writeln!(f, "{}", url)?;
        }

        writeln!(f, "Other found URLs:")?;
        for url in &self.pending {
            writeln!(f, "{}", url)?;
        }

        Ok(())
    }
}

/// Prints the report to stdout, followed by a short statistics block
pub fn print_report(report: &CrawlReport) {
    print!("{}", report);
    println!();

    println!("=== Crawl Statistics ===");
    println!("  Seed: {}", report.seed_url);
    println!(
        "  Visited: {} / {} (cap)",
        report.visited.len(),
        report.max_links
    );
    println!("  Pending: {}", report.pending.len());
    println!(
        "  Attempted: {} ({} discarded)",
        report.attempted(),
        report.discarded()
    );
    for outcome in PageOutcome::all() {
        let count = report.outcome_count(outcome);
        if count > 0 {
            println!("  {}: {}", outcome, count);
        }
    }
    println!("  Duration: {}s", report.duration_seconds());
}
