//! Markdown report generation
//!
//! Writes the end-of-crawl report as a human-readable markdown file.

use crate::output::{CrawlReport, OutputResult};
use crate::state::PageOutcome;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a markdown rendering of the report
///
/// # Arguments
///
/// * `report` - The finished crawl report
/// * `output_path` - Path where the markdown file should be written
pub fn write_markdown_report(report: &CrawlReport, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_report(report);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a crawl report as markdown
pub fn format_markdown_report(report: &CrawlReport) -> String {
    let mut md = String::new();

    md.push_str("# Corpus Harvest Report\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Seed**: {}\n", report.seed_url));
    md.push_str(&format!("- **Started**: {}\n", report.started_at.to_rfc3339()));
    md.push_str(&format!(
        "- **Finished**: {}\n",
        report.finished_at.to_rfc3339()
    ));
    md.push_str(&format!(
        "- **Duration**: {} seconds\n",
        report.duration_seconds()
    ));
    md.push_str(&format!("- **Page Cap**: {}\n", report.max_links));
    md.push_str(&format!("- **Attempted**: {}\n", report.attempted()));
    md.push_str(&format!("- **Discarded**: {}\n", report.discarded()));
    if report.hit_cap() {
        md.push_str("- **Stopped**: page cap reached\n\n");
    } else {
        md.push_str("- **Stopped**: frontier exhausted\n\n");
    }

    // Outcome breakdown
    md.push_str("## Outcomes\n\n");
    md.push_str("| Outcome | Count |\n");
    md.push_str("|---------|-------|\n");
    for outcome in PageOutcome::all() {
        md.push_str(&format!(
            "| {} | {} |\n",
            outcome,
            report.outcome_count(outcome)
        ));
    }
    md.push('\n');

    md.push_str(&format!("## Visited URLs ({})\n\n", report.visited.len()));
    for url in &report.visited {
        md.push_str(&format!("- {}\n", url));
    }
    md.push('\n');

    md.push_str(&format!("## Other Found URLs ({})\n\n", report.pending.len()));
    for url in &report.pending {
        md.push_str(&format!("- {}\n", url));
    }

    md
}
