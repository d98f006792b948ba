//! Corpus-Harvest main entry point
//!
//! This is the command-line interface for the Corpus-Harvest crawler.

use anyhow::Context;
use clap::Parser;
use corpus_harvest::config::{load_config, validate, validate_seed_url, CollisionPolicy, Config};
use corpus_harvest::crawler::crawl;
use corpus_harvest::output::print_report;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Corpus-Harvest: a seed-driven text corpus crawler
///
/// Starting from one seed URL, Corpus-Harvest repeatedly picks a random
/// discovered link, fetches it, and saves the page's visible text into the
/// output directory, one file per page named after the page title.
#[derive(Parser, Debug)]
#[command(name = "corpus-harvest")]
#[command(version = "1.0.0")]
#[command(about = "A seed-driven text corpus crawler", long_about = None)]
struct Cli {
    /// URL to start crawling from
    #[arg(value_name = "SEED_URL", value_parser = parse_seed_url)]
    seed_url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum number of pages to harvest
    #[arg(short = 'n', long)]
    max_links: Option<usize>,

    /// Seed for the random link selection (reproducible crawls)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory receiving the corpus files (must already exist)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(short, long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Keep corpus files left over from previous runs
    #[arg(long)]
    keep_existing: bool,

    /// Add a numeric suffix instead of overwriting pages with the same title
    #[arg(long)]
    suffix_collisions: bool,

    /// Also write the report as markdown to this path
    #[arg(long, value_name = "FILE")]
    summary: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Loads the configuration file, if any, and applies flag overrides
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(max_links) = self.max_links {
            config.crawler.max_links = max_links;
        }
        if let Some(seed) = self.seed {
            config.crawler.random_seed = Some(seed);
        }
        if let Some(timeout) = self.timeout {
            config.crawler.timeout_secs = timeout;
        }
        if let Some(dir) = &self.output_dir {
            config.output.directory = dir.to_string_lossy().into_owned();
        }
        if self.keep_existing {
            config.output.clear_existing = false;
        }
        if self.suffix_collisions {
            config.output.on_collision = CollisionPolicy::Suffix;
        }
        if let Some(summary) = &self.summary {
            config.output.summary_path = Some(summary.to_string_lossy().into_owned());
        }

        validate(&config).context("Invalid configuration")?;
        Ok(config)
    }
}

fn parse_seed_url(value: &str) -> Result<String, String> {
    validate_seed_url(value)
        .map(|_| value.to_string())
        .map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = cli.resolve_config()?;

    tracing::info!(
        "Harvesting up to {} pages into {}",
        config.crawler.max_links,
        config.output.directory
    );

    let report = crawl(&config, &cli.seed_url)
        .await
        .context("Crawl aborted")?;

    print_report(&report);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("corpus_harvest=info,warn"),
            1 => EnvFilter::new("corpus_harvest=debug,info"),
            2 => EnvFilter::new("corpus_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}
