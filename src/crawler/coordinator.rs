//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that coordinates:
//! - Picking the next URL from the frontier
//! - Fetching and extracting the page
//! - Persisting its text to the corpus
//! - Registering its outbound links
//! - Stopping once the frontier is empty or the page cap is reached

use crate::config::{validate_seed_url, Config};
use crate::crawler::extractor::{extract, ExtractedPage};
use crate::crawler::fetcher::{HttpFetcher, PageFetcher};
use crate::crawler::frontier::Frontier;
use crate::output::{CorpusWriter, CrawlReport};
use crate::state::{CrawlState, PageOutcome};
use crate::{HarvestError, PageError};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;

/// Main crawler coordinator structure
///
/// Runs strictly one URL at a time; the frontier is never shared.
pub struct Coordinator<F = HttpFetcher> {
    seed_url: String,
    max_links: usize,
    frontier: Frontier,
    fetcher: F,
    corpus: CorpusWriter,
    rng: StdRng,
    state: CrawlState,
    outcomes: BTreeMap<PageOutcome, u64>,
    started_at: DateTime<Utc>,
}

impl Coordinator<HttpFetcher> {
    /// Creates a coordinator that fetches over HTTP
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    /// * `seed_url` - The URL the crawl starts from
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(HarvestError)` - Invalid seed, missing output directory, or client failure
    pub fn new(config: &Config, seed_url: &str) -> Result<Self, HarvestError> {
        let fetcher = HttpFetcher::new(&config.crawler, &config.request)?;
        Self::with_fetcher(config, seed_url, fetcher)
    }
}

impl<F: PageFetcher> Coordinator<F> {
    /// Creates a coordinator around any page source
    ///
    /// Clears existing corpus files first when the configuration asks for it.
    pub fn with_fetcher(config: &Config, seed_url: &str, fetcher: F) -> Result<Self, HarvestError> {
        validate_seed_url(seed_url)?;

        let corpus = CorpusWriter::from_config(&config.output)?;
        if config.output.clear_existing {
            let removed = corpus.clear_existing()?;
            if removed > 0 {
                tracing::info!(
                    "Cleared {} corpus files from {}",
                    removed,
                    corpus.directory().display()
                );
            }
        }

        let rng = match config.crawler.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut frontier = Frontier::new();
        frontier.seed(seed_url);

        let max_links = config.crawler.max_links;

        Ok(Self {
            seed_url: seed_url.to_string(),
            max_links,
            state: CrawlState::evaluate(frontier.pending_count(), 0, max_links),
            frontier,
            fetcher,
            corpus,
            rng,
            outcomes: BTreeMap::new(),
            started_at: Utc::now(),
        })
    }

    /// Runs the crawl loop until it is done and returns the final report
    ///
    /// Per-URL failures are logged and skipped. Only a corpus write failure
    /// aborts the crawl.
    pub async fn run(&mut self) -> Result<CrawlReport, HarvestError> {
        tracing::info!(
            "Starting crawl from {} (max {} pages)",
            self.seed_url,
            self.max_links
        );

        while self.step().await?.is_some() {
            tracing::debug!(
                "Progress: {} visited, {} pending",
                self.frontier.visited_count(),
                self.frontier.pending_count()
            );
        }

        tracing::info!(
            "Crawl completed: {} pages harvested, {} URLs left unvisited",
            self.frontier.visited_count(),
            self.frontier.pending_count()
        );

        Ok(self.report())
    }

    /// Processes a single URL from the frontier
    ///
    /// # Returns
    ///
    /// * `Ok(Some(PageOutcome))` - One URL was picked and processed
    /// * `Ok(None)` - The crawl is done; nothing was picked
    /// * `Err(HarvestError)` - The corpus could not be written
    pub async fn step(&mut self) -> Result<Option<PageOutcome>, HarvestError> {
        self.refresh_state();
        if self.state.is_done() {
            return Ok(None);
        }

        let Some(url) = self.frontier.pick_next(&mut self.rng) else {
            self.state = CrawlState::Done;
            return Ok(None);
        };

        tracing::info!("Visiting URL: {}", url);
        let outcome = self.process_url(&url).await?;
        self.refresh_state();

        Ok(Some(outcome))
    }

    /// Handles one picked URL and tallies its outcome
    async fn process_url(&mut self, url: &str) -> Result<PageOutcome, HarvestError> {
        let outcome = self.visit_url(url).await?;
        *self.outcomes.entry(outcome).or_insert(0) += 1;
        Ok(outcome)
    }

    /// Fetches, extracts, persists, and records one picked URL
    async fn visit_url(&mut self, url: &str) -> Result<PageOutcome, HarvestError> {
        let page = match self.fetch_and_extract(url).await {
            Ok(page) => page,
            Err(page_error) => {
                tracing::warn!("{}", page_error);
                return Ok(match self.frontier.discard(url) {
                    Ok(()) => page_error.outcome(),
                    Err(e) => {
                        tracing::warn!("Frontier anomaly: {}", e);
                        PageOutcome::FrontierAnomaly
                    }
                });
            }
        };

        let path = self
            .corpus
            .persist(&page.sanitized_title, &page.plain_text)?;
        tracing::debug!("Wrote {} from {}", path.display(), url);

        let mut discovered = 0;
        for link in &page.outbound_links {
            if self.frontier.add_if_new(link) {
                discovered += 1;
            }
        }
        tracing::debug!("Discovered {} new URLs on {}", discovered, url);

        Ok(match self.frontier.mark_visited(url) {
            Ok(()) => PageOutcome::Harvested,
            Err(e) => {
                tracing::warn!("Frontier anomaly: {}", e);
                PageOutcome::FrontierAnomaly
            }
        })
    }

    async fn fetch_and_extract(&self, url: &str) -> Result<ExtractedPage, PageError> {
        let body = self.fetcher.fetch(url).await.into_body()?;

        let page = extract(&body);
        if page.is_empty() {
            return Err(PageError::EmptyContent {
                url: url.to_string(),
            });
        }

        Ok(page)
    }

    fn refresh_state(&mut self) {
        if !self.state.is_done() {
            self.state = CrawlState::evaluate(
                self.frontier.pending_count(),
                self.frontier.visited_count(),
                self.max_links,
            );
        }
    }

    /// Builds the report from the current frontier without mutating it
    pub fn report(&self) -> CrawlReport {
        let mut pending = self.frontier.pending().to_vec();
        pending.sort();

        CrawlReport {
            seed_url: self.seed_url.clone(),
            max_links: self.max_links,
            visited: self.frontier.visited().to_vec(),
            pending,
            outcomes: self.outcomes.clone(),
            started_at: self.started_at,
            finished_at: Utc::now(),
        }
    }

    /// The frontier as it currently stands
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Current controller state
    pub fn state(&self) -> CrawlState {
        self.state
    }
}
