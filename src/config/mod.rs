//! Configuration module for Corpus-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A configuration file is optional: [`Config::default`] describes the stock crawl
//! (15 pages, 10 second timeout, `./visited_pages`, `.txt` files).
//!
//! # Example
//!
//! ```no_run
//! use corpus_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Crawler will harvest at most {} pages", config.crawler.max_links);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CollisionPolicy, Config, CrawlerConfig, OutputConfig, RequestConfig, DEFAULT_MAX_LINKS,
    DEFAULT_TIMEOUT_SECS,
};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config};
pub use validation::{validate, validate_seed_url};
