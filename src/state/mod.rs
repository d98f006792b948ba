//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlState`: Whether the crawl loop is still running
//! - `PageOutcome`: How the processing of a single picked URL ended

mod crawl_state;
mod page_outcome;

// Re-export main types
pub use crawl_state::CrawlState;
pub use page_outcome::PageOutcome;
