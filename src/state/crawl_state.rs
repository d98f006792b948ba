//! Lifecycle of a single crawl run
use std::fmt;

/// State of the crawl controller
///
/// A crawl starts `Running` and moves to `Done` exactly once, when the
/// frontier runs dry or the visited cap is reached. It never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CrawlState {
    #[default]
    Running,
    Done,
}

impl CrawlState {
    /// Decides the state for the given frontier sizes and cap
    pub fn evaluate(pending: usize, visited: usize, max_links: usize) -> Self {
        if pending == 0 || visited >= max_links {
            Self::Done
        } else {
            Self::Running
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for CrawlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::Done => write!(f, "done"),
        }
    }
}
