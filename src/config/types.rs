use serde::Deserialize;

/// Default cap on the number of visited pages
pub const DEFAULT_MAX_LINKS: usize = 15;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for Corpus-Harvest
///
/// Every table and key is optional; an empty file yields [`Config::default`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub request: RequestConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum number of pages to harvest
    #[serde(rename = "max-links", default = "default_max_links")]
    pub max_links: usize,

    /// Timeout for a single fetch (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Seed for the frontier's random selection; entropy-seeded when absent
    #[serde(rename = "random-seed", default)]
    pub random_seed: Option<u64>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_links: DEFAULT_MAX_LINKS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            random_seed: None,
        }
    }
}

/// Headers sent with every fetch
#[derive(Debug, Clone, Deserialize)]
pub struct RequestConfig {
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_accept")]
    pub accept: String,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            accept: default_accept(),
        }
    }
}

/// Corpus output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Pre-existing directory receiving one text file per harvested page
    #[serde(default = "default_directory")]
    pub directory: String,

    /// File extension for corpus files, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Remove existing corpus files before crawling
    #[serde(rename = "clear-existing", default = "default_true")]
    pub clear_existing: bool,

    /// What to do when two pages share a sanitized title
    #[serde(rename = "on-collision", default)]
    pub on_collision: CollisionPolicy,

    /// Optional path for a markdown copy of the final report
    #[serde(rename = "summary-path", default)]
    pub summary_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            extension: default_extension(),
            clear_existing: true,
            on_collision: CollisionPolicy::default(),
            summary_path: None,
        }
    }
}

/// Naming rule for pages whose sanitized titles collide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Later pages replace earlier files of the same name
    #[default]
    Overwrite,

    /// Later pages get a `-2`, `-3`, ... suffix
    Suffix,
}

fn default_max_links() -> usize {
    DEFAULT_MAX_LINKS
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

fn default_accept() -> String {
    "text/html,application/xhtml+xml,*/*".to_string()
}

fn default_directory() -> String {
    "./visited_pages".to_string()
}

fn default_extension() -> String {
    "txt".to_string()
}

fn default_true() -> bool {
    true
}
