use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the crawler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// URL for the WebDriver instance used by the rendering fetcher
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Navigation timeout in milliseconds for rendered pages
    #[serde(default = "default_nav_timeout_ms")]
    pub nav_timeout_ms: u64,

    /// Retry budget for rendering failures (retries after the first attempt)
    #[serde(default = "default_render_retries")]
    pub render_retries: u32,

    /// Cap on links followed per page (no cap when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_links_per_page: Option<usize>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            nav_timeout_ms: default_nav_timeout_ms(),
            render_retries: default_render_retries(),
            max_links_per_page: None,
        }
    }
}

impl CrawlerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default navigation timeout (two minutes)
fn default_nav_timeout_ms() -> u64 {
    120_000
}

/// Default retry budget for rendering failures
fn default_render_retries() -> u32 {
    3
}
