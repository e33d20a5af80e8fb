// Re-export modules
pub mod config;
pub mod crawlers;
pub mod error;
pub mod fetchers;
pub mod parsers;
pub mod report;
pub mod results;

// Re-export commonly used types for convenience
pub use error::CrawlError;
pub use results::{CrawlReport, PageResult};

use config::CrawlerConfig;
use crawlers::Orchestrator;
use fetchers::{RenderedFetcher, StaticFetcher};

/// Main builder for a bounded-depth link survey
///
/// Seed URLs are crawled sequentially to `max_depth` hops: the seed level
/// with a plain HTTP fetch, everything deeper through a rendering
/// browser reached over WebDriver.
pub struct Survey {
    seeds: Vec<String>,
    max_depth: u32,
    config: CrawlerConfig,
}

impl Survey {
    /// Create a new survey over the given seed URLs
    pub fn new(seeds: Vec<String>, max_depth: u32) -> Self {
        Self {
            seeds,
            max_depth,
            config: CrawlerConfig::default(),
        }
    }

    /// Replace the whole crawler configuration
    pub fn with_config(mut self, config: CrawlerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the WebDriver endpoint used for rendered fetching
    pub fn with_webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.config.webdriver_url = url.into();
        self
    }

    /// Set the navigation timeout for rendered pages
    pub fn with_navigation_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.nav_timeout_ms = timeout_ms;
        self
    }

    /// Set the retry budget for rendering failures
    pub fn with_render_retries(mut self, retries: u32) -> Self {
        self.config.render_retries = retries;
        self
    }

    /// Cap the number of links followed per page
    pub fn with_link_cap(mut self, cap: usize) -> Self {
        self.config.max_links_per_page = Some(cap);
        self
    }

    /// Run the survey and return the aggregated report
    pub async fn run(self) -> CrawlReport {
        let mut config = self.config;

        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                config.webdriver_url = webdriver_url;
            }
        }

        let shallow = StaticFetcher::new();
        let deep = RenderedFetcher::new(&config);
        let orchestrator = Orchestrator::new(
            self.max_depth,
            &shallow,
            &deep,
            config.max_links_per_page,
        );

        report::collect(&self.seeds, &orchestrator).await
    }
}
