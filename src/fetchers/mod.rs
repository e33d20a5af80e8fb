pub mod rendered;
pub mod static_http;

pub use rendered::RenderedFetcher;
pub use static_http::StaticFetcher;

use crate::error::CrawlError;
use async_trait::async_trait;

/// A strategy for fetching a page and extracting its outbound links
///
/// Two strategies exist: [`StaticFetcher`] (plain HTTP GET plus HTML
/// parsing, used at the seed level) and [`RenderedFetcher`] (full browser
/// rendering through a WebDriver, used below the seed level). The
/// orchestrator selects one per target by depth, so adding a strategy
/// does not touch the traversal logic.
#[async_trait]
pub trait LinkFetcher: Send + Sync {
    /// Fetch the page at `url` and return its deduplicated absolute links
    async fn fetch_links(&self, url: &str) -> Result<Vec<String>, CrawlError>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::error::RenderError;
    use std::collections::{HashMap, HashSet};

    /// In-memory fetcher with canned pages and failures, for traversal tests
    pub(crate) struct ScriptedFetcher {
        pages: HashMap<String, Vec<String>>,
        failures: HashSet<String>,
    }

    impl ScriptedFetcher {
        pub(crate) fn new() -> Self {
            Self {
                pages: HashMap::new(),
                failures: HashSet::new(),
            }
        }

        pub(crate) fn page(mut self, url: &str, links: &[&str]) -> Self {
            self.pages
                .insert(url.to_string(), links.iter().map(|s| s.to_string()).collect());
            self
        }

        pub(crate) fn failing(mut self, url: &str) -> Self {
            self.failures.insert(url.to_string());
            self
        }
    }

    #[async_trait]
    impl LinkFetcher for ScriptedFetcher {
        async fn fetch_links(&self, url: &str) -> Result<Vec<String>, CrawlError> {
            if self.failures.contains(url) {
                return Err(CrawlError::Render {
                    url: url.to_string(),
                    attempts: 4,
                    source: RenderError::Timeout(120_000),
                });
            }
            Ok(self.pages.get(url).cloned().unwrap_or_default())
        }
    }
}
