use crate::error::CrawlError;
use crate::fetchers::LinkFetcher;
use crate::parsers;
use async_trait::async_trait;
use reqwest::Client;

/// Lightweight fetcher: a single HTTP GET plus static HTML parsing
///
/// Used at the seed level to avoid the cost of full rendering. Non-2xx
/// responses and network failures are errors; there are no retries at
/// this layer.
pub struct StaticFetcher {
    client: Client,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for StaticFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkFetcher for StaticFetcher {
    async fn fetch_links(&self, url: &str) -> Result<Vec<String>, CrawlError> {
        let fetch_err = |source| CrawlError::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(fetch_err)?;
        let body = response.text().await.map_err(fetch_err)?;

        ::log::debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(parsers::html::extract_links(&body))
    }
}
