use crate::config::CrawlerConfig;
use crate::error::{CrawlError, RenderError};
use crate::fetchers::LinkFetcher;
use crate::parsers;
use async_trait::async_trait;
use fantoccini::{Client, ClientBuilder};
use std::time::Duration;
use tokio::time::timeout;

/// How long the resource count must stay unchanged to call the network idle
const IDLE_SETTLE: Duration = Duration::from_millis(500);

/// Interval between idle-condition polls
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Rendering fetcher: navigates a headless browser and reads the rendered DOM
///
/// Each invocation, and each retry within it, runs in a fresh WebDriver
/// session that is closed on every exit path. Sessions are never shared
/// across pages or retries; isolation is traded for performance.
pub struct RenderedFetcher {
    webdriver_url: String,
    nav_timeout: Duration,
    retries: u32,
}

impl RenderedFetcher {
    pub fn new(config: &CrawlerConfig) -> Self {
        Self {
            webdriver_url: config.webdriver_url.clone(),
            nav_timeout: Duration::from_millis(config.nav_timeout_ms),
            retries: config.render_retries,
        }
    }

    /// One full render attempt in its own session
    ///
    /// The session is closed before the outcome is inspected, so it is
    /// released whether navigation succeeded, failed, or timed out.
    async fn render_once(&self, url: &str) -> Result<Vec<String>, RenderError> {
        let client = ClientBuilder::native().connect(&self.webdriver_url).await?;

        let outcome = timeout(self.nav_timeout, navigate_and_extract(&client, url)).await;

        if let Err(e) = client.close().await {
            ::log::warn!("Failed to close webdriver session for {}: {}", url, e);
        }

        match outcome {
            Ok(Ok(links)) => Ok(links),
            Ok(Err(e)) => Err(RenderError::Navigation(e)),
            Err(_) => Err(RenderError::Timeout(self.nav_timeout.as_millis() as u64)),
        }
    }
}

#[async_trait]
impl LinkFetcher for RenderedFetcher {
    async fn fetch_links(&self, url: &str) -> Result<Vec<String>, CrawlError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.render_once(url).await {
                Ok(links) => return Ok(links),
                Err(e) if attempt <= self.retries => {
                    ::log::warn!(
                        "Error rendering {}: {}. Retrying ({} attempts left)",
                        url,
                        e,
                        self.retries - attempt + 1
                    );
                }
                Err(e) => {
                    return Err(CrawlError::Render {
                        url: url.to_string(),
                        attempts: attempt,
                        source: e,
                    });
                }
            }
        }
    }
}

/// Navigates to the URL, waits for network idle, and extracts anchor links
async fn navigate_and_extract(
    client: &Client,
    url: &str,
) -> Result<Vec<String>, fantoccini::error::CmdError> {
    client.goto(url).await?;
    wait_for_network_idle(client).await?;
    let html = client.source().await?;
    Ok(parsers::html::extract_links(&html))
}

/// Waits until the page looks quiescent
///
/// Heuristic: the document must report `readyState == "complete"` and the
/// number of loaded resource entries must hold steady for a settling
/// window. The caller bounds this loop with the navigation timeout.
async fn wait_for_network_idle(client: &Client) -> Result<(), fantoccini::error::CmdError> {
    let mut last_count: Option<u64> = None;
    let mut settled = Duration::ZERO;

    loop {
        let ready = client
            .execute("return document.readyState;", vec![])
            .await?;
        let complete = ready.as_str() == Some("complete");

        let count = client
            .execute(
                "return window.performance.getEntriesByType('resource').length;",
                vec![],
            )
            .await?
            .as_u64();

        if complete && count == last_count {
            settled += IDLE_POLL;
            if settled >= IDLE_SETTLE {
                return Ok(());
            }
        } else {
            settled = Duration::ZERO;
            last_count = count;
        }

        tokio::time::sleep(IDLE_POLL).await;
    }
}
