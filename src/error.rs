use thiserror::Error;

/// Failure while rendering a page through the WebDriver
#[derive(Debug, Error)]
pub enum RenderError {
    /// Could not establish a WebDriver session
    #[error("could not start webdriver session: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    /// Navigation or DOM access failed after the session was established
    #[error("navigation failed: {0}")]
    Navigation(#[from] fantoccini::error::CmdError),

    /// The page did not reach network idle within the navigation timeout
    #[error("navigation timed out after {0}ms")]
    Timeout(u64),
}

/// Failure while crawling a single target
///
/// These are caught at the orchestrator boundary and recorded as an
/// error-carrying [`crate::PageResult`]; they never abort sibling
/// branches or other seeds.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// Lightweight HTTP fetch failed (network error or non-success status)
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Browser rendering failed after the retry budget was exhausted
    #[error("rendering failed for {url} after {attempts} attempts: {source}")]
    Render {
        url: String,
        attempts: u32,
        #[source]
        source: RenderError,
    },

    /// Seed URL could not be parsed
    #[error("invalid url {url:?}: {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Seed URL parsed but is not an http(s) URL
    #[error("unsupported scheme {scheme:?} in {url:?}")]
    UnsupportedScheme { url: String, scheme: String },
}
