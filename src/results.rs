use serde::{Deserialize, Serialize};

/// The outcome of visiting a single page during a crawl
///
/// Exactly one result is produced per visited target. Construct through
/// [`PageResult::visited`] or [`PageResult::failed`] so that `link_count`
/// always matches `links` and failed results carry no links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    /// URL of the page that was visited
    pub page_url: String,

    /// Absolute links discovered on the page, deduplicated, in document order
    pub links: Vec<String>,

    /// Number of links discovered (always `links.len()`)
    pub link_count: usize,

    /// Distance from the seed URL (1 = seed level, 0 = rejected seed)
    pub depth: u32,

    /// Failure message if the page could not be fetched or rendered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Ordered sequence of page results, pre-order per seed, seeds in input order
pub type CrawlReport = Vec<PageResult>;

impl PageResult {
    /// Result for a successfully fetched page
    pub fn visited(page_url: impl Into<String>, links: Vec<String>, depth: u32) -> Self {
        let link_count = links.len();
        Self {
            page_url: page_url.into(),
            links,
            link_count,
            depth,
            error: None,
        }
    }

    /// Result for a page whose fetch or render failed
    pub fn failed(page_url: impl Into<String>, depth: u32, error: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            links: Vec::new(),
            link_count: 0,
            depth,
            error: Some(error.into()),
        }
    }
}
