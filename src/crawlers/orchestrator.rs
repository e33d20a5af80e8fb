use crate::fetchers::LinkFetcher;
use crate::results::PageResult;

/// A scheduled fetch: a URL at a traversal depth
///
/// Depth 1 is the seed level; deeper targets are created from the links
/// of a parent page.
#[derive(Debug, Clone)]
pub struct CrawlTarget {
    pub url: String,
    pub depth: u32,
}

impl CrawlTarget {
    fn new(url: impl Into<String>, depth: u32) -> Self {
        Self {
            url: url.into(),
            depth,
        }
    }
}

/// Depth-bounded traversal over the link graph of a single seed
///
/// Strategy selection is keyed on depth: the seed level uses the
/// lightweight static fetcher, everything below it the rendering fetcher.
/// Failures at one target are contained in that target's result and never
/// abort sibling branches.
pub struct Orchestrator<'a> {
    max_depth: u32,
    shallow: &'a dyn LinkFetcher,
    deep: &'a dyn LinkFetcher,
    max_links_per_page: Option<usize>,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        max_depth: u32,
        shallow: &'a dyn LinkFetcher,
        deep: &'a dyn LinkFetcher,
        max_links_per_page: Option<usize>,
    ) -> Self {
        Self {
            max_depth,
            shallow,
            deep,
            max_links_per_page,
        }
    }

    fn fetcher_for(&self, depth: u32) -> &dyn LinkFetcher {
        if depth == 1 { self.shallow } else { self.deep }
    }

    /// Crawls a seed URL and returns one result per visited target
    ///
    /// Results are pre-order, depth-first, left-to-right over extraction
    /// order: a page's own result precedes those of its children. An
    /// explicit work-list keeps stack depth independent of the traversal;
    /// children are pushed in reverse so they pop in extraction order.
    pub async fn crawl(&self, seed: &str) -> Vec<PageResult> {
        let mut results = Vec::new();
        if self.max_depth == 0 {
            return results;
        }

        let mut pending = vec![CrawlTarget::new(seed, 1)];

        while let Some(target) = pending.pop() {
            ::log::info!("Crawling {} at depth {}", target.url, target.depth);

            match self.fetcher_for(target.depth).fetch_links(&target.url).await {
                Ok(mut links) => {
                    if let Some(cap) = self.max_links_per_page {
                        if links.len() > cap {
                            ::log::debug!(
                                "Capping {} links to {} for {}",
                                links.len(),
                                cap,
                                target.url
                            );
                            links.truncate(cap);
                        }
                    }

                    if target.depth < self.max_depth {
                        for link in links.iter().rev() {
                            pending.push(CrawlTarget::new(link, target.depth + 1));
                        }
                    }

                    results.push(PageResult::visited(&target.url, links, target.depth));
                }
                Err(e) => {
                    ::log::error!(
                        "Error during crawl of {} at depth {}: {}",
                        target.url,
                        target.depth,
                        e
                    );
                    results.push(PageResult::failed(&target.url, target.depth, e.to_string()));
                }
            }
        }

        results
    }
}
