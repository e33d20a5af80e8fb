use crate::crawlers::Orchestrator;
use crate::error::CrawlError;
use crate::results::{CrawlReport, PageResult};
use url::Url;

/// Runs the orchestrator over every seed and concatenates the results
///
/// Seeds are processed sequentially in input order. A seed that fails
/// validation before any fetch is recorded as a single synthetic
/// depth-0 error result instead of aborting the batch.
pub async fn collect(seeds: &[String], orchestrator: &Orchestrator<'_>) -> CrawlReport {
    ::log::info!("Starting link survey for {} URLs", seeds.len());

    let mut report = Vec::new();
    for seed in seeds {
        match validate_seed(seed) {
            Ok(()) => report.extend(orchestrator.crawl(seed).await),
            Err(e) => {
                ::log::error!("Error processing URL {}: {}", seed, e);
                report.push(PageResult::failed(seed, 0, e.to_string()));
            }
        }
    }

    ::log::info!("Link survey completed with {} results", report.len());
    report
}

/// Rejects seeds that cannot be crawled before any fetch is attempted
fn validate_seed(seed: &str) -> Result<(), CrawlError> {
    let parsed = Url::parse(seed).map_err(|source| CrawlError::MalformedUrl {
        url: seed.to_string(),
        source,
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(CrawlError::UnsupportedScheme {
            url: seed.to_string(),
            scheme: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetchers::testing::ScriptedFetcher;

    #[tokio::test]
    async fn malformed_seed_becomes_a_synthetic_depth_zero_entry() {
        let shallow = ScriptedFetcher::new().page("https://ok.com", &["https://a.com"]);
        let deep = ScriptedFetcher::new();
        let orchestrator = Orchestrator::new(1, &shallow, &deep, None);

        let seeds = vec!["not-a-url".to_string(), "https://ok.com".to_string()];
        let report = collect(&seeds, &orchestrator).await;

        assert_eq!(report.len(), 2);

        let rejected = &report[0];
        assert_eq!(rejected.page_url, "not-a-url");
        assert_eq!(rejected.depth, 0);
        assert_eq!(rejected.link_count, 0);
        assert!(rejected.links.is_empty());
        assert!(rejected.error.is_some());

        let ok = &report[1];
        assert_eq!(ok.page_url, "https://ok.com");
        assert_eq!(ok.links, vec!["https://a.com"]);
        assert!(ok.error.is_none());
    }

    #[tokio::test]
    async fn non_http_scheme_is_rejected() {
        let shallow = ScriptedFetcher::new();
        let deep = ScriptedFetcher::new();
        let orchestrator = Orchestrator::new(1, &shallow, &deep, None);

        let seeds = vec!["ftp://example.com/file".to_string()];
        let report = collect(&seeds, &orchestrator).await;

        assert_eq!(report.len(), 1);
        assert_eq!(report[0].depth, 0);
        assert!(report[0].error.as_deref().unwrap().contains("ftp"));
    }

    #[tokio::test]
    async fn seeds_appear_in_input_order() {
        let shallow = ScriptedFetcher::new()
            .page("https://one.com", &[])
            .page("https://two.com", &[]);
        let deep = ScriptedFetcher::new();
        let orchestrator = Orchestrator::new(1, &shallow, &deep, None);

        let seeds = vec!["https://one.com".to_string(), "https://two.com".to_string()];
        let report = collect(&seeds, &orchestrator).await;

        let visited: Vec<&str> = report.iter().map(|r| r.page_url.as_str()).collect();
        assert_eq!(visited, vec!["https://one.com", "https://two.com"]);
    }

    #[tokio::test]
    async fn deterministic_fetchers_give_identical_reports() {
        let shallow =
            ScriptedFetcher::new().page("https://seed.com", &["https://a.com", "https://b.com"]);
        let deep = ScriptedFetcher::new()
            .page("https://a.com", &["https://a1.com"])
            .failing("https://b.com");
        let orchestrator = Orchestrator::new(2, &shallow, &deep, None);

        let seeds = vec!["https://seed.com".to_string()];
        let first = collect(&seeds, &orchestrator).await;
        let second = collect(&seeds, &orchestrator).await;

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
