use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "link-survey")]
#[command(about = "Bounded-depth link discovery with static and rendered fetching")]
#[command(version)]
pub struct Args {
    /// Seed URLs to survey
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Maximum crawl depth in hops from each seed
    #[arg(short, long, default_value_t = 1)]
    pub depth: u32,

    /// WebDriver endpoint for rendered fetching
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Navigation timeout in milliseconds for rendered pages
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Retry budget for rendering failures
    #[arg(long)]
    pub retries: Option<u32>,

    /// Cap on links followed per page
    #[arg(long)]
    pub max_links: Option<usize>,

    /// Load crawler configuration from a JSON file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
