use clap::Parser;
use link_survey::Survey;
use link_survey::config::CrawlerConfig;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!(
        "Starting link survey for {} URLs with depth {}",
        args.urls.len(),
        args.depth
    );

    if args.depth >= 2 {
        println!("Note: depths beyond 1 require a WebDriver server (e.g. ChromeDriver).");
        println!(
            "Set WEBDRIVER_URL or --webdriver-url if not using the default http://localhost:4444"
        );
    }

    // Start from the config file when given, then apply CLI overrides
    let mut config = match &args.config {
        Some(path) => match CrawlerConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load config from {}: {}", path.display(), e);
                return;
            }
        },
        None => CrawlerConfig::default(),
    };

    if let Some(url) = args.webdriver_url {
        config.webdriver_url = url;
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config.nav_timeout_ms = timeout_ms;
    }
    if let Some(retries) = args.retries {
        config.render_retries = retries;
    }
    if let Some(cap) = args.max_links {
        config.max_links_per_page = Some(cap);
    }

    let start_time = std::time::Instant::now();

    let report = Survey::new(args.urls, args.depth)
        .with_config(config)
        .run()
        .await;

    ::log::info!(
        "Survey complete - {} results in {:.2} seconds",
        report.len(),
        start_time.elapsed().as_secs_f64()
    );

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => ::log::error!("Failed to serialize report: {}", e),
    }
}
