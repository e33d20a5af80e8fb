pub mod orchestrator;

pub use orchestrator::{CrawlTarget, Orchestrator};
