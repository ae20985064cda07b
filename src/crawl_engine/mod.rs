//! Crawl engine: frontier management and the orchestration loop.

// Sub-modules
pub mod crawl_types;
pub mod frontier;
pub mod orchestrator;

// Re-exports for public API
pub use crawl_types::{CrawlOutcome, CrawlState};
pub use frontier::Frontier;
pub use orchestrator::run_crawl;
