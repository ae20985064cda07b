//! siteharvest: dual-mode website scraper.
//!
//! Crawls a site from a seed URL, fetching every page both statically and
//! through a headless browser, merges the two extractions, deduplicates
//! site-wide, and persists a consolidated dataset with periodic checkpoints.

pub mod browser_setup;
pub mod config;
pub mod content_saver;
pub mod crawl_engine;
pub mod error;
pub mod fetcher;
pub mod image_store;
pub mod merge;
pub mod page_extractor;
pub mod scope;
pub mod utils;

pub use config::CrawlConfig;
pub use crawl_engine::{CrawlOutcome, CrawlState, Frontier, run_crawl};
pub use error::{ScrapeError, ScrapeResult};
pub use fetcher::{ChromiumFetcher, DualFetch, PageFetcher};
pub use image_store::ImageStore;
pub use merge::{AggregateDataset, merge_pages};
pub use page_extractor::schema::{ImageKind, ImageRef, LinkRef, PageRecord};

use std::time::Duration;

/// Crawls a site with the production fetcher and persists the results
/// under the configured storage directory.
pub async fn crawl(config: CrawlConfig) -> ScrapeResult<CrawlOutcome> {
    content_saver::ensure_workspace(&config).await?;
    let fetcher = ChromiumFetcher::launch(&config).await?;
    let store = ImageStore::new(
        fetcher.http_client(),
        config.images_dir(),
        Duration::from_secs(config.image_timeout_secs()),
    );
    crawl_with_fetcher(&config, fetcher, &store).await
}

/// Crawl entry point generic over the fetcher, used by [`crawl`] and by
/// tests that drive the loop with a stub.
///
/// The fetcher is released on every path, including abort; a persistence
/// failure on the final save is surfaced only after that release.
pub async fn crawl_with_fetcher<F: PageFetcher>(
    config: &CrawlConfig,
    mut fetcher: F,
    store: &ImageStore,
) -> ScrapeResult<CrawlOutcome> {
    let mut outcome = run_crawl(config, &mut fetcher, store).await;
    fetcher.close().await;

    content_saver::persist_final(config, &mut outcome.dataset).await?;
    Ok(outcome)
}
