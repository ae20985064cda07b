//! Output emitters and workspace bootstrap.
//!
//! Directory creation is an explicit step invoked by the run entry point,
//! never a side effect of loading a module.

pub mod csv_saver;
pub mod json_saver;

pub use csv_saver::save_links_csv;
pub use json_saver::save_json;

use tracing::info;

use crate::config::CrawlConfig;
use crate::error::{ScrapeError, ScrapeResult};
use crate::merge::AggregateDataset;

/// Creates the run's directory layout (storage root, image store, data dir).
/// Idempotent; call once before crawling.
pub async fn ensure_workspace(config: &CrawlConfig) -> ScrapeResult<()> {
    for dir in [
        config.storage_dir().clone(),
        config.images_dir(),
        config.data_dir(),
    ] {
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| ScrapeError::persistence(&dir, e))?;
    }
    Ok(())
}

/// Final persistence pass: collapses the aggregate once more, then writes
/// the full dataset as JSON and the flattened link table as CSV.
///
/// Unlike checkpoint writes, a failure here is surfaced to the caller.
pub async fn persist_final(
    config: &CrawlConfig,
    dataset: &mut AggregateDataset,
) -> ScrapeResult<()> {
    dataset.collapse();

    let json_path = config.final_results_path();
    save_json(dataset, &json_path).await?;

    let csv_path = config.links_csv_path();
    save_links_csv(&dataset.links, &csv_path).await?;

    info!(
        json = %json_path.display(),
        csv = %csv_path.display(),
        "final results written"
    );
    Ok(())
}
