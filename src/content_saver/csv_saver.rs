use std::path::Path;

use crate::error::{ScrapeError, ScrapeResult};
use crate::page_extractor::schema::LinkRef;

/// Writes the flattened link table: one row per `LinkRef`, columns
/// `href`,`text` (headers derived from the struct fields).
pub async fn save_links_csv(links: &[LinkRef], path: &Path) -> ScrapeResult<()> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for link in links {
        writer
            .serialize(link)
            .map_err(|e| ScrapeError::persistence(path, e))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ScrapeError::persistence(path, e))?;
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| ScrapeError::persistence(path, e))?;
    Ok(())
}
