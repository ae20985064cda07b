use serde::Serialize;
use std::path::Path;

use crate::error::{ScrapeError, ScrapeResult};

/// Serializes `data` as pretty-printed JSON and writes it to `path`.
pub async fn save_json<T: Serialize>(data: &T, path: &Path) -> ScrapeResult<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| ScrapeError::persistence(path, e))?;
    tokio::fs::write(path, json)
        .await
        .map_err(|e| ScrapeError::persistence(path, e))?;
    Ok(())
}
