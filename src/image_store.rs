//! Content-addressed image materialization.
//!
//! Images are stored under `<xxh3-of-absolute-url><ext>`, so a given absolute
//! URL is downloaded at most once for the lifetime of the output directory,
//! across runs included. Existence of the target path is the dedup check.

use futures::StreamExt;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use url::Url;
use xxhash_rust::xxh3::xxh3_64;

use crate::error::{ScrapeError, ScrapeResult};
use crate::scope;

pub struct ImageStore {
    client: Client,
    dir: PathBuf,
    timeout: Duration,
}

impl ImageStore {
    #[must_use]
    pub fn new(client: Client, dir: PathBuf, timeout: Duration) -> Self {
        Self {
            client,
            dir,
            timeout,
        }
    }

    /// Deterministic on-disk path for an absolute image URL.
    #[must_use]
    pub fn target_path(&self, absolute_url: &str) -> PathBuf {
        let hash = xxh3_64(absolute_url.as_bytes());
        self.dir
            .join(format!("{hash:016x}{}", extension_of(absolute_url)))
    }

    /// Resolves `image_url` against `page_url`, downloads it if it is not
    /// already stored, and returns the local path.
    ///
    /// Returns `None` on any transport error or non-2xx status; callers
    /// treat that as "image unavailable", never as a fatal error.
    pub async fn materialize(&self, image_url: &str, page_url: &str) -> Option<String> {
        let absolute = scope::resolve_absolute(image_url, page_url);
        let path = self.target_path(&absolute);
        if path.exists() {
            debug!(url = %absolute, path = %path.display(), "image already stored");
            return Some(path.to_string_lossy().into_owned());
        }
        match self.download(&absolute, &path).await {
            Ok(()) => {
                debug!(url = %absolute, path = %path.display(), "image saved");
                Some(path.to_string_lossy().into_owned())
            }
            Err(e) => {
                warn!("{e}");
                None
            }
        }
    }

    /// Streams the body into a scratch file and renames it into place, so
    /// the content-addressed path only ever holds complete downloads. A
    /// mid-stream failure removes the scratch file and leaves the target
    /// path absent, keeping it a valid dedup check for later calls.
    async fn download(&self, url: &str, path: &Path) -> ScrapeResult<()> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ScrapeError::materialization(url, e))?
            .error_for_status()
            .map_err(|e| ScrapeError::materialization(url, e))?;

        let mut scratch = path.as_os_str().to_owned();
        scratch.push(".part");
        let scratch = PathBuf::from(scratch);

        if let Err(e) = write_body(response, &scratch).await {
            let _ = tokio::fs::remove_file(&scratch).await;
            return Err(ScrapeError::materialization(url, format!("{e:#}")));
        }
        tokio::fs::rename(&scratch, path)
            .await
            .map_err(|e| ScrapeError::materialization(url, e))?;
        Ok(())
    }
}

async fn write_body(response: reqwest::Response, path: &Path) -> anyhow::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        file.write_all(&chunk?).await?;
    }
    file.flush().await?;
    Ok(())
}

/// Extension of the filename portion of the URL, defaulting to `.jpg`.
fn extension_of(url: &str) -> String {
    let path = Url::parse(url)
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| url.to_string());
    let name = path.rsplit('/').next().unwrap_or("");
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => format!(".{ext}"),
        _ => ".jpg".to_string(),
    }
}
