//! Error taxonomy for the crawl pipeline.
//!
//! Each variant maps to one recovery policy: extraction and materialization
//! failures are always recovered locally, fetch and render failures abandon
//! the affected URL, checkpoint persistence failures are logged and ignored,
//! and browser-session failures abort the run (after resource release).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network, transport, or non-2xx status failure for either fetch mode.
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The rendered document never reached the readiness condition.
    #[error("render of {url} not ready within {waited_secs}s")]
    RenderTimeout { url: String, waited_secs: u64 },

    /// A single content category failed to parse.
    #[error("extraction failed: {0}")]
    Extraction(String),

    /// An image could not be downloaded or stored.
    #[error("failed to materialize image {url}: {reason}")]
    Materialization { url: String, reason: String },

    /// A checkpoint or final output could not be written.
    #[error("failed to persist {}: {reason}", path.display())]
    Persistence { path: PathBuf, reason: String },

    /// The browser session became unusable; forces the crawl into ABORTED.
    #[error("browser session error: {0}")]
    Browser(String),
}

impl ScrapeError {
    pub fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn materialization(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Materialization {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn persistence(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Persistence {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Convenience alias for Result with `ScrapeError`
pub type ScrapeResult<T> = Result<T, ScrapeError>;
