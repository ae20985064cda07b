//! Core configuration types for the crawl.
//!
//! This module contains the main `CrawlConfig` struct; construction goes
//! through the type-safe builder in [`super::builder`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for a crawl run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Root directory for the run's outputs (images, data, checkpoints).
    pub(crate) storage_dir: PathBuf,
    /// Seed URL. Normalized to `https://` in the builder when schemeless.
    pub(crate) start_url: String,
    /// Host of the seed URL; derived at build time. Only URLs on exactly
    /// this host are in scope.
    pub(crate) base_domain: String,
    /// Maximum pages to crawl; `None` = unbounded.
    pub(crate) limit: Option<usize>,
    pub(crate) user_agent: String,
    pub(crate) fetch_timeout_secs: u64,
    pub(crate) image_timeout_secs: u64,
    pub(crate) render_timeout_secs: u64,
    pub(crate) settle_delay_ms: u64,
    pub(crate) politeness_delay_ms: u64,
    /// Write an aggregate snapshot every N crawled pages.
    pub(crate) checkpoint_interval: usize,
    pub(crate) headless: bool,
    /// When set, the frontier follows only the first in-scope match of this
    /// CSS selector per page (pagination crawling) instead of every
    /// in-scope link.
    pub(crate) next_page_selector: Option<String>,
}
