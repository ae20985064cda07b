//! Type-safe builder for `CrawlConfig` using the typestate pattern.
//!
//! `storage_dir` and `start_url` must be set, in that order, before
//! `build()` becomes available; everything else has defaults.

use anyhow::{Result, anyhow};
use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::CrawlConfig;
use crate::scope;
use crate::utils::constants::{
    CHROME_USER_AGENT, DEFAULT_CHECKPOINT_INTERVAL, DEFAULT_FETCH_TIMEOUT_SECS,
    DEFAULT_IMAGE_TIMEOUT_SECS, DEFAULT_POLITENESS_DELAY_MS, DEFAULT_RENDER_TIMEOUT_SECS,
    DEFAULT_SETTLE_DELAY_MS,
};

// Type states for the builder
pub struct WithStorageDir;
pub struct WithStartUrl;

pub struct CrawlConfigBuilder<State = ()> {
    pub(crate) storage_dir: Option<PathBuf>,
    pub(crate) start_url: Option<String>,
    pub(crate) limit: Option<usize>,
    pub(crate) user_agent: String,
    pub(crate) fetch_timeout_secs: u64,
    pub(crate) image_timeout_secs: u64,
    pub(crate) render_timeout_secs: u64,
    pub(crate) settle_delay_ms: u64,
    pub(crate) politeness_delay_ms: u64,
    pub(crate) checkpoint_interval: usize,
    pub(crate) headless: bool,
    pub(crate) next_page_selector: Option<String>,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for CrawlConfigBuilder<()> {
    fn default() -> Self {
        Self {
            storage_dir: None,
            start_url: None,
            limit: None,
            user_agent: CHROME_USER_AGENT.to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            image_timeout_secs: DEFAULT_IMAGE_TIMEOUT_SECS,
            render_timeout_secs: DEFAULT_RENDER_TIMEOUT_SECS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            politeness_delay_ms: DEFAULT_POLITENESS_DELAY_MS,
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL,
            headless: true,
            next_page_selector: None,
            _phantom: PhantomData,
        }
    }
}

impl CrawlConfig {
    /// Create a builder for configuring a `CrawlConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> CrawlConfigBuilder<()> {
        CrawlConfigBuilder::default()
    }
}

impl<State> CrawlConfigBuilder<State> {
    fn transition<Next>(self) -> CrawlConfigBuilder<Next> {
        CrawlConfigBuilder {
            storage_dir: self.storage_dir,
            start_url: self.start_url,
            limit: self.limit,
            user_agent: self.user_agent,
            fetch_timeout_secs: self.fetch_timeout_secs,
            image_timeout_secs: self.image_timeout_secs,
            render_timeout_secs: self.render_timeout_secs,
            settle_delay_ms: self.settle_delay_ms,
            politeness_delay_ms: self.politeness_delay_ms,
            checkpoint_interval: self.checkpoint_interval,
            headless: self.headless,
            next_page_selector: self.next_page_selector,
            _phantom: PhantomData,
        }
    }
}

impl CrawlConfigBuilder<()> {
    pub fn storage_dir(mut self, dir: impl Into<PathBuf>) -> CrawlConfigBuilder<WithStorageDir> {
        self.storage_dir = Some(dir.into());
        self.transition()
    }
}

impl CrawlConfigBuilder<WithStorageDir> {
    pub fn start_url(mut self, url: impl Into<String>) -> CrawlConfigBuilder<WithStartUrl> {
        let url_string = url.into();

        // Normalize URL: add https:// if no scheme is present
        let normalized_url =
            if url_string.starts_with("http://") || url_string.starts_with("https://") {
                url_string
            } else {
                format!("https://{url_string}")
            };

        self.start_url = Some(normalized_url);
        self.transition()
    }
}

// Build method only available when both required fields are set
impl CrawlConfigBuilder<WithStartUrl> {
    pub fn build(self) -> Result<CrawlConfig> {
        let storage_dir = self
            .storage_dir
            .ok_or_else(|| anyhow!("storage_dir is required"))?;
        let start_url = self
            .start_url
            .ok_or_else(|| anyhow!("start_url is required"))?;

        let base_domain = scope::host_of(&start_url)
            .ok_or_else(|| anyhow!("start_url `{start_url}` has no valid host"))?;

        if self.checkpoint_interval == 0 {
            return Err(anyhow!("checkpoint_interval must be at least 1"));
        }

        Ok(CrawlConfig {
            storage_dir,
            start_url,
            base_domain,
            limit: self.limit,
            user_agent: self.user_agent,
            fetch_timeout_secs: self.fetch_timeout_secs,
            image_timeout_secs: self.image_timeout_secs,
            render_timeout_secs: self.render_timeout_secs,
            settle_delay_ms: self.settle_delay_ms,
            politeness_delay_ms: self.politeness_delay_ms,
            checkpoint_interval: self.checkpoint_interval,
            headless: self.headless,
            next_page_selector: self.next_page_selector,
        })
    }
}

// Optional setters, available in any state
impl<State> CrawlConfigBuilder<State> {
    /// Maximum number of pages to crawl; unbounded when unset.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Identifying header sent on static fetches and used by the browser.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn image_timeout_secs(mut self, secs: u64) -> Self {
        self.image_timeout_secs = secs;
        self
    }

    /// Bound on the rendered readiness wait (a `body` element in the DOM).
    #[must_use]
    pub fn render_timeout_secs(mut self, secs: u64) -> Self {
        self.render_timeout_secs = secs;
        self
    }

    /// Fixed delay applied after readiness before reading rendered markup.
    #[must_use]
    pub fn settle_delay_ms(mut self, ms: u64) -> Self {
        self.settle_delay_ms = ms;
        self
    }

    /// Delay between crawl iterations.
    #[must_use]
    pub fn politeness_delay_ms(mut self, ms: u64) -> Self {
        self.politeness_delay_ms = ms;
        self
    }

    /// Checkpoint the aggregate dataset every `pages` pages.
    #[must_use]
    pub fn checkpoint_interval(mut self, pages: usize) -> Self {
        self.checkpoint_interval = pages;
        self
    }

    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Restrict the frontier to the first in-scope match of this CSS
    /// selector per page (pagination crawling).
    #[must_use]
    pub fn next_page_selector(mut self, selector: impl Into<String>) -> Self {
        self.next_page_selector = Some(selector.into());
        self
    }
}
