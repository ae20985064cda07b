//! Getter methods and derived output paths for `CrawlConfig`.

use std::path::PathBuf;

use super::types::CrawlConfig;
use crate::utils::constants::{DATA_SUBDIR, IMAGES_SUBDIR};

impl CrawlConfig {
    #[must_use]
    pub fn storage_dir(&self) -> &PathBuf {
        &self.storage_dir
    }

    #[must_use]
    pub fn start_url(&self) -> &str {
        &self.start_url
    }

    #[must_use]
    pub fn base_domain(&self) -> &str {
        &self.base_domain
    }

    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn fetch_timeout_secs(&self) -> u64 {
        self.fetch_timeout_secs
    }

    #[must_use]
    pub fn image_timeout_secs(&self) -> u64 {
        self.image_timeout_secs
    }

    #[must_use]
    pub fn render_timeout_secs(&self) -> u64 {
        self.render_timeout_secs
    }

    #[must_use]
    pub fn settle_delay_ms(&self) -> u64 {
        self.settle_delay_ms
    }

    #[must_use]
    pub fn politeness_delay_ms(&self) -> u64 {
        self.politeness_delay_ms
    }

    #[must_use]
    pub fn checkpoint_interval(&self) -> usize {
        self.checkpoint_interval
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn next_page_selector(&self) -> Option<&str> {
        self.next_page_selector.as_deref()
    }

    /// Directory for content-addressed image blobs.
    #[must_use]
    pub fn images_dir(&self) -> PathBuf {
        self.storage_dir.join(IMAGES_SUBDIR)
    }

    /// Directory for JSON/CSV outputs and checkpoints.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.storage_dir.join(DATA_SUBDIR)
    }

    #[must_use]
    pub fn final_results_path(&self) -> PathBuf {
        self.data_dir().join("final_results.json")
    }

    #[must_use]
    pub fn links_csv_path(&self) -> PathBuf {
        self.data_dir().join("links.csv")
    }

    /// Checkpoint snapshot path, tagged with the page count at write time.
    #[must_use]
    pub fn checkpoint_path(&self, page_count: usize) -> PathBuf {
        self.data_dir()
            .join(format!("intermediate_results_{page_count}.json"))
    }
}
