//! Configuration module for the crawl.
//!
//! This module provides the `CrawlConfig` struct and its type-safe builder
//! with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::{CrawlConfigBuilder, WithStartUrl, WithStorageDir};
pub use types::CrawlConfig;
