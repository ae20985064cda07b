//! Shared configuration constants for siteharvest
//!
//! This module contains default values used throughout the codebase to
//! ensure consistency and avoid magic numbers.

/// Chrome user agent string sent on static fetches and passed to the
/// headless browser, so both fetch modes identify identically.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";

/// Default timeout for the static page GET: 30 seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Default timeout for a single image download: 10 seconds
///
/// Images are best-effort; a slow image should not stall the crawl the
/// way a slow page may.
pub const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 10;

/// Default readiness wait for the rendered fetch: 10 seconds
///
/// The rendered fetch polls for a `body` element; if none appears within
/// this bound the render is treated as timed out for that URL.
pub const DEFAULT_RENDER_TIMEOUT_SECS: u64 = 10;

/// Fixed settle delay after the readiness condition is met: 3 seconds
///
/// Gives late-running scripts a chance to populate dynamic content before
/// the rendered markup is read back.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 3_000;

/// Politeness delay between crawl iterations: 2 seconds
pub const DEFAULT_POLITENESS_DELAY_MS: u64 = 2_000;

/// Checkpoint the aggregate dataset every N pages
pub const DEFAULT_CHECKPOINT_INTERVAL: usize = 10;

/// Subdirectory of the storage dir holding content-addressed images
pub const IMAGES_SUBDIR: &str = "scraped-images";

/// Subdirectory of the storage dir holding JSON/CSV outputs
pub const DATA_SUBDIR: &str = "data";
