//! Dual-mode page acquisition.
//!
//! Every crawled URL is fetched twice: once over plain HTTP and once through
//! a rendered headless-browser navigation. The [`PageFetcher`] trait is the
//! seam the orchestrator crawls through, so tests can drive the loop with
//! canned documents instead of a live browser.

pub mod chromium;

pub use chromium::ChromiumFetcher;

use crate::error::ScrapeError;

/// Both views of one page's markup.
#[derive(Debug, Clone)]
pub struct DualFetch {
    pub static_html: String,
    pub rendered_html: String,
}

/// Acquires pages for the crawl loop.
///
/// `fetch_dual` attempts both modes even when the first fails, then reports
/// the first error; the orchestrator abandons the URL on any error except
/// [`ScrapeError::Browser`], which aborts the run. `close` must release any
/// held session and is called on every exit path.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    async fn fetch_dual(&mut self, url: &str) -> Result<DualFetch, ScrapeError>;

    async fn close(self);
}
