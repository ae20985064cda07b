//! Production fetcher: reqwest for the static view, chromiumoxide for the
//! rendered view. One reqwest client and one browser session serve the
//! entire crawl.

use chromiumoxide::browser::Browser;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::{DualFetch, PageFetcher};
use crate::browser_setup;
use crate::config::CrawlConfig;
use crate::error::ScrapeError;

/// Poll interval for the rendered readiness check.
const READINESS_POLL: Duration = Duration::from_millis(100);

pub struct ChromiumFetcher {
    client: reqwest::Client,
    browser: Browser,
    handler_task: JoinHandle<()>,
    user_data_dir: PathBuf,
    render_timeout: Duration,
    settle_delay: Duration,
}

impl ChromiumFetcher {
    /// Builds the HTTP client and launches the browser session.
    pub async fn launch(config: &CrawlConfig) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .timeout(Duration::from_secs(config.fetch_timeout_secs()))
            .build()
            .map_err(|e| ScrapeError::Browser(format!("failed to build HTTP client: {e}")))?;

        let (browser, handler_task, user_data_dir) =
            browser_setup::launch_browser(config.headless(), config.user_agent())
                .await
                .map_err(|e| ScrapeError::Browser(format!("{e:#}")))?;

        Ok(Self {
            client,
            browser,
            handler_task,
            user_data_dir,
            render_timeout: Duration::from_secs(config.render_timeout_secs()),
            settle_delay: Duration::from_millis(config.settle_delay_ms()),
        })
    }

    /// Clone of the shared HTTP client, for collaborators that download
    /// resources (the image store).
    #[must_use]
    pub fn http_client(&self) -> reqwest::Client {
        self.client.clone()
    }

    async fn fetch_static(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::fetch(url, e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::fetch(url, format!("status {status}")));
        }
        response
            .text()
            .await
            .map_err(|e| ScrapeError::fetch(url, e))
    }

    /// Navigates, waits for a `body` element up to the render timeout,
    /// applies the fixed settle delay, and reads back the rendered markup.
    async fn fetch_rendered(&self, url: &str) -> Result<String, ScrapeError> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| ScrapeError::Browser(format!("failed to open page: {e}")))?;

        let result = self.render_on(&page, url).await;
        if let Err(e) = page.close().await {
            debug!(url, error = %e, "failed to close rendered page");
        }
        result
    }

    async fn render_on(
        &self,
        page: &chromiumoxide::Page,
        url: &str,
    ) -> Result<String, ScrapeError> {
        page.goto(url)
            .await
            .map_err(|e| ScrapeError::fetch(url, format!("navigation failed: {e}")))?;

        // readiness: a body element present in the DOM
        let start = Instant::now();
        loop {
            if page.find_element("body").await.is_ok() {
                debug!(url, elapsed = ?start.elapsed(), "rendered page ready");
                break;
            }
            if start.elapsed() >= self.render_timeout {
                return Err(ScrapeError::RenderTimeout {
                    url: url.to_string(),
                    waited_secs: self.render_timeout.as_secs(),
                });
            }
            tokio::time::sleep(READINESS_POLL).await;
        }

        // fixed settle delay for late-running scripts
        tokio::time::sleep(self.settle_delay).await;

        page.content()
            .await
            .map_err(|e| ScrapeError::fetch(url, format!("failed to read rendered markup: {e}")))
    }
}

impl PageFetcher for ChromiumFetcher {
    async fn fetch_dual(&mut self, url: &str) -> Result<DualFetch, ScrapeError> {
        // both modes always run; neither cancels the other
        let static_result = self.fetch_static(url).await;
        let rendered_result = self.fetch_rendered(url).await;
        Ok(DualFetch {
            static_html: static_result?,
            rendered_html: rendered_result?,
        })
    }

    async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("failed to close browser: {e}");
        }
        if let Err(e) = self.browser.wait().await {
            warn!("failed to wait for browser exit: {e}");
        }
        self.handler_task.abort();
        if let Err(e) = (&mut self.handler_task).await
            && !e.is_cancelled()
        {
            warn!("browser handler task failed during abort: {e}");
        }
        if let Err(e) = std::fs::remove_dir_all(&self.user_data_dir) {
            debug!(
                "failed to remove browser data dir {}: {e}",
                self.user_data_dir.display()
            );
        }
        debug!("browser session released");
    }
}
