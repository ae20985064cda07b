//! The crawl loop.
//!
//! Single-threaded and sequential: pop a URL, fetch both views, extract,
//! merge, fold, discover links, checkpoint, sleep. Per-URL failures are
//! logged and skipped (the URL is already marked visited, so it is never
//! retried); only a browser-session failure aborts the run.

use std::time::Duration;
use tracing::{debug, error, info, warn};

use super::crawl_types::{CrawlOutcome, CrawlState};
use super::frontier::Frontier;
use crate::config::CrawlConfig;
use crate::content_saver;
use crate::error::ScrapeError;
use crate::fetcher::PageFetcher;
use crate::image_store::ImageStore;
use crate::merge::{self, AggregateDataset};
use crate::page_extractor;
use crate::scope;

/// Runs the crawl to completion or abort, returning the accumulated
/// aggregate either way. The caller owns fetcher release and the final
/// persistence pass.
pub async fn run_crawl<F: PageFetcher>(
    config: &CrawlConfig,
    fetcher: &mut F,
    store: &ImageStore,
) -> CrawlOutcome {
    let base_domain = config.base_domain();
    let mut frontier = Frontier::new(config.start_url());
    let mut dataset = AggregateDataset::default();
    let mut pages_crawled = 0usize;

    let mut state = CrawlState::Idle;
    debug!(seed = config.start_url(), ?state, "crawl initialized");
    state = CrawlState::Running;

    while state == CrawlState::Running {
        if config.limit().is_some_and(|limit| pages_crawled >= limit) {
            info!(limit = config.limit(), "page limit reached");
            state = CrawlState::Completed;
            continue;
        }
        let Some(url) = frontier.pop() else {
            state = CrawlState::Completed;
            continue;
        };

        info!(page = pages_crawled + 1, %url, "crawling");

        let dual = match fetcher.fetch_dual(&url).await {
            Ok(dual) => dual,
            Err(ScrapeError::Browser(reason)) => {
                error!(%url, %reason, "browser session failed, aborting crawl");
                state = CrawlState::Aborted;
                continue;
            }
            Err(e) => {
                // URL is already marked visited and will not be retried
                warn!(%url, error = %e, "fetch failed, skipping");
                continue;
            }
        };

        let static_record = page_extractor::extract(&dual.static_html, &url, store).await;
        let rendered_record = page_extractor::extract(&dual.rendered_html, &url, store).await;
        let merged = merge::merge_pages(static_record, rendered_record);
        if merged.is_empty() {
            debug!(%url, "page yielded no content");
        }

        match config.next_page_selector() {
            // pagination: the frontier holds at most the one "next" link
            Some(selector) => {
                if let Some(next) =
                    page_extractor::find_next_link(&dual.rendered_html, selector, &url)
                    && scope::is_in_scope(&next, base_domain)
                    && !frontier.is_visited(&next)
                {
                    frontier.push(next);
                }
            }
            None => {
                for link in &merged.links {
                    if scope::is_in_scope(&link.href, base_domain)
                        && !frontier.is_visited(&link.href)
                    {
                        frontier.push(link.href.clone());
                    }
                }
            }
        }

        dataset.fold(merged);
        pages_crawled += 1;

        if pages_crawled % config.checkpoint_interval() == 0 {
            dataset.collapse();
            let path = config.checkpoint_path(pages_crawled);
            match content_saver::save_json(&dataset, &path).await {
                Ok(()) => debug!(path = %path.display(), "checkpoint written"),
                // checkpoint failures never stop the crawl
                Err(e) => warn!(error = %e, "checkpoint write failed, continuing"),
            }
        }

        tokio::time::sleep(Duration::from_millis(config.politeness_delay_ms())).await;
    }

    info!(
        pages = pages_crawled,
        visited = frontier.visited_count(),
        images = dataset.images.len(),
        links = dataset.links.len(),
        ?state,
        "crawl loop finished"
    );

    CrawlOutcome {
        state,
        dataset,
        pages_crawled,
        urls_visited: frontier.visited_count(),
    }
}
