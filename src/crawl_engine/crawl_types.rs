//! Core types for crawl orchestration.

use crate::merge::AggregateDataset;

/// Lifecycle of a crawl run.
///
/// `Running` covers the main loop; a run terminates as `Completed` when the
/// frontier drains or the page limit is reached, and as `Aborted` when the
/// browser session fails outside the per-URL recovery scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlState {
    Idle,
    Running,
    Completed,
    Aborted,
}

/// What a crawl run produced. An aborted run still carries whatever
/// aggregate data accumulated before the failure.
#[derive(Debug)]
pub struct CrawlOutcome {
    pub state: CrawlState,
    pub dataset: AggregateDataset,
    pub pages_crawled: usize,
    pub urls_visited: usize,
}
