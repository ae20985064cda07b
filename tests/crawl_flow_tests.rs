//! End-to-end crawl scenarios driven by a stub fetcher.
//!
//! The stub stands in for the dual static/rendered acquisition so the
//! orchestration contract (frontier safety, scope filtering, abandon and
//! abort policies, checkpointing, exactly-once final outputs) can be
//! verified without a network or a browser.

use reqwest::Client;
use siteharvest::{
    AggregateDataset, CrawlConfig, CrawlState, DualFetch, ImageStore, PageFetcher, ScrapeError,
    content_saver, crawl_with_fetcher,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

struct StubFetcher {
    pages: HashMap<String, String>,
    calls: Arc<Mutex<Vec<String>>>,
    fail_static: Option<String>,
    abort_on: Option<String>,
    closed: Arc<AtomicBool>,
}

impl StubFetcher {
    fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(url, html)| (url.to_string(), html.to_string()))
                .collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_static: None,
            abort_on: None,
            closed: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl PageFetcher for StubFetcher {
    async fn fetch_dual(&mut self, url: &str) -> Result<DualFetch, ScrapeError> {
        self.calls.lock().unwrap().push(url.to_string());
        if self.abort_on.as_deref() == Some(url) {
            return Err(ScrapeError::Browser("session lost".into()));
        }
        if self.fail_static.as_deref() == Some(url) {
            return Err(ScrapeError::fetch(url, "status 500"));
        }
        match self.pages.get(url) {
            Some(html) => Ok(DualFetch {
                static_html: html.clone(),
                rendered_html: html.clone(),
            }),
            None => Err(ScrapeError::fetch(url, "status 404")),
        }
    }

    async fn close(self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

fn config_in(tmp: &TempDir) -> CrawlConfig {
    CrawlConfig::builder()
        .storage_dir(tmp.path().to_path_buf())
        .start_url("https://example.test/")
        .politeness_delay_ms(0)
        .checkpoint_interval(100)
        .build()
        .unwrap()
}

fn image_store(tmp: &TempDir) -> ImageStore {
    ImageStore::new(
        Client::new(),
        tmp.path().join("scraped-images"),
        Duration::from_secs(1),
    )
}

#[tokio::test]
async fn two_page_crawl_stays_in_scope_and_persists_once() {
    let tmp = TempDir::new().unwrap();
    let config = CrawlConfig::builder()
        .storage_dir(tmp.path().to_path_buf())
        .start_url("https://example.test/")
        .limit(2)
        .politeness_delay_ms(0)
        .build()
        .unwrap();
    content_saver::ensure_workspace(&config).await.unwrap();

    let fetcher = StubFetcher::new(&[
        (
            "https://example.test/",
            r##"<head><meta name="title" content="Home"></head>
                <body>
                  <a href="/about">About</a>
                  <a href="https://other.test/x">Elsewhere</a>
                  <a href="/about#team">Fragment</a>
                  <a href="javascript:void(0)">Script</a>
                  <p>home text</p>
                </body>"##,
        ),
        (
            "https://example.test/about",
            r##"<body>
                  <a href="/">Back home</a>
                  <a href="/third">Deeper</a>
                  <p>about text</p>
                </body>"##,
        ),
    ]);
    let calls = Arc::clone(&fetcher.calls);

    let store = image_store(&tmp);
    let outcome = crawl_with_fetcher(&config, fetcher, &store).await.unwrap();

    assert_eq!(outcome.state, CrawlState::Completed);
    assert_eq!(outcome.pages_crawled, 2);
    assert_eq!(outcome.urls_visited, 2);

    // exactly the two in-scope pages, in frontier order; other.test and the
    // fragment/javascript links were never fetched, "/" was never re-fetched
    assert_eq!(
        *calls.lock().unwrap(),
        vec!["https://example.test/", "https://example.test/about"]
    );

    // deduplicated links from both pages survive in the final aggregate
    let hrefs: Vec<&str> = outcome
        .dataset
        .links
        .iter()
        .map(|l| l.href.as_str())
        .collect();
    assert!(hrefs.contains(&"https://example.test/about"));
    assert!(hrefs.contains(&"https://other.test/x"));
    assert!(hrefs.contains(&"https://example.test/"));
    assert_eq!(
        hrefs
            .iter()
            .filter(|&&h| h == "https://example.test/about")
            .count(),
        1
    );

    assert_eq!(outcome.dataset.metadata.get("title").unwrap(), "Home");

    // final outputs written exactly once at run end
    let json = std::fs::read_to_string(config.final_results_path()).unwrap();
    let reloaded: AggregateDataset = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded.links.len(), outcome.dataset.links.len());

    let csv = std::fs::read_to_string(config.links_csv_path()).unwrap();
    assert!(csv.starts_with("href,text"));
    assert!(csv.contains("https://other.test/x"));
}

#[tokio::test]
async fn fetch_failure_abandons_url_and_crawl_continues() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(&tmp);
    content_saver::ensure_workspace(&config).await.unwrap();

    let mut fetcher = StubFetcher::new(&[
        (
            "https://example.test/",
            r#"<body><a href="/bad">bad</a><a href="/good">good</a></body>"#,
        ),
        (
            "https://example.test/good",
            "<body><p>good text</p></body>",
        ),
    ]);
    // one fetch mode failing abandons the URL for this iteration
    fetcher.fail_static = Some("https://example.test/bad".to_string());
    let calls = Arc::clone(&fetcher.calls);

    let store = image_store(&tmp);
    let outcome = crawl_with_fetcher(&config, fetcher, &store).await.unwrap();

    assert_eq!(outcome.state, CrawlState::Completed);
    // the failed URL was attempted once, never retried, never counted
    assert_eq!(
        *calls.lock().unwrap(),
        vec![
            "https://example.test/",
            "https://example.test/bad",
            "https://example.test/good",
        ]
    );
    assert_eq!(outcome.pages_crawled, 2);
    assert_eq!(outcome.urls_visited, 3);
    assert!(outcome.dataset.text.contains(&"good text".to_string()));
}

#[tokio::test]
async fn browser_failure_aborts_with_partial_aggregate_and_releases_fetcher() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(&tmp);
    content_saver::ensure_workspace(&config).await.unwrap();

    let mut fetcher = StubFetcher::new(&[(
        "https://example.test/",
        r#"<body><a href="/next">next</a><p>first page</p></body>"#,
    )]);
    fetcher.abort_on = Some("https://example.test/next".to_string());
    let closed = Arc::clone(&fetcher.closed);

    let store = image_store(&tmp);
    let outcome = crawl_with_fetcher(&config, fetcher, &store).await.unwrap();

    assert_eq!(outcome.state, CrawlState::Aborted);
    // partial aggregate from the page that succeeded before the failure
    assert!(outcome.dataset.text.contains(&"first page".to_string()));
    // fetcher released despite the abort
    assert!(closed.load(Ordering::SeqCst));
    // partial results still persisted
    assert!(config.final_results_path().exists());
}

#[tokio::test]
async fn pagination_selector_restricts_frontier_to_next_links() {
    let tmp = TempDir::new().unwrap();
    let config = CrawlConfig::builder()
        .storage_dir(tmp.path().to_path_buf())
        .start_url("https://example.test/page/1")
        .politeness_delay_ms(0)
        .next_page_selector("a.next")
        .build()
        .unwrap();
    content_saver::ensure_workspace(&config).await.unwrap();

    let fetcher = StubFetcher::new(&[
        (
            "https://example.test/page/1",
            r#"<body>
                 <a href="/unrelated">A regular link</a>
                 <a class="next" href="/page/2">Next</a>
               </body>"#,
        ),
        (
            "https://example.test/page/2",
            r#"<body><p>last page</p></body>"#,
        ),
    ]);
    let calls = Arc::clone(&fetcher.calls);

    let store = image_store(&tmp);
    let outcome = crawl_with_fetcher(&config, fetcher, &store).await.unwrap();

    assert_eq!(outcome.state, CrawlState::Completed);
    // only the pagination chain is followed; /unrelated is recorded as a
    // link but never fetched
    assert_eq!(
        *calls.lock().unwrap(),
        vec!["https://example.test/page/1", "https://example.test/page/2"]
    );
    assert!(
        outcome
            .dataset
            .links
            .iter()
            .any(|l| l.href == "https://example.test/unrelated")
    );
}

#[tokio::test]
async fn checkpoints_are_written_every_interval() {
    let tmp = TempDir::new().unwrap();
    let config = CrawlConfig::builder()
        .storage_dir(tmp.path().to_path_buf())
        .start_url("https://example.test/")
        .politeness_delay_ms(0)
        .checkpoint_interval(1)
        .build()
        .unwrap();
    content_saver::ensure_workspace(&config).await.unwrap();

    let fetcher = StubFetcher::new(&[
        (
            "https://example.test/",
            r#"<body><a href="/about">about</a></body>"#,
        ),
        ("https://example.test/about", "<body><p>about</p></body>"),
    ]);

    let store = image_store(&tmp);
    let outcome = crawl_with_fetcher(&config, fetcher, &store).await.unwrap();

    assert_eq!(outcome.pages_crawled, 2);
    assert!(config.checkpoint_path(1).exists());
    assert!(config.checkpoint_path(2).exists());

    // checkpoints are valid snapshots of the aggregate shape
    let snapshot: AggregateDataset =
        serde_json::from_str(&std::fs::read_to_string(config.checkpoint_path(1)).unwrap()).unwrap();
    assert!(snapshot.links.iter().any(|l| l.href == "https://example.test/about"));
}
