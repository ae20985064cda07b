//! Tests for the type-safe configuration builder pattern

use siteharvest::CrawlConfig;
use tempfile::TempDir;

#[test]
fn builder_requires_storage_dir_then_start_url() {
    // These should not compile if uncommented - testing compile-time guarantees
    // let config = CrawlConfig::builder().build();
    // let config = CrawlConfig::builder().storage_dir("/tmp").build();

    let temp_dir = TempDir::new().unwrap();
    let config = CrawlConfig::builder()
        .storage_dir(temp_dir.path().to_path_buf())
        .start_url("https://example.test")
        .build()
        .unwrap();

    assert_eq!(config.storage_dir(), temp_dir.path());
    assert_eq!(config.start_url(), "https://example.test");
    assert_eq!(config.base_domain(), "example.test");
}

#[test]
fn builder_optional_fields_have_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = CrawlConfig::builder()
        .storage_dir(temp_dir.path().to_path_buf())
        .start_url("https://example.test")
        .build()
        .unwrap();

    assert_eq!(config.limit(), None);
    assert!(config.headless());
    assert_eq!(config.fetch_timeout_secs(), 30);
    assert_eq!(config.image_timeout_secs(), 10);
    assert_eq!(config.render_timeout_secs(), 10);
    assert_eq!(config.settle_delay_ms(), 3_000);
    assert_eq!(config.politeness_delay_ms(), 2_000);
    assert_eq!(config.checkpoint_interval(), 10);
    assert_eq!(config.next_page_selector(), None);
}

#[test]
fn schemeless_start_url_is_normalized_to_https() {
    let temp_dir = TempDir::new().unwrap();
    let config = CrawlConfig::builder()
        .storage_dir(temp_dir.path().to_path_buf())
        .start_url("example.test/start")
        .build()
        .unwrap();

    assert_eq!(config.start_url(), "https://example.test/start");
    assert_eq!(config.base_domain(), "example.test");
}

#[test]
fn derived_paths_live_under_storage_dir() {
    let temp_dir = TempDir::new().unwrap();
    let config = CrawlConfig::builder()
        .storage_dir(temp_dir.path().to_path_buf())
        .start_url("https://example.test")
        .build()
        .unwrap();

    assert_eq!(config.images_dir(), temp_dir.path().join("scraped-images"));
    assert_eq!(config.data_dir(), temp_dir.path().join("data"));
    assert_eq!(
        config.final_results_path(),
        temp_dir.path().join("data/final_results.json")
    );
    assert_eq!(
        config.links_csv_path(),
        temp_dir.path().join("data/links.csv")
    );
    assert_eq!(
        config.checkpoint_path(20),
        temp_dir.path().join("data/intermediate_results_20.json")
    );
}

#[test]
fn invalid_start_url_fails_to_build() {
    let temp_dir = TempDir::new().unwrap();
    let result = CrawlConfig::builder()
        .storage_dir(temp_dir.path().to_path_buf())
        .start_url("")
        .build();
    assert!(result.is_err());
}

#[test]
fn zero_checkpoint_interval_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let result = CrawlConfig::builder()
        .storage_dir(temp_dir.path().to_path_buf())
        .start_url("https://example.test")
        .checkpoint_interval(0)
        .build();
    assert!(result.is_err());
}

#[test]
fn optional_setters_are_applied() {
    let temp_dir = TempDir::new().unwrap();
    let config = CrawlConfig::builder()
        .storage_dir(temp_dir.path().to_path_buf())
        .start_url("https://example.test")
        .limit(50)
        .user_agent("test-agent/1.0")
        .politeness_delay_ms(0)
        .checkpoint_interval(5)
        .next_page_selector("a.next")
        .headless(false)
        .build()
        .unwrap();

    assert_eq!(config.limit(), Some(50));
    assert_eq!(config.user_agent(), "test-agent/1.0");
    assert_eq!(config.politeness_delay_ms(), 0);
    assert_eq!(config.checkpoint_interval(), 5);
    assert_eq!(config.next_page_selector(), Some("a.next"));
    assert!(!config.headless());
}
