//! Extraction with a live (mock) image server: materialization policy and
//! record shape.

use mockito::Server;
use reqwest::Client;
use siteharvest::{ImageKind, ImageStore, page_extractor};
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test]
async fn materialization_failure_drops_image() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/ok.png")
        .with_status(200)
        .with_body(b"ok".to_vec())
        .create_async()
        .await;
    server
        .mock("GET", "/missing.png")
        .with_status(404)
        .create_async()
        .await;

    let tmp = TempDir::new().unwrap();
    let store = ImageStore::new(
        Client::new(),
        tmp.path().to_path_buf(),
        Duration::from_secs(5),
    );

    let page_url = format!("{}/", server.url());
    let html = r#"<body>
        <img src="/ok.png" alt="fine">
        <img src="/missing.png" alt="gone">
        <p>still scanned</p>
    </body>"#;

    let record = page_extractor::extract(html, &page_url, &store).await;

    // the failed image is dropped; the rest of the page is unaffected
    assert_eq!(record.images.len(), 1);
    assert_eq!(record.images[0].src, format!("{}/ok.png", server.url()));
    assert_eq!(record.images[0].alt.as_deref(), Some("fine"));
    assert!(record.images[0].local_path.is_some());
    assert!(record.text.contains(&"still scanned".to_string()));
}

#[tokio::test]
async fn background_images_materialize_with_their_kind() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/hero.jpg")
        .with_status(200)
        .with_body(b"jpg".to_vec())
        .create_async()
        .await;

    let tmp = TempDir::new().unwrap();
    let store = ImageStore::new(
        Client::new(),
        tmp.path().to_path_buf(),
        Duration::from_secs(5),
    );

    let page_url = format!("{}/", server.url());
    let html = r#"<div style="background-image: url('/hero.jpg')">hero</div>"#;

    let record = page_extractor::extract(html, &page_url, &store).await;

    assert_eq!(record.images.len(), 1);
    assert_eq!(record.images[0].kind, ImageKind::BackgroundImage);
    assert!(record.images[0].alt.is_none());
    assert!(record.images[0].local_path.is_some());
}
