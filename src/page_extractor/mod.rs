//! Per-page content extraction.
//!
//! Turns one fetched document into a [`PageRecord`]: a metadata map, image
//! references (materialized through the [`ImageStore`]), links, and text
//! runs. Extraction never fails the crawl; the worst case is a record with
//! empty containers.

pub mod scanner;
pub mod schema;

use tracing::debug;

use crate::image_store::ImageStore;
use crate::scope;
use schema::{ImageRef, PageRecord};

pub use scanner::scan_document;

/// Extracts a [`PageRecord`] from raw markup.
///
/// Image candidates are resolved to absolute form and materialized; a
/// candidate whose download fails is dropped from the record (the scan of
/// the remaining candidates continues).
pub async fn extract(html: &str, page_url: &str, store: &ImageStore) -> PageRecord {
    let scanned = scanner::scan_document(html, page_url);

    let mut images = Vec::with_capacity(scanned.images.len());
    for candidate in scanned.images {
        let absolute = scope::resolve_absolute(&candidate.src, page_url);
        match store.materialize(&absolute, page_url).await {
            Some(local_path) => images.push(ImageRef {
                src: absolute,
                alt: candidate.alt,
                title: candidate.title,
                local_path: Some(local_path),
                kind: candidate.kind,
            }),
            None => debug!(src = %absolute, page = page_url, "dropping unavailable image"),
        }
    }

    PageRecord {
        metadata: scanned.metadata,
        images,
        links: scanned.links,
        text: scanned.text,
    }
}

/// Finds the first hyperlink matching `selector` and returns it in absolute
/// form. Used by the pagination frontier strategy, where only a "next page"
/// link feeds the crawl. An invalid selector or no match yields `None`.
#[must_use]
pub fn find_next_link(html: &str, selector: &str, page_url: &str) -> Option<String> {
    let parsed = match scraper::Selector::parse(selector) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(selector, error = %e, "invalid next-page selector");
            return None;
        }
    };
    let doc = scraper::Html::parse_document(html);
    doc.select(&parsed)
        .find_map(|el| el.value().attr("href"))
        .map(|href| scope::resolve_link_href(href, page_url))
}
