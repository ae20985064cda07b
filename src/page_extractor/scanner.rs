//! Synchronous document scan.
//!
//! Parsing happens entirely before any image download so the non-`Send`
//! parsed DOM never has to live across an await point. The scan walks four
//! independent categories (metadata, images, links, text); a failure in one
//! category is logged and the others still run, and a document that fails
//! outright yields an empty scan rather than an error.

use scraper::{Html, Selector};
use std::collections::HashMap;
use tracing::{debug, warn};

use super::schema::{ImageKind, LinkRef};
use crate::error::{ScrapeError, ScrapeResult};

/// An image reference found in the markup, before materialization.
#[derive(Debug, Clone)]
pub struct ImageCandidate {
    pub src: String,
    pub alt: Option<String>,
    pub title: Option<String>,
    pub kind: ImageKind,
}

/// Everything a single parse pass produces. Images are still candidates;
/// the extractor resolves and materializes them afterwards.
#[derive(Debug, Default)]
pub struct ScannedPage {
    pub metadata: HashMap<String, String>,
    pub images: Vec<ImageCandidate>,
    pub links: Vec<LinkRef>,
    pub text: Vec<String>,
}

pub fn scan_document(html: &str, page_url: &str) -> ScannedPage {
    let doc = Html::parse_document(html);
    let mut scanned = ScannedPage::default();

    match scan_metadata(&doc) {
        Ok(metadata) => scanned.metadata = metadata,
        Err(e) => warn!(page = page_url, error = %e, "metadata scan failed"),
    }
    match scan_images(&doc) {
        Ok(images) => scanned.images = images,
        Err(e) => warn!(page = page_url, error = %e, "image scan failed"),
    }
    match scan_links(&doc, page_url) {
        Ok(links) => scanned.links = links,
        Err(e) => warn!(page = page_url, error = %e, "link scan failed"),
    }
    scanned.text = scan_text(&doc);

    scanned
}

fn selector(css: &str) -> ScrapeResult<Selector> {
    Selector::parse(css)
        .map_err(|e| ScrapeError::Extraction(format!("invalid selector `{css}`: {e}")))
}

/// Meta tags keyed by `name`, falling back to `property` (OpenGraph et al).
/// Later occurrences of the same key overwrite earlier ones.
fn scan_metadata(doc: &Html) -> ScrapeResult<HashMap<String, String>> {
    let meta = selector("meta")?;
    let mut metadata = HashMap::new();
    for element in doc.select(&meta) {
        let value = element.value();
        let key = value.attr("name").or_else(|| value.attr("property"));
        if let (Some(key), Some(content)) = (key, value.attr("content")) {
            metadata.insert(key.to_string(), content.to_string());
        }
    }
    Ok(metadata)
}

fn scan_images(doc: &Html) -> ScrapeResult<Vec<ImageCandidate>> {
    let img = selector("img")?;
    let styled = selector("[style]")?;
    let mut images = Vec::new();

    for element in doc.select(&img) {
        let value = element.value();
        let Some(src) = value.attr("src").filter(|s| !s.is_empty()) else {
            continue;
        };
        images.push(ImageCandidate {
            src: src.to_string(),
            alt: value.attr("alt").filter(|s| !s.is_empty()).map(str::to_string),
            title: value.attr("title").filter(|s| !s.is_empty()).map(str::to_string),
            kind: ImageKind::Img,
        });
    }

    for element in doc.select(&styled) {
        let Some(style) = element.value().attr("style") else {
            continue;
        };
        if !style.contains("background-image") {
            continue;
        }
        match background_url(style) {
            Some(src) => images.push(ImageCandidate {
                src,
                alt: None,
                title: None,
                kind: ImageKind::BackgroundImage,
            }),
            // malformed style values are skipped, not fatal
            None => debug!(style, "no url() in background-image style"),
        }
    }

    Ok(images)
}

/// Extracts the argument of the last `url(...)` in an inline style value,
/// stripping surrounding quotes.
fn background_url(style: &str) -> Option<String> {
    let after = style.rsplit_once("url(")?.1;
    let inner = after.split(')').next()?;
    let url = inner.trim().trim_matches(|c| c == '"' || c == '\'').trim();
    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}

fn scan_links(doc: &Html, page_url: &str) -> ScrapeResult<Vec<LinkRef>> {
    let anchor = selector("a[href]")?;
    let mut links = Vec::new();
    for element in doc.select(&anchor) {
        let Some(href) = element.value().attr("href").filter(|h| !h.is_empty()) else {
            continue;
        };
        let text: Vec<&str> = element
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        links.push(LinkRef {
            href: crate::scope::resolve_link_href(href, page_url),
            text: text.join(" "),
        });
    }
    Ok(links)
}

/// Every non-empty trimmed text run in document order. Duplicates are kept;
/// dedup happens at merge time.
fn scan_text(doc: &Html) -> Vec<String> {
    doc.root_element()
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
