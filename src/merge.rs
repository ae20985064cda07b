//! Cross-mode merging and site-wide aggregation.
//!
//! Two rules govern every dedup in the pipeline:
//! - keyed collections (images by `src`, links by `href`) keep the **last**
//!   occurrence in concatenation order, slotted at the key's first position;
//! - text collapses to a set, with no order guarantee afterwards.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::page_extractor::schema::{ImageRef, LinkRef, PageRecord};

/// Collapses `items` by key: one surviving entry per key, positioned where
/// the key first appeared, holding the value last seen for it.
fn dedup_last_by_key<T, K, F>(items: Vec<T>, key_of: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut slot_of: HashMap<K, usize> = HashMap::new();
    let mut slots: Vec<Option<T>> = Vec::with_capacity(items.len());
    for item in items {
        match slot_of.entry(key_of(&item)) {
            std::collections::hash_map::Entry::Occupied(entry) => {
                slots[*entry.get()] = Some(item);
            }
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(slots.len());
                slots.push(Some(item));
            }
        }
    }
    slots.into_iter().flatten().collect()
}

fn collapse_text(text: Vec<String>) -> Vec<String> {
    let set: HashSet<String> = text.into_iter().collect();
    set.into_iter().collect()
}

/// Unifies the static and rendered extraction of one URL.
///
/// Rendered-mode metadata overwrites static-mode metadata on key collision;
/// dynamic pages make the rendered view the more authoritative one.
#[must_use]
pub fn merge_pages(static_record: PageRecord, rendered_record: PageRecord) -> PageRecord {
    let mut metadata = static_record.metadata;
    metadata.extend(rendered_record.metadata);

    let mut images = static_record.images;
    images.extend(rendered_record.images);

    let mut links = static_record.links;
    links.extend(rendered_record.links);

    let mut text = static_record.text;
    text.extend(rendered_record.text);

    PageRecord {
        metadata,
        images: dedup_last_by_key(images, |img| img.src.clone()),
        links: dedup_last_by_key(links, |link| link.href.clone()),
        text: collapse_text(text),
    }
}

/// The accumulated, deduplicated result across the entire crawl.
///
/// `fold` appends; `collapse` applies the keyed dedup and text set-collapse.
/// The orchestrator folds each visited URL exactly once and collapses at
/// checkpoints and at run end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregateDataset {
    pub metadata: HashMap<String, String>,
    pub images: Vec<ImageRef>,
    pub links: Vec<LinkRef>,
    pub text: Vec<String>,
}

impl AggregateDataset {
    /// Folds one merged page record into the aggregate. Page metadata wins
    /// on key collision.
    pub fn fold(&mut self, page: PageRecord) {
        self.metadata.extend(page.metadata);
        self.images.extend(page.images);
        self.links.extend(page.links);
        self.text.extend(page.text);
    }

    /// Collapses images/links by key and text to a set. Idempotent.
    pub fn collapse(&mut self) {
        self.images = dedup_last_by_key(std::mem::take(&mut self.images), |img| img.src.clone());
        self.links = dedup_last_by_key(std::mem::take(&mut self.links), |link| link.href.clone());
        self.text = collapse_text(std::mem::take(&mut self.text));
    }
}
