use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How an image reference was discovered in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageKind {
    /// An `<img>` element's `src`
    Img,
    /// A `url(...)` inside an inline `background-image` style
    BackgroundImage,
}

/// A materialized image reference. Identity key is `src` (absolute form);
/// merging keeps at most one entry per `src`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    pub kind: ImageKind,
}

/// A discovered hyperlink. Identity key is `href`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRef {
    pub href: String,
    pub text: String,
}

/// Structured extraction result for one page in one fetch mode, or the
/// merged result across modes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageRecord {
    pub metadata: HashMap<String, String>,
    pub images: Vec<ImageRef>,
    pub links: Vec<LinkRef>,
    pub text: Vec<String>,
}

impl PageRecord {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
            && self.images.is_empty()
            && self.links.is_empty()
            && self.text.is_empty()
    }
}
