//! URL classification: which discovered URLs are in scope for the crawl.
//!
//! Every predicate here fails closed: anything unparseable is out of scope
//! rather than an error, so a single garbage href never stops a crawl.

use url::Url;

/// Returns true when `candidate` should be crawled for a site rooted at
/// `base_domain`.
///
/// A URL is in scope when it parses, uses `http` or `https`, its host
/// exactly equals `base_domain` (no subdomain matching), and it carries
/// neither a fragment marker nor a `javascript:` scheme anywhere in it.
#[must_use]
pub fn is_in_scope(candidate: &str, base_domain: &str) -> bool {
    if candidate.is_empty() {
        return false;
    }
    if candidate.to_ascii_lowercase().contains("javascript:") {
        return false;
    }
    if candidate.contains('#') {
        return false;
    }
    let parsed = match Url::parse(candidate) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }
    parsed.host_str() == Some(base_domain)
}

/// Resolves a possibly-relative URL against the page it was found on.
///
/// Already-absolute URLs pass through unchanged; anything else is joined
/// with standard base-URL resolution. A join failure returns the input
/// unchanged (the classifier will reject it downstream).
#[must_use]
pub fn resolve_absolute(href: &str, page_url: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    match Url::parse(page_url).and_then(|base| base.join(href)) {
        Ok(joined) => joined.to_string(),
        Err(_) => href.to_string(),
    }
}

/// Link-extraction variant of [`resolve_absolute`]: `mailto:`, `tel:` and
/// fragment-only hrefs are recorded as-is instead of being joined.
#[must_use]
pub fn resolve_link_href(href: &str, page_url: &str) -> String {
    if href.starts_with("mailto:") || href.starts_with("tel:") || href.starts_with('#') {
        return href.to_string();
    }
    resolve_absolute(href, page_url)
}

/// Extracts the host of a URL, used to derive the crawl's base domain
/// from the seed URL.
#[must_use]
pub fn host_of(url: &str) -> Option<String> {
    Url::parse(url).ok()?.host_str().map(str::to_string)
}
