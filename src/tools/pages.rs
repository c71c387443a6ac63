// src/tools/pages.rs
// =============================================================================
// Page finder: lists the internal pages a page links to.
//
// A link counts as an internal page when, after resolving it against the
// page, it is http(s) and has the same origin (scheme + host + port) as the
// page. The #fragment is dropped so "/docs#a" and "/docs#b" are one page.
// =============================================================================

use std::collections::HashSet;

use url::Url;

use super::FoundLinks;
use crate::checker::{extract_links, Fetch, PageDocument};

pub async fn find_pages(fetcher: &dyn Fetch, page_url: &str) -> FoundLinks {
    let Some(document) = super::fetch_document(fetcher, page_url).await else {
        return FoundLinks::empty(page_url);
    };

    FoundLinks {
        page_url: page_url.to_string(),
        links: internal_pages(&document),
    }
}

pub fn internal_pages(document: &PageDocument) -> Vec<String> {
    let origin = document.base_url.origin();
    let mut seen = HashSet::new();

    extract_links(document)
        .references
        .into_iter()
        .filter_map(|reference| Url::parse(&reference.resolved_url).ok())
        .filter(|url| matches!(url.scheme(), "http" | "https") && url.origin() == origin)
        .map(|mut url| {
            url.set_fragment(None);
            url.to_string()
        })
        .filter(|url| seen.insert(url.clone()))
        .collect()
}
