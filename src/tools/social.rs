// src/tools/social.rs
// =============================================================================
// Social link extractor: lists hrefs that point at well-known social sites.
//
// Any element with an href counts (<a>, <link>, <area>...), and the href is
// reported exactly as written in the page.
// =============================================================================

use std::collections::HashSet;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::FoundLinks;
use crate::checker::Fetch;

pub const SOCIAL_DOMAINS: &[&str] = &[
    "facebook.com",
    "twitter.com",
    "linkedin.com",
    "instagram.com",
    "youtube.com",
    "pinterest.com",
    "discord.gg",
    "github.com",
    "wa.me",
];

static HREF_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("[href]").unwrap());

pub async fn find_social_links(fetcher: &dyn Fetch, page_url: &str) -> FoundLinks {
    let Some(document) = super::fetch_document(fetcher, page_url).await else {
        return FoundLinks::empty(page_url);
    };

    FoundLinks {
        page_url: page_url.to_string(),
        links: social_links(&document.html),
    }
}

pub fn social_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut seen = HashSet::new();

    document
        .select(&HREF_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| SOCIAL_DOMAINS.iter().any(|domain| href.contains(*domain)))
        .map(str::to_string)
        .filter(|href| seen.insert(href.clone()))
        .collect()
}
