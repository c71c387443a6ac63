// src/checker/page.rs
// =============================================================================
// Runs the broken-link check for one page, start to finish:
//
//   fetch page -> extract links -> classify -> validate -> aggregate
//
// If the page itself cannot be fetched (network error or status >= 400) the
// page URL becomes the only broken link and no extraction happens.
//
// Links are validated one after another. Each identity is validated at most
// once per page, and a fresh aggregator is used for every call.
// =============================================================================

use url::Url;

use super::classify::LinkCategory;
use super::html::{extract_links, PageDocument};
use super::http::Fetch;
use super::report::{LinkAggregator, PageLinkReport};
use super::validate::LinkValidator;

pub async fn check_page(fetcher: &dyn Fetch, page_url: &str) -> PageLinkReport {
    let fetched = match fetcher.get_page(page_url).await {
        Ok(page) if page.is_error() => {
            log::warn!("{} returned HTTP {}", page_url, page.status);
            return PageLinkReport::page_unreachable(page_url);
        }
        Ok(page) => page,
        Err(e) => {
            log::warn!("Error fetching {}: {}", page_url, e);
            return PageLinkReport::page_unreachable(page_url);
        }
    };

    // Relative links resolve against where we ended up after redirects
    let base_url = match Url::parse(&fetched.final_url).or_else(|_| Url::parse(page_url)) {
        Ok(url) => url,
        Err(e) => {
            log::warn!("Cannot use {} as a base URL: {}", page_url, e);
            return PageLinkReport::page_unreachable(page_url);
        }
    };

    let document = PageDocument::new(fetched.body, base_url);
    let extracted = extract_links(&document);
    let validator = LinkValidator::new(fetcher);
    let mut aggregator = LinkAggregator::new();

    for reference in &extracted.references {
        let Some(category) = LinkCategory::of(reference) else {
            log::debug!("Ignoring {}", reference.raw_href);
            continue;
        };

        let identity = reference.resolved_url.as_str();
        if aggregator.verdict_for(identity).is_some() {
            continue;
        }

        let verdict = validator.validate(reference, category, &extracted).await;
        log::debug!("{:?} {} -> {:?}", category, identity, verdict);
        aggregator.record(identity, verdict);
    }

    aggregator.finish(page_url)
}
