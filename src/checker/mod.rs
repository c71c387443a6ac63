// src/checker/mod.rs
// =============================================================================
// This module contains the link checking engine.
//
// Submodules, leaves first:
// - normalize: turns user input into an absolute URL
// - http: the fetch layer (trait + reqwest implementation)
// - html: extracts links and element ids from a page
// - classify: maps each link to a category
// - validate: decides Valid / Broken per category
// - report: per-page aggregation of distinct and broken links
// - page: runs all of the above for one page
// =============================================================================

mod classify;
mod html;
mod http;
mod normalize;
mod page;
mod report;
mod validate;

pub use html::{extract_links, PageDocument};
pub use http::{Fetch, FetchedPage, HttpFetcher};
pub use normalize::normalize_url;
pub use page::check_page;
pub use report::PageLinkReport;
