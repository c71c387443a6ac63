// src/checker/html.rs
// =============================================================================
// This module extracts links from a fetched HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to resolve relative links against the page.
//
// Two things come out of one parse:
// - every <a href> on the page, in document order, one per resolved URL
// - every element id on the page, so "#section" links can be checked
//   without fetching anything
// =============================================================================

use std::collections::HashSet;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

use super::classify::has_http_scheme;

// These selectors are constants and known to be valid, so a parse failure
// would be a programmer error
static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
static ID_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("[id]").unwrap());
static BASE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("base[href]").unwrap());

/// A fetched page and the URL it was retrieved from
#[derive(Debug, Clone)]
pub struct PageDocument {
    pub html: String,
    pub base_url: Url,
}

impl PageDocument {
    pub fn new(html: impl Into<String>, base_url: Url) -> Self {
        Self {
            html: html.into(),
            base_url,
        }
    }
}

/// One href found on the page
///
/// `resolved_url` is the href joined against the page base. Fragment,
/// mailto: and tel: references keep their raw text as their identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReference {
    pub raw_href: String,
    pub resolved_url: String,
}

#[derive(Debug, Default)]
pub struct ExtractedLinks {
    pub references: Vec<LinkReference>,
    pub element_ids: HashSet<String>,
}

impl ExtractedLinks {
    pub fn has_id(&self, id: &str) -> bool {
        self.element_ids.contains(id)
    }
}

pub fn extract_links(page: &PageDocument) -> ExtractedLinks {
    let document = Html::parse_document(&page.html);

    // A <base href> changes what relative links are resolved against
    let base = document
        .select(&BASE_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("href"))
        .and_then(|href| page.base_url.join(href.trim()).ok())
        .unwrap_or_else(|| page.base_url.clone());

    let mut references = Vec::new();
    let mut seen = HashSet::new();

    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let href = href.trim();
        if href.is_empty() {
            continue;
        }

        let Some(resolved_url) = resolve_url(&base, href) else {
            log::debug!("Could not resolve href {:?} against {}", href, base);
            continue;
        };

        if seen.insert(resolved_url.clone()) {
            references.push(LinkReference {
                raw_href: href.to_string(),
                resolved_url,
            });
        }
    }

    let element_ids = document
        .select(&ID_SELECTOR)
        .filter_map(|element| element.value().id())
        .map(|id| id.to_string())
        .collect();

    log::debug!(
        "Extracted {} link(s) from {}",
        references.len(),
        page.base_url
    );

    ExtractedLinks {
        references,
        element_ids,
    }
}

// Resolves a possibly-relative href to its identity string
//
// Examples:
//   base = "https://example.com/page"
//   href = "/docs"              -> Some("https://example.com/docs")
//   href = "//cdn.example.com"  -> Some("https://cdn.example.com/")
//   href = "https://other.com"  -> Some("https://other.com/")
//   href = "#intro"             -> Some("#intro")  (not resolved)
//   href = "tel:+1 555"         -> Some("tel:+1 555")  (kept as written)
//   href = "http://exa mple/"   -> Some("http://exa mple/")  (malformed, kept raw)
fn resolve_url(base: &Url, href: &str) -> Option<String> {
    if href.starts_with('#') || href.starts_with("mailto:") || href.starts_with("tel:") {
        return Some(href.to_string());
    }

    // Absolute hrefs parse on their own; relative ones need the base
    if let Ok(url) = Url::parse(href).or_else(|_| base.join(href)) {
        return Some(url.to_string());
    }

    // A malformed http(s) href is still a link. Keeping it lets the request
    // fail later so it is reported as broken instead of vanishing.
    if has_http_scheme(href) {
        return Some(href.to_string());
    }
    None
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is Lazy?
//    - once_cell::sync::Lazy runs its closure the first time it is used
//    - The selectors are parsed once and shared by every call after that
//
// 2. What does `let ... else` do?
//    - `let Some(x) = expr else { continue; };` binds x if the pattern
//      matches, and otherwise runs the else block (which must leave the loop
//      or the function)
//
// 3. Why does HashSet::insert appear inside an `if`?
//    - insert returns false when the value was already there
//    - That makes "keep only the first occurrence" a single call
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str, base: &str) -> PageDocument {
        PageDocument::new(html, Url::parse(base).unwrap())
    }

    fn resolved(links: &ExtractedLinks) -> Vec<&str> {
        links
            .references
            .iter()
            .map(|r| r.resolved_url.as_str())
            .collect()
    }

    #[test]
    fn test_extract_absolute_link() {
        let html = r#"<a href="https://www.rust-lang.org">Rust</a>"#;
        let links = extract_links(&page(html, "https://example.com"));
        assert_eq!(resolved(&links), vec!["https://www.rust-lang.org/"]);
    }

    #[test]
    fn test_resolve_relative_link() {
        let html = r#"<a href="/docs">Docs</a><a href="../about">About</a>"#;
        let links = extract_links(&page(html, "https://example.com/page/sub/"));
        assert_eq!(
            resolved(&links),
            vec!["https://example.com/docs", "https://example.com/page/about"]
        );
    }

    #[test]
    fn test_scheme_relative_link_takes_page_scheme() {
        let html = r#"<a href="//cdn.example.net/lib.js">lib</a>"#;
        let links = extract_links(&page(html, "http://example.com/"));
        assert_eq!(resolved(&links), vec!["http://cdn.example.net/lib.js"]);
    }

    #[test]
    fn test_fragment_mailto_tel_kept_raw() {
        let html = r##"
            <a href="#intro">Intro</a>
            <a href="mailto:team@example.com">Mail</a>
            <a href="tel:+1 (555) 123-4567">Call</a>
        "##;
        let links = extract_links(&page(html, "https://example.com/page"));
        assert_eq!(
            resolved(&links),
            vec!["#intro", "mailto:team@example.com", "tel:+1 (555) 123-4567"]
        );
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let html = r#"
            <a href="/a">one</a>
            <a href="https://example.com/a">same target</a>
            <a href="/b">two</a>
            <a href="/a">again</a>
        "#;
        let links = extract_links(&page(html, "https://example.com/"));
        assert_eq!(links.references.len(), 2);
        assert_eq!(links.references[0].raw_href, "/a");
        assert_eq!(links.references[1].raw_href, "/b");
    }

    #[test]
    fn test_empty_href_is_skipped() {
        let html = r#"<a href="">nothing</a><a href="   ">blank</a>"#;
        let links = extract_links(&page(html, "https://example.com/"));
        assert!(links.references.is_empty());
    }

    #[test]
    fn test_collects_element_ids() {
        let html = r#"<div id="sec1"></div><h2 id="faq">FAQ</h2><p>no id</p>"#;
        let links = extract_links(&page(html, "https://example.com/"));
        assert!(links.has_id("sec1"));
        assert!(links.has_id("faq"));
        assert_eq!(links.element_ids.len(), 2);
    }

    #[test]
    fn test_malformed_http_href_kept_raw() {
        let html = r#"<a href="http://exa mple.com/">bad</a><a href="HTTPS://">empty</a>"#;
        let links = extract_links(&page(html, "https://example.com/"));
        assert_eq!(resolved(&links), vec!["http://exa mple.com/", "HTTPS://"]);
    }

    #[test]
    fn test_base_element_changes_resolution() {
        let html = r#"
            <html><head><base href="https://static.example.org/v2/"></head>
            <body><a href="guide.html">Guide</a></body></html>
        "#;
        let links = extract_links(&page(html, "https://example.com/page"));
        assert_eq!(resolved(&links), vec!["https://static.example.org/v2/guide.html"]);
    }
}
