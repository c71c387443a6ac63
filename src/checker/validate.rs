// src/checker/validate.rs
// =============================================================================
// Decides whether a single link is broken.
//
// Each category has its own rule:
// - AbsoluteHttp: GET the URL; status >= 400 or any network error is Broken
// - MailTo:       the address must look like local@domain.tld ("mailto:#" is
//                 an accepted placeholder)
// - Tel:          digits, spaces, parentheses and hyphens, optional leading +
// - Fragment:     the id must exist on the same page ("#" alone is fine)
//
// Only AbsoluteHttp touches the network. A failure here only ever affects the
// one link being checked.
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;

use super::classify::LinkCategory;
use super::html::{ExtractedLinks, LinkReference};
use super::http::Fetch;
use crate::error::FetchError;

// Constant patterns, known to compile
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9\s()-]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Broken,
}

impl Verdict {
    pub fn is_broken(self) -> bool {
        self == Verdict::Broken
    }

    fn from_check(ok: bool) -> Self {
        if ok {
            Verdict::Valid
        } else {
            Verdict::Broken
        }
    }
}

pub struct LinkValidator<'a> {
    fetcher: &'a dyn Fetch,
}

impl<'a> LinkValidator<'a> {
    pub fn new(fetcher: &'a dyn Fetch) -> Self {
        Self { fetcher }
    }

    /// Runs the rule for `category` against one reference
    ///
    /// `page` supplies the element ids used by fragment checks.
    pub async fn validate(
        &self,
        reference: &LinkReference,
        category: LinkCategory,
        page: &ExtractedLinks,
    ) -> Verdict {
        match category {
            LinkCategory::AbsoluteHttp => {
                match self.check_http(&reference.resolved_url).await {
                    Ok(verdict) => verdict,
                    Err(e) => {
                        log::debug!("{} failed: {}", reference.resolved_url, e);
                        Verdict::Broken
                    }
                }
            }
            LinkCategory::MailTo => check_mailto(&reference.raw_href),
            LinkCategory::Tel => check_tel(&reference.raw_href),
            LinkCategory::Fragment => check_fragment(&reference.raw_href, page),
        }
    }

    /// GETs the URL and judges it by status code
    ///
    /// Network errors are returned as-is so the caller can see what went
    /// wrong before collapsing them into a Broken verdict.
    pub async fn check_http(&self, url: &str) -> Result<Verdict, FetchError> {
        let status = self.fetcher.get_status(url).await?;
        log::debug!("{} -> HTTP {}", url, status);
        Ok(Verdict::from_check(status < 400))
    }
}

pub fn check_mailto(href: &str) -> Verdict {
    if href == "mailto:#" {
        return Verdict::Valid;
    }
    let address = href.strip_prefix("mailto:").unwrap_or(href);
    Verdict::from_check(EMAIL_PATTERN.is_match(address))
}

pub fn check_tel(href: &str) -> Verdict {
    let number = href.strip_prefix("tel:").unwrap_or(href);
    Verdict::from_check(
        PHONE_PATTERN.is_match(number) && number.chars().any(|c| c.is_ascii_digit()),
    )
}

pub fn check_fragment(href: &str, page: &ExtractedLinks) -> Verdict {
    if href == "#" {
        return Verdict::Valid;
    }
    let id = href.strip_prefix('#').unwrap_or(href);
    Verdict::from_check(page.has_id(id))
}
