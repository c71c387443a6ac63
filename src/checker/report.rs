// src/checker/report.rs
// =============================================================================
// Collects the outcome of one page's link checks.
//
// Two ordered sets, both keyed by link identity (resolved URL, or the raw
// text for #fragment / mailto: / tel: links):
// - distinct_links: every link that was classified and validated
// - broken_links:   the ones that came back Broken
//
// A link is always recorded as distinct before it can be recorded as broken,
// so broken_links is a subset of distinct_links. The one exception is a page
// whose own fetch failed: then the page URL is the only broken entry and
// nothing was extracted.
//
// One aggregator is created per page and thrown away afterwards, so nothing
// leaks from one target into the next.
// =============================================================================

use std::collections::HashMap;

use super::validate::Verdict;

#[derive(Debug, Default)]
pub struct LinkAggregator {
    distinct: Vec<String>,
    broken: Vec<String>,
    verdicts: HashMap<String, Verdict>,
}

impl LinkAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The verdict already recorded for `identity`, if any
    ///
    /// Callers use this to skip validating the same link twice.
    pub fn verdict_for(&self, identity: &str) -> Option<Verdict> {
        self.verdicts.get(identity).copied()
    }

    /// Records a verdict. Re-recording an identity has no effect.
    pub fn record(&mut self, identity: &str, verdict: Verdict) {
        if self.verdicts.contains_key(identity) {
            return;
        }
        self.verdicts.insert(identity.to_string(), verdict);
        self.distinct.push(identity.to_string());

        if verdict.is_broken() {
            self.broken.push(identity.to_string());
        }
    }

    pub fn finish(self, page_url: impl Into<String>) -> PageLinkReport {
        PageLinkReport {
            page_url: page_url.into(),
            distinct_links: self.distinct,
            broken_links: self.broken,
        }
    }
}

/// Read-only summary handed to the report writers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinkReport {
    pub page_url: String,
    pub distinct_links: Vec<String>,
    pub broken_links: Vec<String>,
}

impl PageLinkReport {
    /// The report for a page whose own fetch failed
    pub fn page_unreachable(page_url: impl Into<String>) -> Self {
        let page_url = page_url.into();
        Self {
            broken_links: vec![page_url.clone()],
            distinct_links: Vec::new(),
            page_url,
        }
    }

    pub fn distinct_link_count(&self) -> usize {
        self.distinct_links.len()
    }

    pub fn broken_link_count(&self) -> usize {
        self.broken_links.len()
    }

    pub fn has_broken_links(&self) -> bool {
        !self.broken_links.is_empty()
    }
}
