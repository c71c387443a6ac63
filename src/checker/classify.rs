// src/checker/classify.rs
// =============================================================================
// Sorts each extracted link into one of a fixed set of categories.
//
// The category decides which validation rule applies:
//   mailto:...        -> MailTo
//   tel:...           -> Tel
//   #...              -> Fragment
//   http(s) after join -> AbsoluteHttp
//
// Anything else (javascript:, data:, ftp:, empty hrefs) gets no category and
// is dropped: it is neither counted nor validated.
// =============================================================================

use super::html::LinkReference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkCategory {
    AbsoluteHttp,
    MailTo,
    Tel,
    Fragment,
}

impl LinkCategory {
    /// Classifies a reference by its raw prefix first, then by the scheme
    /// of the resolved URL. Returns None for links we do not check.
    pub fn of(reference: &LinkReference) -> Option<Self> {
        let raw = reference.raw_href.as_str();

        if raw.starts_with("mailto:") {
            Some(Self::MailTo)
        } else if raw.starts_with("tel:") {
            Some(Self::Tel)
        } else if raw.starts_with('#') {
            Some(Self::Fragment)
        } else if has_http_scheme(&reference.resolved_url) {
            Some(Self::AbsoluteHttp)
        } else {
            None
        }
    }
}

/// True for "http://" and "https://" in any letter case
pub(super) fn has_http_scheme(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
