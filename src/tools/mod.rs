// src/tools/mod.rs
// =============================================================================
// Smaller single-page tools built on the same fetch layer and extractor as
// the broken link checker:
// - pages: internal pages linked from a page
// - social: links to social media sites
//
// Neither validates anything; they only list what they find.
// =============================================================================

mod pages;
mod social;

pub use pages::find_pages;
pub use social::find_social_links;

use url::Url;

use crate::checker::{Fetch, PageDocument};

/// The links one tool found on one page, in order of appearance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundLinks {
    pub page_url: String,
    pub links: Vec<String>,
}

impl FoundLinks {
    pub fn empty(page_url: &str) -> Self {
        Self {
            page_url: page_url.to_string(),
            links: Vec::new(),
        }
    }
}

// Fetches a page for the listing tools. A failed fetch is logged and yields
// None, which the tools report as an empty list.
async fn fetch_document(fetcher: &dyn Fetch, page_url: &str) -> Option<PageDocument> {
    let page = match fetcher.get_page(page_url).await {
        Ok(page) if page.is_error() => {
            log::warn!("{} returned HTTP {}", page_url, page.status);
            return None;
        }
        Ok(page) => page,
        Err(e) => {
            log::warn!("Error fetching {}: {}", page_url, e);
            return None;
        }
    };

    let base_url = Url::parse(&page.final_url)
        .or_else(|_| Url::parse(page_url))
        .ok()?;
    Some(PageDocument::new(page.body, base_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::FetchedPage;
    use crate::error::FetchError;
    use async_trait::async_trait;

    struct OnePage(Result<FetchedPage, FetchError>);

    #[async_trait]
    impl Fetch for OnePage {
        async fn get_page(&self, _url: &str) -> Result<FetchedPage, FetchError> {
            self.0.clone()
        }

        async fn get_status(&self, _url: &str) -> Result<u16, FetchError> {
            unreachable!()
        }
    }

    fn ok_page(status: u16, body: &str) -> OnePage {
        OnePage(Ok(FetchedPage {
            status,
            final_url: "https://example.com/".to_string(),
            body: body.to_string(),
        }))
    }

    const HTML: &str = r#"
        <a href="/team">Team</a>
        <a href="https://github.com/example">Code</a>
    "#;

    #[tokio::test]
    async fn test_tools_on_fetched_page() {
        let fetcher = ok_page(200, HTML);

        let pages = find_pages(&fetcher, "https://example.com/").await;
        assert_eq!(pages.links, vec!["https://example.com/team"]);

        let social = find_social_links(&fetcher, "https://example.com/").await;
        assert_eq!(social.links, vec!["https://github.com/example"]);
    }

    #[tokio::test]
    async fn test_failed_fetch_gives_empty_lists() {
        let not_found = ok_page(404, HTML);
        assert!(find_pages(&not_found, "https://example.com/").await.links.is_empty());

        let offline = OnePage(Err(FetchError::Timeout));
        let social = find_social_links(&offline, "https://example.com/").await;
        assert_eq!(social, FoundLinks::empty("https://example.com/"));
    }
}
