// src/checker/http.rs
// =============================================================================
// The HTTP fetch layer.
//
// Everything that touches the network goes through the `Fetch` trait:
// - get_page: GET a page and read its HTML body
// - get_status: GET a link and only look at the status code
//
// `HttpFetcher` is the real implementation on top of reqwest. Tests use
// small in-memory fakes or a local mockito server instead.
//
// Requests are awaited one at a time by the callers; nothing here spawns.
// =============================================================================

use std::error::Error as StdError;

use async_trait::async_trait;
use reqwest::{redirect, Client};

use crate::config::CheckerConfig;
use crate::error::FetchError;

/// A fetched page: final status, the URL after redirects, and the body text
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub final_url: String,
    pub body: String,
}

impl FetchedPage {
    /// Status codes of 400 and above count as failures
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}

#[async_trait]
pub trait Fetch: Send + Sync {
    /// GET `url` and read the response body as text
    async fn get_page(&self, url: &str) -> Result<FetchedPage, FetchError>;

    /// GET `url` and return only the final status code
    async fn get_status(&self, url: &str) -> Result<u16, FetchError>;
}

/// reqwest-backed fetcher. Holds one client so connections are pooled
/// across the page fetch and all of its link checks.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &CheckerConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .redirect(redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| FetchError::Other(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get_page(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let response = self.client.get(url).send().await.map_err(categorize_error)?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;

        Ok(FetchedPage {
            status,
            final_url,
            body,
        })
    }

    async fn get_status(&self, url: &str) -> Result<u16, FetchError> {
        let response = self.client.get(url).send().await.map_err(categorize_error)?;
        Ok(response.status().as_u16())
    }
}

// Maps a reqwest error onto our FetchError kinds
//
// reqwest only exposes a few predicates (is_timeout, is_redirect, ...), so
// DNS and TLS failures are recognised from the text of the error chain.
fn categorize_error(error: reqwest::Error) -> FetchError {
    let chain = error_chain(&error);
    let lowered = chain.to_lowercase();

    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_redirect() {
        FetchError::TooManyRedirects
    } else if error.is_builder() {
        FetchError::InvalidUrl(chain)
    } else if lowered.contains("dns") || lowered.contains("failed to lookup address") {
        FetchError::Dns
    } else if lowered.contains("certificate") || lowered.contains("tls") || lowered.contains("ssl") {
        FetchError::Tls(chain)
    } else if error.is_connect() {
        FetchError::Connect(chain)
    } else {
        FetchError::Other(chain)
    }
}

// Joins an error and all of its sources into one line
fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait for fetching?
//    - The checker only needs "give me this page" and "give me this status"
//    - Code that takes `&dyn Fetch` works with the real client and with test
//      fakes that never touch the network
//
// 2. What does #[async_trait] do?
//    - It lets a trait declare async methods that can be called through
//      `dyn Fetch` (it boxes the returned futures behind the scenes)
//
// 3. Why is the client built once?
//    - reqwest::Client keeps a connection pool
//    - Reusing it means link checks on the same host share connections
// -----------------------------------------------------------------------------
