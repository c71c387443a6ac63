// src/error.rs
// =============================================================================
// Error types shared across the tool.
//
// Two families:
// - TargetError: a whole target (one URL from the user) is skipped
// - FetchError: a single HTTP request failed at the network level
//
// Neither is fatal to a batch run. A FetchError on a link becomes a Broken
// verdict, and a TargetError is reported and the next target is processed.
// The application layer (main.rs, output writers) uses anyhow on top of these.
// =============================================================================

use thiserror::Error;

/// Reasons a target URL is skipped before any link work happens
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// Empty or whitespace-only input
    #[error("invalid input: {0:?}")]
    InvalidInput(String),

    /// robots.txt forbids fetching the page
    #[error("access to {0} is disallowed by robots.txt")]
    RobotsDisallowed(String),

    /// robots.txt could not be read because of a network failure
    #[error("could not read robots.txt for {0}: {1}")]
    RobotsUnreachable(String, FetchError),
}

/// Network-level failure of one HTTP request
///
/// The kind is kept even though every kind currently collapses to the same
/// Broken verdict, so logs can say why a link failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("could not resolve hostname")]
    Dns,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("TLS error: {0}")]
    Tls(String),

    #[error("too many redirects")]
    TooManyRedirects,

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_error_display() {
        let err = TargetError::RobotsDisallowed("https://example.com".to_string());
        assert_eq!(
            err.to_string(),
            "access to https://example.com is disallowed by robots.txt"
        );

        let err = TargetError::RobotsUnreachable("https://down.example".to_string(), FetchError::Dns);
        assert_eq!(
            err.to_string(),
            "could not read robots.txt for https://down.example: could not resolve hostname"
        );

        let err = TargetError::InvalidInput("   ".to_string());
        assert_eq!(err.to_string(), "invalid input: \"   \"");
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
        assert_eq!(
            FetchError::Connect("refused".to_string()).to_string(),
            "connection failed: refused"
        );
    }
}
