// src/checker/normalize.rs
// =============================================================================
// Turns whatever the user typed into something we can fetch.
//
// Rules, in order:
// 1. Empty or whitespace-only input is rejected
// 2. Missing http:// or https:// gets https:// prepended
// 3. A host without any '.' gets ".com" appended to it
//
// This is a shorthand expander ("example" -> "https://example.com"), not a
// URL validator. A bad host is only noticed later when the fetch fails.
// =============================================================================

use crate::error::TargetError;

pub fn normalize_url(input: &str) -> Result<String, TargetError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TargetError::InvalidInput(input.to_string()));
    }

    let mut url = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    // Everything between "://" and the first '/', '?' or '#' is the authority
    let authority_start = url.find("://").map(|i| i + 3).unwrap_or(0);
    let authority_end = url[authority_start..]
        .find(['/', '?', '#'])
        .map(|i| authority_start + i)
        .unwrap_or(url.len());

    let authority = &url[authority_start..authority_end];
    // Skip any userinfo and stop before a port
    let host_start = authority.rfind('@').map(|i| i + 1).unwrap_or(0);
    let host_end = authority[host_start..]
        .rfind(':')
        .map(|i| host_start + i)
        .unwrap_or(authority.len());
    let host = &authority[host_start..host_end];

    // IPv6 literals are left alone
    if !host.contains('.') && !authority[host_start..].starts_with('[') {
        url.insert_str(authority_start + host_end, ".com");
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(normalize_url(""), Err(TargetError::InvalidInput(_))));
        assert!(matches!(normalize_url("   \t"), Err(TargetError::InvalidInput(_))));
    }

    #[test]
    fn test_prepends_https() {
        assert_eq!(normalize_url("example.org").unwrap(), "https://example.org");
    }

    #[test]
    fn test_keeps_existing_scheme() {
        assert_eq!(normalize_url("http://example.org/a").unwrap(), "http://example.org/a");
        assert_eq!(normalize_url(" https://example.org ").unwrap(), "https://example.org");
    }

    #[test]
    fn test_appends_com_to_bare_host() {
        assert_eq!(normalize_url("example").unwrap(), "https://example.com");
        assert_eq!(normalize_url("https://example").unwrap(), "https://example.com");
    }

    #[test]
    fn test_appends_com_to_host_not_path() {
        assert_eq!(
            normalize_url("example/docs/page.html").unwrap(),
            "https://example.com/docs/page.html"
        );
        assert_eq!(normalize_url("example?q=1").unwrap(), "https://example.com?q=1");
    }

    #[test]
    fn test_appends_com_before_port() {
        assert_eq!(normalize_url("intranet:8080/x").unwrap(), "https://intranet.com:8080/x");
    }

    #[test]
    fn test_dotted_host_untouched() {
        assert_eq!(normalize_url("127.0.0.1:3000").unwrap(), "https://127.0.0.1:3000");
    }
}
