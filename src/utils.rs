use url::Url;

use crate::error::{Result, ScrapeError};

/// Validate a base URL and reduce it to the prefix used for root-relative links
///
/// The trailing slash is stripped so that `"{base}{link}"` never doubles it.
pub fn normalize_base_url(base: &str) -> Result<String> {
    let parsed = Url::parse(base)
        .map_err(|e| ScrapeError::InvalidArgument(format!("invalid base URL '{}': {}", base, e)))?;
    if parsed.host_str().is_none() {
        return Err(ScrapeError::InvalidArgument(format!(
            "base URL '{}' has no host",
            base
        )));
    }
    Ok(base.trim_end_matches('/').to_string())
}

/// Prefix a root-relative link with the base origin
pub fn absolute_link(base: &str, link: Option<&str>) -> Option<String> {
    link.map(|l| format!("{}{}", base, l))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("https://in.bookmyshow.com/").unwrap(),
            "https://in.bookmyshow.com"
        );
        assert_eq!(
            normalize_base_url("http://127.0.0.1:8080").unwrap(),
            "http://127.0.0.1:8080"
        );
    }

    #[test]
    fn test_normalize_base_url_rejects_garbage() {
        assert!(matches!(
            normalize_base_url("not a url"),
            Err(ScrapeError::InvalidArgument(_))
        ));
        assert!(matches!(
            normalize_base_url("mailto:someone@example.com"),
            Err(ScrapeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_absolute_link() {
        let base = "https://example.com";
        assert_eq!(
            absolute_link(base, Some("/buytickets/x")),
            Some("https://example.com/buytickets/x".to_string())
        );
        assert_eq!(absolute_link(base, None), None);
    }
}
