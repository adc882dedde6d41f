//! URL processing utilities.
//!
//! - Link type detection (external vs internal)
//! - Base path joining for internal links

use url::Url;

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
///
/// # Examples
/// ```ignore
/// assert!(is_external_link("https://example.com"));
/// assert!(is_external_link("mailto:user@example.com"));
/// assert!(!is_external_link("/about"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Absolute `http`/`https` URL with a host.
pub fn is_http_url(link: &str) -> bool {
    Url::parse(link)
        .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}

/// Absolute `http`/`https` URL or a `mailto:` address.
pub fn is_http_or_mailto(link: &str) -> bool {
    is_http_url(link)
        || Url::parse(link).is_ok_and(|url| url.scheme() == "mailto" && !url.path().is_empty())
}

/// Prefix an internal path with the site base.
///
/// ```ignore
/// assert_eq!(url_with_base("/blog/", "/archive/"), "/blog/archive/");
/// assert_eq!(url_with_base("/", "about/"), "/about/");
/// ```
pub fn url_with_base(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("http://example.com"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(!is_external_link("/about"));
        assert!(!is_external_link("./file.txt"));
        assert!(!is_external_link("#section"));
    }

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://github.com/ZOUYIQAQ"));
        assert!(is_http_url("http://example.com"));
        assert!(!is_http_url("github.com"));
        assert!(!is_http_url("/about/"));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url(""));
    }

    #[test]
    fn test_is_http_or_mailto() {
        assert!(is_http_or_mailto("mailto:me@example.com"));
        assert!(is_http_or_mailto("https://example.com"));
        assert!(!is_http_or_mailto("mailto:"));
        assert!(!is_http_or_mailto("tel:+123"));
    }

    #[test]
    fn test_url_with_base() {
        assert_eq!(url_with_base("/", "/"), "/");
        assert_eq!(url_with_base("/", "/archive/"), "/archive/");
        assert_eq!(url_with_base("/blog/", "/"), "/blog/");
        assert_eq!(url_with_base("/blog/", "/archive/"), "/blog/archive/");
        assert_eq!(url_with_base("/blog/", "about/"), "/blog/about/");
    }
}
