//! `link` header handling for paginated GitHub endpoints
//!
//! See <https://docs.github.com/en/rest/using-the-rest-api/using-pagination-in-the-rest-api#using-link-headers>.
//! Only the `rel="next"` relation is followed.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// GitHub's documented maximum page size
pub const MAX_PER_PAGE: u32 = 100;

/// Page bound used when the caller does not pick one
pub const DEFAULT_MAX_PAGES: usize = 10;

static NEXT_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<(?P<next_url>[^>]+)>;\s*rel="next""#).expect("valid regex"));

/// Endpoint and query of the page to request next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPage {
    /// Path relative to the client's base URL
    pub endpoint: String,
    /// Decoded query pairs, in link order
    pub params: Vec<(String, String)>,
}

/// Extract the `rel="next"` URL from a `link` header value
pub fn next_link(header: &str) -> Option<&str> {
    NEXT_LINK
        .captures(header)
        .and_then(|caps| caps.name("next_url"))
        .map(|m| m.as_str())
}

/// Split an absolute next-page URL into endpoint and query params.
///
/// `base_path` is the path component of the client's base URL; when the link
/// path starts with it the prefix is removed so it is not sent twice.
pub fn split_next_url(next_url: &str, base_path: &str) -> Result<NextPage> {
    let parsed = Url::parse(next_url)
        .map_err(|e| Error::Pagination(format!("invalid next link {next_url}: {e}")))?;

    let path = parsed.path();
    let base_path = base_path.trim_end_matches('/');
    let endpoint = match path.strip_prefix(base_path) {
        Some(rest) if !base_path.is_empty() && rest.starts_with('/') => rest,
        _ => path,
    };

    let params = parsed
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    Ok(NextPage {
        endpoint: endpoint.to_string(),
        params,
    })
}

/// Resolve the next page from a `link` header, if there is one
pub fn next_page(header: Option<&str>, base_path: &str) -> Result<Option<NextPage>> {
    match header.and_then(next_link) {
        Some(url) => split_next_url(url, base_path).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_link_single() {
        let header = r#"<https://api.github.com/search/code?q=x&page=2>; rel="next""#;
        assert_eq!(
            next_link(header),
            Some("https://api.github.com/search/code?q=x&page=2")
        );
    }

    #[test]
    fn test_next_link_among_other_relations() {
        let header = concat!(
            r#"<https://api.github.com/search/code?q=x&page=1>; rel="prev", "#,
            r#"<https://api.github.com/search/code?q=x&page=3>; rel="next", "#,
            r#"<https://api.github.com/search/code?q=x&page=5>; rel="last""#
        );
        assert_eq!(
            next_link(header),
            Some("https://api.github.com/search/code?q=x&page=3")
        );
    }

    #[test]
    fn test_no_next_relation() {
        let header = concat!(
            r#"<https://api.github.com/search/code?q=x&page=1>; rel="prev", "#,
            r#"<https://api.github.com/search/code?q=x&page=1>; rel="first""#
        );
        assert_eq!(next_link(header), None);
        assert_eq!(next_page(Some(header), "/").unwrap(), None);
        assert_eq!(next_page(None, "/").unwrap(), None);
    }

    #[test]
    fn test_split_decodes_query() {
        let page = split_next_url(
            "https://www.example.com/search/code?q=test+in%3Afile+repo%3Atestorg%2Ftestrepo&per_page=100&page=2",
            "/",
        )
        .unwrap();
        assert_eq!(page.endpoint, "/search/code");
        assert_eq!(
            page.params,
            vec![
                ("q".to_string(), "test in:file repo:testorg/testrepo".to_string()),
                ("per_page".to_string(), "100".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_split_strips_enterprise_prefix() {
        let page =
            split_next_url("https://ghe.example.com/api/v3/search/code?page=2", "/api/v3")
                .unwrap();
        assert_eq!(page.endpoint, "/search/code");
    }

    #[test]
    fn test_split_keeps_path_without_matching_prefix() {
        let page =
            split_next_url("https://ghe.example.com/api/v30/search/code", "/api/v3").unwrap();
        assert_eq!(page.endpoint, "/api/v30/search/code");
    }

    #[test]
    fn test_relative_link_rejected() {
        let err = split_next_url("/search/code?page=2", "/").unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Pagination);
    }
}
