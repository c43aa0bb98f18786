//! HTTP response types for the Salling Group Stores SDK.
//!
//! This module provides the [`HttpResponse`] type and related types for
//! parsing and accessing API response data.

use std::collections::HashMap;

/// Pagination links parsed from the `Link` header.
///
/// The Salling Group API uses page-number pagination: listing responses
/// carry a `Link` header whose URLs contain a `page` query parameter.
///
/// # Example
///
/// ```rust
/// use salling_stores::PageLinks;
///
/// let link = r#"<https://api.sallinggroup.com/v1/stores/?page=3>; rel="next", <https://api.sallinggroup.com/v1/stores/?page=1>; rel="prev""#;
/// let links = PageLinks::parse_link_header(link);
/// assert_eq!(links.next_page, Some(3));
/// assert_eq!(links.prev_page, Some(1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageLinks {
    /// The page number of the previous page, if available.
    pub prev_page: Option<u32>,
    /// The page number of the next page, if available.
    pub next_page: Option<u32>,
}

impl PageLinks {
    /// Parses pagination links from a `Link` header value.
    ///
    /// The header format is `<url>; rel="next", <url>; rel="prev"`.
    /// Entries with other `rel` types (`first`, `last`) are ignored.
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut result = Self::default();

        for link in header_value.split(',') {
            let link = link.trim();

            let rel = link.split(';').find_map(|part| {
                let part = part.trim();
                part.strip_prefix("rel=").map(|rel| rel.trim_matches('"'))
            });

            let url = link
                .split(';')
                .next()
                .map(|s| s.trim().trim_start_matches('<').trim_end_matches('>'));

            if let (Some(rel), Some(url)) = (rel, url) {
                if let Some(page) = Self::extract_page(url) {
                    match rel {
                        "prev" | "previous" => result.prev_page = Some(page),
                        "next" => result.next_page = Some(page),
                        _ => {}
                    }
                }
            }
        }

        result
    }

    /// Extracts the `page` parameter from a URL.
    fn extract_page(url: &str) -> Option<u32> {
        let query_start = url.find('?')?;
        let query = &url[query_start + 1..];

        for param in query.split('&') {
            let mut parts = param.splitn(2, '=');
            if let (Some(key), Some(value)) = (parts.next(), parts.next()) {
                if key == "page" {
                    return value.parse().ok();
                }
            }
        }

        None
    }
}

/// An HTTP response from the Salling Group API.
///
/// Contains the response status code, headers, body, and parsed pagination
/// headers (`Link`, `X-Total-Count`).
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Page number of the previous page (from the `Link` header).
    pub prev_page: Option<u32>,
    /// Page number of the next page (from the `Link` header).
    pub next_page: Option<u32>,
    /// Total number of records across all pages (from `X-Total-Count`).
    pub total_count: Option<u64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with automatic header parsing.
    ///
    /// This constructor parses the pagination headers automatically:
    /// - `Link` -> `prev_page`, `next_page`
    /// - `X-Total-Count` -> `total_count`
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let (prev_page, next_page) = headers
            .get("link")
            .and_then(|values| values.first())
            .map_or((None, None), |link| {
                let links = PageLinks::parse_link_header(link);
                (links.prev_page, links.next_page)
            });

        let total_count = headers
            .get("x-total-count")
            .and_then(|values| values.first())
            .and_then(|value| value.parse().ok());

        Self {
            code,
            headers,
            body,
            prev_page,
            next_page,
            total_count,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
