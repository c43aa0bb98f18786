//! Lazy pagination over listing endpoints.
//!
//! This module provides the [`Traverser`] type, a pull-based iterator over
//! successive result pages of a listing request. No page is fetched until the
//! caller asks for it; advancing the traverser is the only operation that
//! performs network I/O.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::HttpError;
use crate::clients::http_client::Transport;

/// A lazy, pull-based iterator over successive result pages.
///
/// A `Traverser` is constructed from a transport handle, a base path, and a
/// parameter mapping. Each call to [`next`](Self::next) fetches one page and
/// advances the page cursor from the response's `Link` header; once the
/// upstream reports no further page, `next` returns `Ok(None)`.
///
/// # Example
///
/// ```rust,ignore
/// let mut stores = client.query(params);
/// while let Some(page) = stores.next().await? {
///     for store in page {
///         println!("{store}");
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Traverser<'a, T> {
    transport: &'a T,
    path: String,
    params: HashMap<String, String>,
    cursor: Option<u32>,
    per_page: Option<u32>,
    total_count: Option<u64>,
}

impl<'a, T: Transport> Traverser<'a, T> {
    /// Creates a traverser over `path` with the given parameter mapping,
    /// positioned before the first page.
    pub(crate) fn new(transport: &'a T, path: impl Into<String>, params: HashMap<String, String>) -> Self {
        Self {
            transport,
            path: path.into(),
            params,
            cursor: Some(1),
            per_page: None,
            total_count: None,
        }
    }

    /// Sets the number of records requested per page (the `per_page`
    /// parameter).
    #[must_use]
    pub fn page_size(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Returns the total number of records reported by the upstream, once a
    /// page has been fetched.
    #[must_use]
    pub const fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// Fetches the next page of records.
    ///
    /// Returns `Ok(None)` once the sequence is exhausted: the previous
    /// response carried no `Link rel="next"` entry, or the upstream returned
    /// an empty page.
    ///
    /// # Errors
    ///
    /// Transport failures propagate unchanged.
    pub async fn next(&mut self) -> Result<Option<Vec<Value>>, HttpError> {
        let Some(page) = self.cursor else {
            return Ok(None);
        };

        let mut params = self.params.clone();
        params.insert("page".to_string(), page.to_string());
        if let Some(per_page) = self.per_page {
            params.insert("per_page".to_string(), per_page.to_string());
        }

        let response = self.transport.get(&self.path, Some(&params)).await?;
        self.cursor = response.next_page;
        self.total_count = response.total_count;

        // Records are opaque pass-through values. A non-array body is
        // surfaced as a single-record page.
        let records = match response.body {
            Value::Array(items) => items,
            Value::Null => Vec::new(),
            other => vec![other],
        };

        if records.is_empty() {
            self.cursor = None;
            return Ok(None);
        }

        Ok(Some(records))
    }

    /// Drains the traverser, collecting every remaining record into one `Vec`.
    ///
    /// # Errors
    ///
    /// Transport failures propagate unchanged; records from pages fetched
    /// before the failure are discarded.
    pub async fn fetch_all(mut self) -> Result<Vec<Value>, HttpError> {
        let mut records = Vec::new();
        while let Some(page) = self.next().await? {
            records.extend(page);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::HttpResponseError;
    use crate::clients::http_response::HttpResponse;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays prepared responses and records every request it receives.
    struct StubTransport {
        calls: Mutex<Vec<(String, HashMap<String, String>)>>,
        responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    }

    impl StubTransport {
        fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                responses: Mutex::new(responses.into()),
            }
        }

        fn calls(&self) -> Vec<(String, HashMap<String, String>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Transport for StubTransport {
        async fn get(
            &self,
            path: &str,
            query: Option<&HashMap<String, String>>,
        ) -> Result<HttpResponse, HttpError> {
            self.calls
                .lock()
                .unwrap()
                .push((path.to_string(), query.cloned().unwrap_or_default()));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected request")
        }
    }

    fn page_response(records: serde_json::Value, next_page: Option<u32>) -> HttpResponse {
        let mut headers = HashMap::new();
        if let Some(next) = next_page {
            headers.insert(
                "link".to_string(),
                vec![format!(
                    r#"<https://api.sallinggroup.com/v1/stores/?page={next}>; rel="next""#
                )],
            );
        }
        headers.insert("x-total-count".to_string(), vec!["5".to_string()]);
        HttpResponse::new(200, headers, records)
    }

    #[tokio::test]
    async fn test_no_request_until_first_advance() {
        let transport = StubTransport::new(vec![Ok(page_response(json!([]), None))]);
        let traverser = Traverser::new(&transport, "/v1/stores/", HashMap::new());

        assert!(transport.calls().is_empty());
        drop(traverser);
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_follows_link_header_across_pages() {
        let transport = StubTransport::new(vec![
            Ok(page_response(json!([{"uuid": "a"}, {"uuid": "b"}]), Some(2))),
            Ok(page_response(json!([{"uuid": "c"}]), None)),
        ]);
        let mut traverser = Traverser::new(&transport, "/v1/stores/", HashMap::new());

        let first = traverser.next().await.unwrap().unwrap();
        assert_eq!(first.len(), 2);

        let second = traverser.next().await.unwrap().unwrap();
        assert_eq!(second.len(), 1);

        // Exhausted: no further requests are made
        assert!(traverser.next().await.unwrap().is_none());

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].1.get("page"), Some(&"1".to_string()));
        assert_eq!(calls[1].1.get("page"), Some(&"2".to_string()));
    }

    #[tokio::test]
    async fn test_forwards_params_on_every_page() {
        let transport = StubTransport::new(vec![
            Ok(page_response(json!([{"uuid": "a"}]), Some(2))),
            Ok(page_response(json!([{"uuid": "b"}]), None)),
        ]);
        let mut params = HashMap::new();
        params.insert("brand".to_string(), "netto".to_string());
        let mut traverser = Traverser::new(&transport, "/v1/stores/", params);

        traverser.next().await.unwrap();
        traverser.next().await.unwrap();

        for (_, query) in transport.calls() {
            assert_eq!(query.get("brand"), Some(&"netto".to_string()));
        }
    }

    #[tokio::test]
    async fn test_page_size_sets_per_page_param() {
        let transport = StubTransport::new(vec![Ok(page_response(json!([{"uuid": "a"}]), None))]);
        let mut traverser =
            Traverser::new(&transport, "/v1/stores/", HashMap::new()).page_size(10);

        traverser.next().await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].1.get("per_page"), Some(&"10".to_string()));
    }

    #[tokio::test]
    async fn test_empty_page_terminates() {
        let transport = StubTransport::new(vec![Ok(page_response(json!([]), Some(2)))]);
        let mut traverser = Traverser::new(&transport, "/v1/stores/", HashMap::new());

        assert!(traverser.next().await.unwrap().is_none());
        assert!(traverser.next().await.unwrap().is_none());
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_total_count_available_after_first_page() {
        let transport = StubTransport::new(vec![Ok(page_response(json!([{"uuid": "a"}]), None))]);
        let mut traverser = Traverser::new(&transport, "/v1/stores/", HashMap::new());

        assert!(traverser.total_count().is_none());
        traverser.next().await.unwrap();
        assert_eq!(traverser.total_count(), Some(5));
    }

    #[tokio::test]
    async fn test_fetch_all_drains_every_page() {
        let transport = StubTransport::new(vec![
            Ok(page_response(json!([{"uuid": "a"}, {"uuid": "b"}]), Some(2))),
            Ok(page_response(json!([{"uuid": "c"}]), Some(3))),
            Ok(page_response(json!([{"uuid": "d"}]), None)),
        ]);
        let traverser = Traverser::new(&transport, "/v1/stores/", HashMap::new());

        let records = traverser.fetch_all().await.unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[3]["uuid"], "d");
    }

    #[tokio::test]
    async fn test_transport_errors_propagate_unchanged() {
        let transport = StubTransport::new(vec![Err(HttpError::Response(HttpResponseError {
            code: 500,
            message: r#"{"error":"Internal Server Error"}"#.to_string(),
            error_reference: None,
        }))]);
        let mut traverser = Traverser::new(&transport, "/v1/stores/", HashMap::new());

        let err = traverser.next().await.unwrap_err();
        assert_eq!(err.status_code(), Some(500));
    }
}
