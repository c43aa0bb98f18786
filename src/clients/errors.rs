//! HTTP-specific error types for the Salling Group Stores SDK.
//!
//! This module contains error types for HTTP operations: response errors
//! carrying the upstream status code, network-level failures, client
//! construction failures, and request signing failures.
//!
//! # Error Handling
//!
//! The SDK uses specific error types for different failure scenarios:
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! There is no retry or backoff policy at this layer; every failure is
//! surfaced to the caller on the first occurrence.
//!
//! # Example
//!
//! ```rust,ignore
//! use salling_stores::HttpError;
//!
//! match client.get("store-id").await {
//!     Ok(Some(store)) => println!("Found: {store}"),
//!     Ok(None) => println!("No such store"),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(e) => println!("Error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The `code` field carries the upstream status code, which callers use to
/// distinguish "record absent" (404) from other failures.
///
/// # Example
///
/// ```rust
/// use salling_stores::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"error":"Not Found"}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// println!("Status {}: {}", error.code, error.message);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from the X-Request-Id header).
    pub error_reference: Option<String>,
}

impl HttpResponseError {
    /// Returns `true` if this response error is an upstream 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.code == 404
    }
}

/// Unified error type for all HTTP-related errors.
///
/// This enum provides a single error type for HTTP operations, making it
/// easier to handle errors at API boundaries. Use pattern matching to
/// handle specific error types.
///
/// # Example
///
/// ```rust,ignore
/// use salling_stores::HttpError;
///
/// match transport.get("/v1/stores/", None).await {
///     Ok(response) => { /* handle success */ }
///     Err(HttpError::Response(e)) => { /* handle API error */ }
///     Err(HttpError::Network(e)) => { /* handle network error */ }
///     Err(e) => { /* construction or signing failure */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to construct HTTP client: {0}")]
    Construction(#[source] reqwest::Error),

    /// Signing the per-request JWT failed.
    #[error("Failed to sign request: {0}")]
    Auth(#[from] jsonwebtoken::errors::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the upstream status code, if this error carries one.
    ///
    /// Network, construction, and signing failures have no status code.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
