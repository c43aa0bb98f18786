//! HTTP client types for Salling Group API communication.
//!
//! This module provides the foundational HTTP layer for making authenticated
//! requests to the Salling Group API, and the lazy pagination traverser built
//! on top of it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Transport`]: The capability trait for issuing authenticated GET requests
//! - [`HttpClient`]: The concrete async adapter for the real upstream service
//! - [`HttpResponse`]: A parsed response from the API
//! - [`PageLinks`]: Pagination links parsed from the `Link` header
//! - [`Traverser`]: A lazy, pull-based iterator over successive result pages
//! - [`HttpError`] / [`HttpResponseError`]: HTTP-level error types
//!
//! # Example
//!
//! ```rust,ignore
//! use salling_stores::clients::{HttpClient, Transport};
//! use salling_stores::{Credentials, StoresConfig};
//!
//! let config = StoresConfig::builder()
//!     .credentials(Credentials::bearer("token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config)?;
//! let response = client.get("/v1/stores/", None).await?;
//! ```
//!
//! # Failure Behavior
//!
//! There is no retry, backoff, or rate-limit handling at this layer. A non-2xx
//! response is surfaced as [`HttpError::Response`] carrying the upstream
//! status code; connection-level failures are surfaced as
//! [`HttpError::Network`]. Callers that want retry policies wrap the client
//! themselves.

mod errors;
mod http_client;
mod http_response;
mod traverser;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, Transport, DEFAULT_BASE_URI, SDK_VERSION};
pub use http_response::{HttpResponse, PageLinks};
pub use traverser::Traverser;
