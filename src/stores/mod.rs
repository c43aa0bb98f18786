//! Client for the Salling Group Stores API.
//!
//! This module provides the [`StoresClient`] type, the single point of
//! configuration for the authenticated transport handle and the base
//! resource path, together with the [`StoresQuery`] builder.

mod query;

pub use query::StoresQuery;

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::{HttpClient, HttpError, Transport, Traverser};
use crate::config::StoresConfig;

/// Base path of the stores resource.
const BASE_PATH: &str = "/v1/stores/";

/// Client for the Salling Group Stores API.
///
/// A `StoresClient` owns a configured transport handle and exposes every way
/// to reach the stores resource: direct fetch by identifier, raw
/// parameterized listing, unfiltered listing, and query-builder construction.
///
/// The client is immutable after construction; independent calls may be
/// issued concurrently without coordination.
///
/// # Example
///
/// ```rust,no_run
/// use salling_stores::{Credentials, StoresClient, StoresConfig};
///
/// # async fn run() -> Result<(), salling_stores::HttpError> {
/// let config = StoresConfig::builder()
///     .credentials(Credentials::bearer("my-token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = StoresClient::new(&config)?;
///
/// // Fetch one store; a missing store is None, not an error.
/// let store = client.get("4d2b0b75-e7f8-4534-9d4e-46eb8aa2ba59").await?;
///
/// // List stores of one brand.
/// let mut stores = client.begin_query().of_brand("netto").execute();
/// while let Some(page) = stores.next().await? {
///     for store in page {
///         println!("{}", store["name"]);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct StoresClient<T = HttpClient> {
    http: T,
}

// Verify the default client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoresClient>();
};

impl StoresClient {
    /// Initializes a new stores client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Construction`] if the transport handle cannot be
    /// created; the error propagates unchanged.
    pub fn new(config: &StoresConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }
}

impl<T: Transport> StoresClient<T> {
    /// Creates a stores client over an arbitrary transport.
    ///
    /// This is the substitution seam: production code uses
    /// [`StoresClient::new`], tests bind a transport double.
    pub const fn with_transport(transport: T) -> Self {
        Self { http: transport }
    }

    /// Gets a specific store.
    ///
    /// Returns `Ok(None)` if the upstream reports the store does not exist
    /// (status 404). Callers must distinguish "record absent" (`None`) from
    /// "request failed" (an error).
    ///
    /// # Errors
    ///
    /// Any failure other than an upstream 404 propagates unchanged.
    pub async fn get(&self, store_id: &str) -> Result<Option<Value>, HttpError> {
        let path = format!("{BASE_PATH}{store_id}");
        match self.http.get(&path, None).await {
            Ok(response) => Ok(Some(response.body)),
            Err(HttpError::Response(err)) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Queries stores based on search parameters.
    ///
    /// The parameter mapping is forwarded as-is; no validation is performed.
    /// Returns a lazy traverser; no page is fetched until it is advanced.
    #[must_use]
    pub fn query(&self, params: HashMap<String, String>) -> Traverser<'_, T> {
        Traverser::new(&self.http, BASE_PATH, params)
    }

    /// Gets all stores.
    #[must_use]
    pub fn get_all(&self) -> Traverser<'_, T> {
        self.query(HashMap::new())
    }

    /// Begins a store query. Chain filter calls on the returned builder and
    /// run it with [`StoresQuery::execute`].
    #[must_use]
    pub fn begin_query(&self) -> StoresQuery<'_, T> {
        StoresQuery::new(self)
    }
}
