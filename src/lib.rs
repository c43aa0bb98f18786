//! # Salling Group Stores SDK
//!
//! A Rust SDK for the Salling Group Stores API, providing type-safe
//! configuration, authentication handling, and a fluent query builder for
//! store lookups.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`StoresConfig`] and [`StoresConfigBuilder`]
//! - Validated newtypes for credentials and host values
//! - Bearer-token and per-request JWT authentication via [`Credentials`]
//! - An async transport handle behind the [`clients::Transport`] seam
//! - Lazy, pull-based pagination via [`Traverser`]
//! - A fluent store query builder via [`StoresQuery`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use salling_stores::{Credentials, StoresClient, StoresConfig};
//!
//! # async fn run() -> Result<(), salling_stores::HttpError> {
//! // Create configuration using the builder pattern
//! let config = StoresConfig::builder()
//!     .credentials(Credentials::bearer("your-api-token").unwrap())
//!     .application_name("store-locator/1.0")
//!     .build()
//!     .unwrap();
//!
//! let client = StoresClient::new(&config)?;
//!
//! // Fetch a single store by ID. A missing store is `None`, not an error.
//! if let Some(store) = client.get("4d2b0b75-e7f8-4534-9d4e-46eb8aa2ba59").await? {
//!     println!("{}", store["name"]);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Querying Stores
//!
//! Build a listing request with the fluent query builder, then iterate the
//! result pages lazily:
//!
//! ```rust,no_run
//! # use salling_stores::StoresClient;
//! # async fn run(client: StoresClient) -> Result<(), salling_stores::HttpError> {
//! let mut stores = client
//!     .begin_query()
//!     .of_brand("netto")
//!     .in_city("Aarhus")
//!     .pick(["name", "address"])
//!     .execute();
//!
//! while let Some(page) = stores.next().await? {
//!     for store in page {
//!         println!("{}", store["name"]);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Later calls to the same filter silently override earlier ones, so
//! chaining order never matters. The equivalent raw form passes the
//! parameter mapping directly:
//!
//! ```rust,no_run
//! # use std::collections::HashMap;
//! # use salling_stores::StoresClient;
//! # async fn run(client: StoresClient) -> Result<(), salling_stores::HttpError> {
//! let mut params = HashMap::new();
//! params.insert("brand".to_string(), "netto".to_string());
//! params.insert("city".to_string(), "Aarhus".to_string());
//!
//! let stores = client.query(params).fetch_all().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## JWT Authentication
//!
//! For credentials issued as an issuer/secret pair, the SDK signs a fresh
//! HS256 token for every request:
//!
//! ```rust
//! use salling_stores::{Credentials, StoresConfig};
//!
//! let config = StoresConfig::builder()
//!     .credentials(Credentials::jwt("developer@example.com", "your-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All handle types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Lazy pagination**: No page is fetched until the traverser is advanced
//! - **No hidden policy**: No retries, caching, or rate limiting; failures
//!   surface to the caller on first occurrence

pub mod clients;
pub mod config;
pub mod error;
pub mod stores;

// Re-export public types at crate root for convenience
pub use config::{ApiToken, Credentials, HostUrl, SecretKey, StoresConfig, StoresConfigBuilder};
pub use error::ConfigError;
pub use stores::{StoresClient, StoresQuery};

// Re-export HTTP client types
pub use clients::{HttpClient, HttpError, HttpResponse, HttpResponseError, PageLinks, Traverser};
