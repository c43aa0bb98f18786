//! Configuration types for the Salling Group Stores SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with the Salling Group platform.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StoresConfig`]: The main configuration struct holding all SDK settings
//! - [`StoresConfigBuilder`]: A builder for constructing [`StoresConfig`] instances
//! - [`Credentials`]: The authentication scheme (bearer token or per-request JWT)
//! - [`ApiToken`]: A validated API token newtype with masked debug output
//! - [`SecretKey`]: A validated JWT signing secret with masked debug output
//! - [`HostUrl`]: A validated host URL for overriding the upstream base URI
//!
//! # Example
//!
//! ```rust
//! use salling_stores::{Credentials, StoresConfig};
//!
//! let config = StoresConfig::builder()
//!     .credentials(Credentials::bearer("my-token").unwrap())
//!     .application_name("my-store-finder")
//!     .build()
//!     .unwrap();
//! ```

mod credentials;
mod newtypes;

pub use credentials::Credentials;
pub use newtypes::{ApiToken, HostUrl, SecretKey};

use crate::error::ConfigError;

/// Configuration for the Salling Group Stores SDK.
///
/// This struct holds all configuration needed for SDK operations: the
/// authentication credentials, an optional host override (proxies, test
/// servers), and an optional application name reported in the `User-Agent`
/// header.
///
/// # Thread Safety
///
/// `StoresConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use salling_stores::{Credentials, StoresConfig};
///
/// let config = StoresConfig::builder()
///     .credentials(Credentials::jwt("developer@example.com", "secret").unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct StoresConfig {
    credentials: Credentials,
    host: Option<HostUrl>,
    application_name: Option<String>,
}

impl StoresConfig {
    /// Creates a new builder for constructing a `StoresConfig`.
    #[must_use]
    pub fn builder() -> StoresConfigBuilder {
        StoresConfigBuilder::new()
    }

    /// Returns the authentication credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the host URL override, if configured.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the application name, if configured.
    #[must_use]
    pub fn application_name(&self) -> Option<&str> {
        self.application_name.as_deref()
    }
}

// Verify StoresConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoresConfig>();
};

/// Builder for constructing [`StoresConfig`] instances.
///
/// The only required field is `credentials`. All other fields default to
/// unset, which means the production base URI and no `User-Agent` prefix.
///
/// # Example
///
/// ```rust
/// use salling_stores::{Credentials, HostUrl, StoresConfig};
///
/// let config = StoresConfig::builder()
///     .credentials(Credentials::bearer("token").unwrap())
///     .host(HostUrl::new("https://proxy.example.com").unwrap())
///     .application_name("store-locator/2.1")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct StoresConfigBuilder {
    credentials: Option<Credentials>,
    host: Option<HostUrl>,
    application_name: Option<String>,
}

impl StoresConfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets the authentication credentials. Required.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Overrides the upstream base URI (proxies, mock servers).
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the application name reported in the `User-Agent` header.
    #[must_use]
    pub fn application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    /// Builds the [`StoresConfig`], validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if no credentials were set.
    pub fn build(self) -> Result<StoresConfig, ConfigError> {
        let credentials = self.credentials.ok_or(ConfigError::MissingRequiredField {
            field: "credentials",
        })?;

        Ok(StoresConfig {
            credentials,
            host: self.host,
            application_name: self.application_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bearer() -> Credentials {
        Credentials::bearer("test-token").unwrap()
    }

    #[test]
    fn test_builder_requires_credentials() {
        let result = StoresConfig::builder().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "credentials"
            })
        ));
    }

    #[test]
    fn test_builder_with_only_credentials() {
        let config = StoresConfig::builder()
            .credentials(bearer())
            .build()
            .unwrap();

        assert!(config.host().is_none());
        assert!(config.application_name().is_none());
    }

    #[test]
    fn test_builder_with_all_fields() {
        let config = StoresConfig::builder()
            .credentials(bearer())
            .host(HostUrl::new("https://proxy.example.com").unwrap())
            .application_name("store-locator/2.1")
            .build()
            .unwrap();

        assert_eq!(
            config.host().map(AsRef::as_ref),
            Some("https://proxy.example.com")
        );
        assert_eq!(config.application_name(), Some("store-locator/2.1"));
    }

    #[test]
    fn test_config_is_cloneable() {
        let config = StoresConfig::builder()
            .credentials(bearer())
            .build()
            .unwrap();
        let cloned = config.clone();
        assert_eq!(cloned.application_name(), config.application_name());
    }
}
