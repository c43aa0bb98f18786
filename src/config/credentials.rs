//! Authentication credentials for the Salling Group API.
//!
//! The upstream API accepts two schemes: a static bearer token, or a
//! per-request JWT minted from an issuer identity and a shared secret.

use crate::config::newtypes::{ApiToken, SecretKey};
use crate::error::ConfigError;

/// Credentials used to authenticate requests against the Salling Group API.
///
/// # Example
///
/// ```rust
/// use salling_stores::Credentials;
///
/// // Static bearer token
/// let bearer = Credentials::bearer("my-token").unwrap();
///
/// // Per-request JWT from issuer and secret
/// let jwt = Credentials::jwt("developer@example.com", "my-secret").unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// A static bearer token sent on every request.
    Bearer(ApiToken),

    /// Issuer identity and shared secret used to sign a fresh HS256 JWT
    /// for each request.
    Jwt {
        /// The issuer registered with Salling Group (the `iss` claim).
        issuer: String,
        /// The shared secret used to sign the token.
        secret: SecretKey,
    },
}

impl Credentials {
    /// Creates bearer-token credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty.
    pub fn bearer(token: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self::Bearer(ApiToken::new(token)?))
    }

    /// Creates JWT credentials from an issuer and a shared secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyIssuer`] if the issuer is empty, or
    /// [`ConfigError::EmptySecretKey`] if the secret is empty.
    pub fn jwt(issuer: impl Into<String>, secret: impl Into<String>) -> Result<Self, ConfigError> {
        let issuer = issuer.into();
        if issuer.is_empty() {
            return Err(ConfigError::EmptyIssuer);
        }
        Ok(Self::Jwt {
            issuer,
            secret: SecretKey::new(secret)?,
        })
    }
}
