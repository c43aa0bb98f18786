//! HTTP client for Salling Group API communication.
//!
//! This module provides the [`Transport`] capability trait and its concrete
//! [`HttpClient`] adapter for making authenticated requests against the
//! Salling Group API.

use std::collections::HashMap;

use serde::Serialize;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::config::{Credentials, SecretKey, StoresConfig};

/// Base URI of the production Salling Group API.
pub const DEFAULT_BASE_URI: &str = "https://api.sallinggroup.com";

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The capability of issuing authenticated GET requests against the API.
///
/// [`HttpClient`] is the one concrete adapter for the real upstream service;
/// tests substitute their own implementations to exercise callers without a
/// network.
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync {
    /// Issues a GET request for `path` (absolute, e.g. `/v1/stores/`) with
    /// the given query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] for any non-2xx response, carrying the
    /// upstream status code, and [`HttpError::Network`] for connection-level
    /// failures.
    async fn get(
        &self,
        path: &str,
        query: Option<&HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError>;
}

/// Claims of the per-request JWT expected by the Salling Group API.
#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    iat: i64,
}

/// HTTP client for making requests to the Salling Group API.
///
/// The client handles:
/// - Base URI selection (production default, or a configured host override)
/// - Default headers including `User-Agent` and `Accept`
/// - Authentication: a static bearer token, or a freshly signed JWT per request
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,no_run
/// use salling_stores::{Credentials, HttpClient, StoresConfig};
///
/// let config = StoresConfig::builder()
///     .credentials(Credentials::bearer("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config).unwrap();
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g. `https://api.sallinggroup.com`).
    base_uri: String,
    /// Credentials applied to every outgoing request.
    credentials: Credentials,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Construction`] if the underlying reqwest client
    /// cannot be created (e.g. TLS initialization failure). The error
    /// propagates unchanged.
    pub fn new(config: &StoresConfig) -> Result<Self, HttpError> {
        let base_uri = config
            .host()
            .map_or(DEFAULT_BASE_URI, AsRef::as_ref)
            .to_string();

        // Build User-Agent header
        let application_prefix = config
            .application_name()
            .map_or(String::new(), |name| format!("{name} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{application_prefix}Stores SDK v{SDK_VERSION} | Rust {rust_version}");

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        // A static bearer token is fixed for the client's lifetime; JWT
        // credentials are signed per request instead.
        if let Credentials::Bearer(token) = config.credentials() {
            default_headers.insert(
                "Authorization".to_string(),
                format!("Bearer {}", token.as_ref()),
            );
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(HttpError::Construction)?;

        Ok(Self {
            client,
            base_uri,
            credentials: config.credentials().clone(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response body to a JSON message.
    ///
    /// The upstream error envelope carries `error` and `message` fields;
    /// anything else present is ignored.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(error) = response.body.get("error") {
            error_body.insert("error".to_string(), error.clone());
        }
        if let Some(message) = response.body.get("message") {
            error_body.insert("message".to_string(), message.clone());
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Signs a fresh HS256 token for one request.
fn sign_token(issuer: &str, secret: &SecretKey) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        iss: issuer,
        iat: chrono::Utc::now().timestamp(),
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_ref().as_bytes()),
    )
}

impl Transport for HttpClient {
    async fn get(
        &self,
        path: &str,
        query: Option<&HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let url = format!("{}{}", self.base_uri, path);

        let mut headers = self.default_headers.clone();
        if let Credentials::Jwt { issuer, secret } = &self.credentials {
            let token = sign_token(issuer, secret)?;
            headers.insert("Authorization".to_string(), format!("Bearer {token}"));
        }

        tracing::debug!("GET {url}");

        let mut req_builder = self.client.get(&url);
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(query) = query {
            req_builder = req_builder.query(query);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                // For 5xx errors, return raw body as string value
                if code >= 500 {
                    serde_json::json!({ "raw_body": body_text })
                } else {
                    serde_json::json!({})
                }
            })
        };

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;

    fn bearer_config() -> StoresConfig {
        StoresConfig::builder()
            .credentials(Credentials::bearer("test-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_defaults_to_production_base_uri() {
        let client = HttpClient::new(&bearer_config()).unwrap();
        assert_eq!(client.base_uri(), "https://api.sallinggroup.com");
    }

    #[test]
    fn test_host_override_changes_base_uri() {
        let config = StoresConfig::builder()
            .credentials(Credentials::bearer("test-token").unwrap())
            .host(crate::config::HostUrl::new("http://127.0.0.1:9999").unwrap())
            .build()
            .unwrap();

        let client = HttpClient::new(&config).unwrap();
        assert_eq!(client.base_uri(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&bearer_config()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Stores SDK v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_application_name() {
        let config = StoresConfig::builder()
            .credentials(Credentials::bearer("test-token").unwrap())
            .application_name("store-locator/2.1")
            .build()
            .unwrap();

        let client = HttpClient::new(&config).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("store-locator/2.1 | "));
    }

    #[test]
    fn test_bearer_token_header_injection() {
        let client = HttpClient::new(&bearer_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-token".to_string())
        );
    }

    #[test]
    fn test_jwt_credentials_have_no_static_authorization_header() {
        let config = StoresConfig::builder()
            .credentials(Credentials::jwt("issuer@example.com", "secret").unwrap())
            .build()
            .unwrap();

        let client = HttpClient::new(&config).unwrap();
        assert!(client.default_headers().get("Authorization").is_none());
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&bearer_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_sign_token_produces_three_segments() {
        let secret = SecretKey::new("secret").unwrap();
        let token = sign_token("issuer@example.com", &secret).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
