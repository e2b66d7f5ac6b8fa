//! Low-level HTTP transport for the Zoop API.

use base64::Engine as _;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde_json::Value;
use tracing::debug;

use crate::clients::errors::ApiError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ZoopConfig;

const SDK_USER_AGENT: &str = concat!("ZoopRustSDK/", env!("CARGO_PKG_VERSION"));

/// HTTP client handling transport concerns for the Zoop API.
///
/// Applies Basic authentication (the API key as username, empty password),
/// the versioned `Accept` header, and the configured timeouts. Responses
/// are classified by [`classify`](crate::clients::errors::classify).
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
}

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying TLS backend cannot be initialized. This
    /// only happens in broken build environments.
    #[must_use]
    pub fn new(config: &ZoopConfig) -> Self {
        let mut headers = HeaderMap::new();

        // Basic auth: the API key is the username, the password is empty.
        let credentials =
            base64::engine::general_purpose::STANDARD.encode(format!("{}:", config.api_key().as_ref()));
        let mut auth = HeaderValue::from_str(&format!("Basic {credentials}"))
            .unwrap_or_else(|_| HeaderValue::from_static("Basic"));
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        headers.insert(
            ACCEPT,
            HeaderValue::from_static(config.api_version().accept_header()),
        );

        let user_agent = config.user_agent_prefix().map_or_else(
            || SDK_USER_AGENT.to_string(),
            |prefix| format!("{prefix} | {SDK_USER_AGENT}"),
        );
        if let Ok(value) = HeaderValue::from_str(&user_agent) {
            headers.insert(USER_AGENT, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri: config.endpoint().trim_end_matches('/').to_string(),
        }
    }

    /// Executes a request and classifies the response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and for any response
    /// outside the 2xx range.
    pub async fn request(&self, request: HttpRequest) -> Result<Value, ApiError> {
        let response = self.send(&request).await?;
        crate::clients::errors::classify(response.status(), response.body())
    }

    /// Executes a request and returns the raw response without classifying.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures only.
    pub async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = format!("{}/{}", self.base_uri, request.path().trim_start_matches('/'));

        debug!(method = %request.method(), %url, "sending request");

        let mut builder = match request.method() {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        if let Some(extra) = request.extra_headers() {
            for (name, value) in extra {
                let Ok(name) = HeaderName::from_bytes(name.as_bytes()) else {
                    continue;
                };
                let Ok(value) = HeaderValue::from_str(value) else {
                    continue;
                };
                builder = builder.header(name, value);
            }
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, "received response");

        Ok(HttpResponse::new(status, body))
    }
}
