//! High-level client for Zoop REST resources.

use serde_json::Value;

use crate::clients::errors::ApiError;
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::config::{ApiVersion, MarketplaceId, ZoopConfig};

/// Client for the Zoop REST API.
///
/// Wraps the transport with JSON method helpers and carries the
/// marketplace id that resource paths are parameterized with.
///
/// # Example
///
/// ```rust,no_run
/// use zoop_api::{ZoopClient, ZoopConfig, ApiKey, MarketplaceId};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ZoopConfig::builder()
///     .api_key(ApiKey::new("zpk_test_abc")?)
///     .marketplace_id(MarketplaceId::new("mkt_123")?)
///     .build()?;
/// let client = ZoopClient::new(&config);
///
/// let buyers = client.get("v1/marketplaces/mkt_123/buyers").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ZoopClient {
    http: HttpClient,
    marketplace_id: MarketplaceId,
    api_version: ApiVersion,
}

impl ZoopClient {
    /// Creates a new client from the given configuration.
    #[must_use]
    pub fn new(config: &ZoopConfig) -> Self {
        Self {
            http: HttpClient::new(config),
            marketplace_id: config.marketplace_id().clone(),
            api_version: config.api_version(),
        }
    }

    /// Returns the marketplace id the client operates as.
    #[must_use]
    pub const fn marketplace_id(&self) -> &MarketplaceId {
        &self.marketplace_id
    }

    /// Returns the API version paths are built against.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Sends a GET request to the given path.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn get(&self, path: impl Into<String> + Send) -> Result<Value, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        self.http.request(request).await
    }

    /// Sends a POST request to the given path with an optional JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn post(
        &self,
        path: impl Into<String> + Send,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let mut builder = HttpRequest::builder(HttpMethod::Post, path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        self.http.request(builder.build()?).await
    }

    /// Sends a PUT request to the given path with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn put(
        &self,
        path: impl Into<String> + Send,
        body: Value,
    ) -> Result<Value, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Put, path).body(body).build()?;
        self.http.request(request).await
    }

    /// Sends a DELETE request to the given path.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn delete(&self, path: impl Into<String> + Send) -> Result<Value, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.http.request(request).await
    }
}

// Verify ZoopClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ZoopClient>();
};
