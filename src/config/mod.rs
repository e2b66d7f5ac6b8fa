//! Configuration types for the Zoop API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with Zoop.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ZoopConfig`]: The main configuration struct holding all SDK settings
//! - [`ZoopConfigBuilder`]: A builder for constructing [`ZoopConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`MarketplaceId`]: A validated marketplace id newtype
//! - [`ApiVersion`]: The Zoop API version to use
//!
//! # Example
//!
//! ```rust
//! use zoop_api::{ZoopConfig, ApiKey, MarketplaceId};
//!
//! let config = ZoopConfig::builder()
//!     .api_key(ApiKey::new("zpk_test_abc").unwrap())
//!     .marketplace_id(MarketplaceId::new("mkt_123").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiKey, MarketplaceId};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;

/// Production endpoint of the Zoop API.
pub const ENDPOINT: &str = "https://api.zoop.ws";

/// Default total timeout for a single request.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout for a single request.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Zoop API SDK.
///
/// This struct holds all configuration needed for SDK operations: the API
/// credentials, the marketplace the caller operates as, the endpoint, and
/// per-request timeouts handed to the transport at client construction.
///
/// # Thread Safety
///
/// `ZoopConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use zoop_api::{ZoopConfig, ApiKey, MarketplaceId};
/// use std::time::Duration;
///
/// let config = ZoopConfig::builder()
///     .api_key(ApiKey::new("zpk_test_abc").unwrap())
///     .marketplace_id(MarketplaceId::new("mkt_123").unwrap())
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.endpoint(), "https://api.zoop.ws");
/// ```
#[derive(Clone, Debug)]
pub struct ZoopConfig {
    api_key: ApiKey,
    marketplace_id: MarketplaceId,
    endpoint: String,
    api_version: ApiVersion,
    timeout: Duration,
    connect_timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl ZoopConfig {
    /// Creates a new builder for constructing a `ZoopConfig`.
    #[must_use]
    pub fn builder() -> ZoopConfigBuilder {
        ZoopConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the marketplace id embedded in collection paths.
    #[must_use]
    pub const fn marketplace_id(&self) -> &MarketplaceId {
        &self.marketplace_id
    }

    /// Returns the endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the total per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the per-request connect timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ZoopConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ZoopConfig>();
};

/// Builder for constructing [`ZoopConfig`] instances.
///
/// Required fields are `api_key` and `marketplace_id`. All other fields
/// have sensible defaults.
///
/// # Defaults
///
/// - `endpoint`: [`ENDPOINT`] (production)
/// - `api_version`: latest stable version
/// - `timeout` / `connect_timeout`: 30 seconds each
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ZoopConfigBuilder {
    api_key: Option<ApiKey>,
    marketplace_id: Option<MarketplaceId>,
    endpoint: Option<String>,
    api_version: Option<ApiVersion>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ZoopConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the marketplace id (required).
    #[must_use]
    pub fn marketplace_id(mut self, id: MarketplaceId) -> Self {
        self.marketplace_id = Some(id);
        self
    }

    /// Overrides the endpoint requests are sent to.
    ///
    /// Useful for pointing the SDK at a sandbox or a local mock server.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the total per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the per-request connect timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ZoopConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `marketplace_id` are not set, or [`ConfigError::InvalidEndpoint`]
    /// if an endpoint override is not an absolute URL.
    pub fn build(self) -> Result<ZoopConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let marketplace_id = self
            .marketplace_id
            .ok_or(ConfigError::MissingRequiredField {
                field: "marketplace_id",
            })?;

        let endpoint = self.endpoint.unwrap_or_else(|| ENDPOINT.to_string());
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ConfigError::InvalidEndpoint { endpoint });
        }

        Ok(ZoopConfig {
            api_key,
            marketplace_id,
            endpoint,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
