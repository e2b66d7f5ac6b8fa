//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use std::fmt;

use crate::error::ConfigError;

/// A validated Zoop API key.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs. The key is sent as the
/// username of an HTTP Basic `Authorization` header with an empty password.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ApiKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use zoop_api::ApiKey;
///
/// let key = ApiKey::new("zpk_test_abc123").unwrap();
/// assert_eq!(key.as_ref(), "zpk_test_abc123");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated Zoop marketplace id.
///
/// Most Zoop collection paths are parameterized by the marketplace the
/// caller operates as (e.g. `marketplaces/{marketplace}/buyers`). This
/// newtype ensures the id is non-empty and provides type safety to prevent
/// accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use zoop_api::MarketplaceId;
///
/// let id = MarketplaceId::new("3249465a7753536b62545a6a684b0000").unwrap();
/// assert_eq!(id.as_ref(), "3249465a7753536b62545a6a684b0000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketplaceId(String);

impl MarketplaceId {
    /// Creates a new validated marketplace id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyMarketplaceId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyMarketplaceId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for MarketplaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarketplaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
