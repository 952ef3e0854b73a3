//! Configuration types for the Shopify catalog client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ShopifyConfig`]: Credentials plus transport settings for one shop
//! - [`ShopifyConfigBuilder`]: A builder for constructing [`ShopifyConfig`] instances
//! - [`AccessToken`]: A validated access token with masked debug output
//! - [`ShopId`]: A validated shop identifier (the `myshopify.com` subdomain)
//! - [`HostUrl`]: A validated API host override
//!
//! # Example
//!
//! ```rust
//! use shopify_catalog::{AccessToken, ShopId, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .access_token(AccessToken::new("shpat_abc123").unwrap())
//!     .shop_id(ShopId::new("my-store").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_uri(), "https://my-store.myshopify.com");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, HostUrl, ShopId};

use crate::error::ConfigError;

/// Identifying user agent sent with every request.
pub const USER_AGENT: &str = concat!("Shopify Catalog Client v", env!("CARGO_PKG_VERSION"));

/// Configuration for one shop.
///
/// Holds the credentials and the few transport settings the client needs.
/// The configuration is immutable once built.
///
/// # Thread Safety
///
/// `ShopifyConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    access_token: AccessToken,
    shop_id: ShopId,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfig {
    /// Creates a configuration from raw credential strings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCredentials`] if either value is empty
    /// or whitespace-only.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_catalog::{ConfigError, ShopifyConfig};
    ///
    /// let config = ShopifyConfig::new("abc", "my-shop").unwrap();
    /// assert_eq!(config.shop_id().as_ref(), "my-shop");
    ///
    /// let result = ShopifyConfig::new("abc", " ");
    /// assert!(matches!(result, Err(ConfigError::InvalidCredentials { .. })));
    /// ```
    pub fn new(access_token: &str, shop_id: &str) -> Result<Self, ConfigError> {
        Self::builder()
            .access_token(AccessToken::new(access_token)?)
            .shop_id(ShopId::new(shop_id)?)
            .build()
    }

    /// Creates a new builder for constructing a `ShopifyConfig`.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the shop identifier.
    #[must_use]
    pub const fn shop_id(&self) -> &ShopId {
        &self.shop_id
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the base URI requests are sent to.
    ///
    /// This is `https://{shop}.myshopify.com` unless an API host override
    /// is configured.
    #[must_use]
    pub fn base_uri(&self) -> String {
        self.api_host.as_ref().map_or_else(
            || format!("https://{}", self.shop_id.host()),
            |host| host.as_ref().to_string(),
        )
    }

    /// Returns the full user agent string, including any configured prefix.
    #[must_use]
    pub fn user_agent(&self) -> String {
        self.user_agent_prefix
            .as_deref()
            .map_or_else(|| USER_AGENT.to_string(), |prefix| format!("{prefix} | {USER_AGENT}"))
    }
}

// Verify ShopifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for constructing [`ShopifyConfig`] instances.
///
/// Required fields are `access_token` and `shop_id`.
///
/// # Defaults
///
/// - `api_host`: `None` (requests go to the shop's own host)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    access_token: Option<AccessToken>,
    shop_id: Option<ShopId>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the shop identifier (required).
    #[must_use]
    pub fn shop_id(mut self, shop_id: ShopId) -> Self {
        self.shop_id = Some(shop_id);
        self
    }

    /// Sends requests to `host` instead of the shop's `myshopify.com` host.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ShopifyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` or
    /// `shop_id` are not set.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;
        let shop_id = self
            .shop_id
            .ok_or(ConfigError::MissingRequiredField { field: "shop_id" })?;

        Ok(ShopifyConfig {
            access_token,
            shop_id,
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_access_token() {
        let result = ShopifyConfigBuilder::new()
            .shop_id(ShopId::new("my-shop").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_requires_shop_id() {
        let result = ShopifyConfigBuilder::new()
            .access_token(AccessToken::new("abc").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "shop_id" })
        ));
    }

    #[test]
    fn test_new_rejects_blank_credentials() {
        assert!(matches!(
            ShopifyConfig::new("", "my-shop"),
            Err(ConfigError::InvalidCredentials {
                field: "access token"
            })
        ));
        assert!(matches!(
            ShopifyConfig::new("abc", "   "),
            Err(ConfigError::InvalidCredentials { field: "shop id" })
        ));
    }

    #[test]
    fn test_base_uri_defaults_to_shop_host() {
        let config = ShopifyConfig::new("abc", "my-shop").unwrap();
        assert_eq!(config.base_uri(), "https://my-shop.myshopify.com");
    }

    #[test]
    fn test_base_uri_uses_api_host_override() {
        let config = ShopifyConfig::builder()
            .access_token(AccessToken::new("abc").unwrap())
            .shop_id(ShopId::new("my-shop").unwrap())
            .api_host(HostUrl::new("http://localhost:8080").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_uri(), "http://localhost:8080");
    }

    #[test]
    fn test_user_agent_format() {
        let config = ShopifyConfig::new("abc", "my-shop").unwrap();
        assert!(config.user_agent().starts_with("Shopify Catalog Client v"));
        assert_eq!(config.user_agent(), USER_AGENT);

        let config = ShopifyConfig::builder()
            .access_token(AccessToken::new("abc").unwrap())
            .shop_id(ShopId::new("my-shop").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        assert_eq!(config.user_agent(), format!("MyApp/1.0 | {USER_AGENT}"));
    }

    #[test]
    fn test_config_debug_does_not_leak_token() {
        let config = ShopifyConfig::new("super-secret", "my-shop").unwrap();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("ShopifyConfig"));
        assert!(!debug_str.contains("super-secret"));
    }
}
