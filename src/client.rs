//! Top-level client for one shop.

use std::sync::Arc;

use crate::clients::RestClient;
use crate::config::ShopifyConfig;
use crate::error::ShopifyError;
use crate::services::ProductService;

/// Entry point for catalog access to one shop.
///
/// Validates the credentials, builds a single [`RestClient`], and hands it
/// to each resource service. Cloning the client is cheap; clones share the
/// same connection pool.
///
/// # Thread Safety
///
/// `ShopifyClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_catalog::ShopifyClient;
///
/// let client = ShopifyClient::new("shpat_abc123", "my-shop")?;
/// let products = client.products().all().await?;
/// println!("{} products", products.len());
/// ```
#[derive(Debug, Clone)]
pub struct ShopifyClient {
    config: ShopifyConfig,
    products: ProductService,
}

// Verify ShopifyClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyClient>();
};

impl ShopifyClient {
    /// Creates a client from an access token and shop identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ShopifyError::Config`] with
    /// [`ConfigError::InvalidCredentials`](crate::ConfigError::InvalidCredentials)
    /// if either value is empty or whitespace-only, or if the shop id is not
    /// a valid shop name. No request is made.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_catalog::ShopifyClient;
    ///
    /// let client = ShopifyClient::new("abc", "my-shop").unwrap();
    /// assert_eq!(client.config().shop_id().as_ref(), "my-shop");
    ///
    /// assert!(ShopifyClient::new("  ", "my-shop").is_err());
    /// ```
    pub fn new(access_token: &str, shop_id: &str) -> Result<Self, ShopifyError> {
        let config = ShopifyConfig::new(access_token, shop_id)?;
        Self::from_config(&config)
    }

    /// Creates a client from an existing configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ShopifyError::Rest`] if the HTTP client cannot be built.
    pub fn from_config(config: &ShopifyConfig) -> Result<Self, ShopifyError> {
        let rest_client = Arc::new(RestClient::new(config)?);
        tracing::debug!(shop = %config.shop_id(), "created catalog client");

        Ok(Self {
            config: config.clone(),
            products: ProductService::new(rest_client),
        })
    }

    /// Returns the product catalog service.
    #[must_use]
    pub const fn products(&self) -> &ProductService {
        &self.products
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &ShopifyConfig {
        &self.config
    }
}
