//! # Shopify Catalog Client
//!
//! A thin async client for the Shopify Admin REST API's product catalog.
//!
//! ## Overview
//!
//! This crate provides:
//! - Validated credentials via [`ShopifyConfig`], [`AccessToken`], and [`ShopId`]
//! - A request dispatcher ([`RestClient`]) with positional path templates
//! - Status mapping onto typed errors: 404 → [`HttpError::NotFound`],
//!   5xx → [`HttpError::ServerError`]
//! - serde record shapes for products, variants, options, and images
//! - A [`ProductService`] for listing, fetching, counting, and editing products
//! - A [`ShopifyClient`] tying the pieces together
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shopify_catalog::ShopifyClient;
//!
//! let client = ShopifyClient::new("shpat_abc123", "my-shop")?;
//!
//! for product in client.products().all().await? {
//!     println!("{:?}: {:?}", product.id, product.title);
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use shopify_catalog::{HttpError, RestError, ShopifyClient};
//!
//! match client.products().find(632910392).await {
//!     Ok(product) => println!("{:?}", product.handle),
//!     Err(RestError::Http(HttpError::NotFound)) => println!("no such product"),
//!     Err(RestError::Http(HttpError::ServerError { code })) => println!("server error {code}"),
//!     Err(e) => println!("Error: {e}"),
//! }
//! ```
//!
//! ## Direct Dispatch
//!
//! Resources without a dedicated service can be reached through the
//! dispatcher directly:
//!
//! ```rust,ignore
//! use shopify_catalog::{RestClient, ShopifyConfig};
//!
//! let config = ShopifyConfig::new("shpat_abc123", "my-shop")?;
//! let client = RestClient::new(&config)?;
//!
//! let order: serde_json::Value = client.get("/admin/orders/{0}.json", &[&450789469]).await?;
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (one `debug` event per request and a
//! `warn` event when the API reports a deprecated endpoint) and never
//! installs a subscriber. Access tokens are never logged.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Credentials are validated before any request
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **One round trip per call**: No retries, caching, or pagination

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod services;

// Re-export public types at crate root for convenience
pub use client::ShopifyClient;
pub use config::{AccessToken, HostUrl, ShopId, ShopifyConfig, ShopifyConfigBuilder, USER_AGENT};
pub use error::{ConfigError, ShopifyError};

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RestClient, RestError,
};

// Re-export catalog types
pub use rest::resources::{
    InventoryPolicy, Product, ProductCount, ProductEnvelope, ProductImage, ProductList,
    ProductOption, ProductVariant, WeightUnit,
};
pub use rest::{format_path, PathTemplateError};
pub use services::ProductService;
