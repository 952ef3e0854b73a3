//! Product catalog operations.

use std::sync::Arc;

use serde::Serialize;

use crate::clients::{HttpError, RestClient, RestError};
use crate::rest::resources::{Product, ProductCount, ProductEnvelope, ProductList};

const PRODUCTS_PATH: &str = "/admin/products.json";
const PRODUCT_PATH: &str = "/admin/products/{0}.json";
const PRODUCT_COUNT_PATH: &str = "/admin/products/count.json";

/// Borrowed `{"product": ...}` request body.
#[derive(Serialize)]
struct ProductPayload<'a> {
    product: &'a Product,
}

/// Listed products must be addressable: a positive id and a non-empty handle.
fn check_listed(index: usize, product: &Product) -> Result<(), HttpError> {
    let problem = if product.id.unwrap_or(0) == 0 {
        "has no positive id"
    } else if product.handle.as_deref().map_or(true, str::is_empty) {
        "has no handle"
    } else {
        return Ok(());
    };

    Err(HttpError::Deserialize {
        path: PRODUCTS_PATH.to_string(),
        source: serde::de::Error::custom(format!("products[{index}] {problem}")),
    })
}

/// Catalog operations on the shop's products.
///
/// Each method performs exactly one request and returns dispatcher errors
/// unchanged. Listing returns a single page; no pagination is performed.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_catalog::ShopifyClient;
///
/// let client = ShopifyClient::new("access-token", "my-store")?;
/// for product in client.products().all().await? {
///     println!("{:?} {:?}", product.id, product.handle);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ProductService {
    rest_client: Arc<RestClient>,
}

impl ProductService {
    /// Creates a service dispatching through `rest_client`.
    #[must_use]
    pub const fn new(rest_client: Arc<RestClient>) -> Self {
        Self { rest_client }
    }

    /// Lists the shop's products (`GET /admin/products.json`).
    ///
    /// Products are returned in the order the API sent them.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails, the status is not 2xx, or
    /// the body is not a `{"products": [...]}` envelope. A listed product
    /// without a positive `id` or a non-empty `handle` is reported as
    /// [`HttpError::Deserialize`].
    pub async fn all(&self) -> Result<Vec<Product>, RestError> {
        let list: ProductList = self.rest_client.get(PRODUCTS_PATH, &[]).await?;
        for (index, product) in list.products.iter().enumerate() {
            check_listed(index, product)?;
        }
        Ok(list.products)
    }

    /// Fetches a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] with [`HttpError::NotFound`](crate::clients::HttpError::NotFound)
    /// when no product has this ID, or any other dispatcher error.
    pub async fn find(&self, id: u64) -> Result<Product, RestError> {
        let envelope: ProductEnvelope = self.rest_client.get(PRODUCT_PATH, &[&id]).await?;
        Ok(envelope.product)
    }

    /// Counts the shop's products.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails.
    pub async fn count(&self) -> Result<u64, RestError> {
        let count: ProductCount = self.rest_client.get(PRODUCT_COUNT_PATH, &[]).await?;
        Ok(count.count)
    }

    /// Creates a product and returns it as stored by the API.
    ///
    /// Read-only fields on `product` (such as `id`) are not sent.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API rejects the
    /// product (typically a 422 carried in
    /// [`HttpError::Response`](crate::clients::HttpError::Response)).
    pub async fn create(&self, product: &Product) -> Result<Product, RestError> {
        let envelope: ProductEnvelope = self
            .rest_client
            .post(&ProductPayload { product }, PRODUCTS_PATH, &[])
            .await?;
        Ok(envelope.product)
    }

    /// Updates the product with the given ID.
    ///
    /// Only the fields set on `product` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails.
    pub async fn update(&self, id: u64, product: &Product) -> Result<Product, RestError> {
        let envelope: ProductEnvelope = self
            .rest_client
            .put(&ProductPayload { product }, PRODUCT_PATH, &[&id])
            .await?;
        Ok(envelope.product)
    }

    /// Deletes the product with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), RestError> {
        self.rest_client.delete(PRODUCT_PATH, &[&id]).await
    }
}
