//! REST dispatcher for the Shopify Admin API.
//!
//! This module provides the [`RestClient`] type: typed `get`/`post`/`put`/
//! `delete` calls over resource path templates, one round trip per call.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::rest::RestError;
use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::ShopifyConfig;
use crate::rest::format_path;

/// REST dispatcher for the Shopify Admin API.
///
/// Every method takes a path template such as `/admin/products/{0}.json`
/// and positional arguments to resolve it (see [`format_path`]). Template
/// errors are reported before any network call is made.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_catalog::{RestClient, ShopifyConfig};
/// use shopify_catalog::rest::resources::ProductList;
///
/// let config = ShopifyConfig::new("access-token", "my-store")?;
/// let client = RestClient::new(&config)?;
///
/// let list: ProductList = client.get("/admin/products.json", &[]).await?;
/// let raw: String = client.get_raw("/admin/products/{0}.json", &[&632910392]).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the configured shop.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying HTTP client cannot be built.
    pub fn new(config: &ShopifyConfig) -> Result<Self, RestError> {
        let http_client = HttpClient::new(config)?;
        Ok(Self { http_client })
    }

    /// Returns the base URI requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.http_client.base_uri()
    }

    /// Sends a GET request and deserializes the JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the template cannot be resolved.
    /// Returns [`RestError::Http`] for HTTP-level errors, including a body
    /// that does not match `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        template: &str,
        args: &[&(dyn Display + Sync)],
    ) -> Result<T, RestError> {
        let path = resolve(template, args)?;
        let response = self.send(HttpMethod::Get, &path, None).await?;
        decode(&path, &response)
    }

    /// Sends a GET request and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the template cannot be resolved.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get_raw(
        &self,
        template: &str,
        args: &[&(dyn Display + Sync)],
    ) -> Result<String, RestError> {
        let path = resolve(template, args)?;
        let response = self.send(HttpMethod::Get, &path, None).await?;
        Ok(response.body)
    }

    /// Sends a POST request with `body` serialized as JSON and deserializes
    /// the response into `T`.
    ///
    /// A body that serializes to JSON `null` is omitted from the request.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the template cannot be resolved.
    /// Returns [`RestError::Http`] for serialization and HTTP-level errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let body = serde_json::json!({"product": {"title": "New Product"}});
    /// let created: ProductEnvelope = client.post(&body, "/admin/products.json", &[]).await?;
    /// ```
    pub async fn post<B, T>(
        &self,
        body: &B,
        template: &str,
        args: &[&(dyn Display + Sync)],
    ) -> Result<T, RestError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        self.send_with_body(HttpMethod::Post, body, template, args)
            .await
    }

    /// Sends a PUT request with `body` serialized as JSON and deserializes
    /// the response into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the template cannot be resolved.
    /// Returns [`RestError::Http`] for serialization and HTTP-level errors.
    pub async fn put<B, T>(
        &self,
        body: &B,
        template: &str,
        args: &[&(dyn Display + Sync)],
    ) -> Result<T, RestError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        self.send_with_body(HttpMethod::Put, body, template, args)
            .await
    }

    /// Sends a DELETE request, discarding the response body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the template cannot be resolved.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        template: &str,
        args: &[&(dyn Display + Sync)],
    ) -> Result<(), RestError> {
        let path = resolve(template, args)?;
        self.send(HttpMethod::Delete, &path, None).await?;
        Ok(())
    }

    async fn send_with_body<B, T>(
        &self,
        method: HttpMethod,
        body: &B,
        template: &str,
        args: &[&(dyn Display + Sync)],
    ) -> Result<T, RestError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let path = resolve(template, args)?;
        let body = serde_json::to_value(body).map_err(HttpError::Serialize)?;
        let body = (!body.is_null()).then_some(body);

        let response = self.send(method, &path, body).await?;
        decode(&path, &response)
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, RestError> {
        let mut builder = HttpRequest::builder(method, path);
        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        let request = builder.build().map_err(HttpError::from)?;
        self.http_client.request(request).await.map_err(Into::into)
    }
}

fn resolve(template: &str, args: &[&(dyn Display + Sync)]) -> Result<String, RestError> {
    format_path(template, args).map_err(|source| RestError::InvalidPath {
        template: template.to_string(),
        source,
    })
}

fn decode<T: DeserializeOwned>(path: &str, response: &HttpResponse) -> Result<T, RestError> {
    response.json().map_err(|source| {
        HttpError::Deserialize {
            path: path.to_string(),
            source,
        }
        .into()
    })
}
