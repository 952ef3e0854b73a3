//! HTTP client for Shopify Admin API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to a single shop. Each call performs exactly one round trip.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ShopifyConfig;

/// HTTP client for making requests to the Shopify Admin API.
///
/// The client handles:
/// - Base URI construction from the shop identifier or `api_host`
/// - Default headers including User-Agent and access token
/// - Mapping of response statuses onto [`HttpError`]
///
/// There is no retry, caching, or rate-limit handling: a failed call is
/// reported to the caller as-is.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_catalog::ShopifyConfig;
/// use shopify_catalog::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = ShopifyConfig::new("access-token", "my-store")?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/admin/products.json").build()?;
/// let response = client.request(request).await?;
/// ```
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://my-store.myshopify.com`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headers: HashMap<&str, &str> = self
            .default_headers
            .iter()
            .map(|(key, value)| {
                if key == ACCESS_TOKEN_HEADER {
                    (key.as_str(), "*****")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("HttpClient")
            .field("base_uri", &self.base_uri)
            .field("default_headers", &headers)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a new HTTP client for the configured shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &ShopifyConfig) -> Result<Self, HttpError> {
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), config.user_agent());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            ACCESS_TOKEN_HEADER.to_string(),
            config.access_token().as_ref().to_string(),
        );

        // Keep the shop's host visible to proxies when overriding api_host
        if config.api_host().is_some() {
            default_headers.insert("Host".to_string(), config.shop_id().host());
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri: config.base_uri(),
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

    /// Sends an HTTP request to the Shopify Admin API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - The response is 404 (`NotFound`), 5xx (`ServerError`), or any other
    ///   non-2xx status (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_uri, request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body_type) = &request.body_type {
            req_builder = req_builder.header("Content-Type", body_type.as_content_type());
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            "Shopify API request completed"
        );

        let response = HttpResponse::new(code, res_headers, body);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Shopify API at {}, received reason: {}",
                request.path,
                reason
            );
        }

        Self::check_status(response)
    }

    /// Maps a response onto `Ok` for 2xx and the matching [`HttpError`] otherwise.
    fn check_status(response: HttpResponse) -> Result<HttpResponse, HttpError> {
        match response.code {
            200..=299 => Ok(response),
            404 => Err(HttpError::NotFound),
            code @ 500..=599 => Err(HttpError::ServerError { code }),
            code => Err(HttpError::Response(HttpResponseError {
                code,
                message: response.error_message(),
                error_reference: response.request_id().map(String::from),
            })),
        }
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, HostUrl, ShopId, USER_AGENT};

    fn create_test_config() -> ShopifyConfig {
        ShopifyConfig::new("test-access-token", "test-shop").unwrap()
    }

    fn response(code: u16, body: &str) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body.to_string())
    }

    #[test]
    fn test_client_construction_uses_shop_host() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(client.base_uri(), "https://test-shop.myshopify.com");
        assert!(client.default_headers().get("Host").is_none());
    }

    #[test]
    fn test_access_token_header_injection() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("X-Shopify-Access-Token"),
            Some(&"test-access-token".to_string())
        );
    }

    #[test]
    fn test_debug_masks_access_token() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("test-access-token"));
        assert!(debug.contains("*****"));
        assert!(debug.contains("https://test-shop.myshopify.com"));
    }

    #[test]
    fn test_user_agent_and_accept_headers() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("User-Agent"),
            Some(&USER_AGENT.to_string())
        );
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_api_host_override_sets_host_header() {
        let config = ShopifyConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .shop_id(ShopId::new("test-shop").unwrap())
            .api_host(HostUrl::new("http://127.0.0.1:9999").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        assert_eq!(client.base_uri(), "http://127.0.0.1:9999");
        assert_eq!(
            client.default_headers().get("Host"),
            Some(&"test-shop.myshopify.com".to_string())
        );
    }

    #[test]
    fn test_check_status_passes_2xx() {
        let result = HttpClient::check_status(response(201, r#"{"product":{}}"#));
        assert_eq!(result.unwrap().code, 201);
    }

    #[test]
    fn test_check_status_maps_404_regardless_of_body() {
        for body in ["", r#"{"errors":"Not Found"}"#, "<html>gone</html>"] {
            let result = HttpClient::check_status(response(404, body));
            assert!(matches!(result, Err(HttpError::NotFound)));
        }
    }

    #[test]
    fn test_check_status_maps_5xx_to_server_error() {
        for code in [500, 502, 503, 504] {
            let result = HttpClient::check_status(response(code, r#"{"errors":"boom"}"#));
            match result {
                Err(HttpError::ServerError { code: c }) => assert_eq!(c, code),
                other => panic!("Expected ServerError, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_check_status_maps_other_errors_to_response() {
        for code in [400, 401, 403, 422, 429] {
            let result = HttpClient::check_status(response(code, r#"{"errors":"nope"}"#));
            match result {
                Err(HttpError::Response(e)) => {
                    assert_eq!(e.code, code);
                    assert!(e.message.contains("nope"));
                }
                other => panic!("Expected Response error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
