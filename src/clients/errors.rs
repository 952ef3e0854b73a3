//! HTTP-specific error types for the Shopify catalog client.
//!
//! # Error Handling
//!
//! Every request performs exactly one round trip. Its outcome maps onto
//! [`HttpError`] as follows:
//!
//! - **404**: [`HttpError::NotFound`]
//! - **5xx**: [`HttpError::ServerError`]
//! - **Other non-2xx**: [`HttpError::Response`]
//! - **2xx with a body of the wrong shape**: [`HttpError::Deserialize`]
//! - **Connection failures**: [`HttpError::Network`]
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_catalog::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::NotFound) => println!("No such resource"),
//!     Err(HttpError::ServerError { code }) => println!("Shopify failed with {code}"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned for a non-2xx response that has no dedicated variant.
///
/// The message contains the `errors`/`error` fields of the response body
/// serialized as JSON, so callers can surface Shopify's own explanation.
///
/// # Example
///
/// ```rust
/// use shopify_catalog::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"errors":"Invalid API key or access token"}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert!(error.to_string().contains("Invalid API key"));
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A GET or DELETE request carried a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not take a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The platform answered with HTTP 404.
    #[error("Not Found")]
    NotFound,

    /// The platform answered with a 5xx status.
    #[error("Internal Server Error")]
    ServerError {
        /// The exact 5xx status code.
        code: u16,
    },

    /// Any other non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A successful response body did not match the expected shape.
    #[error("Failed to deserialize response from {path}: {source}")]
    Deserialize {
        /// The request path whose response failed to parse.
        path: String,
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// A request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code behind this error, if there was one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_catalog::clients::HttpError;
    ///
    /// assert_eq!(HttpError::NotFound.status(), Some(404));
    /// assert_eq!(HttpError::ServerError { code: 502 }.status(), Some(502));
    /// ```
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound => Some(404),
            Self::ServerError { code } => Some(*code),
            Self::Response(e) => Some(e.code),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidRequest(_) | Self::Deserialize { .. } | Self::Serialize(_) => None,
        }
    }
}
