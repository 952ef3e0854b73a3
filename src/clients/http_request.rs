//! Requests as the dispatcher hands them to [`HttpClient`](super::HttpClient).

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the catalog operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Read a resource or a collection.
    Get,
    /// Create a resource.
    Post,
    /// Update a resource.
    Put,
    /// Remove a resource.
    Delete,
}

impl HttpMethod {
    /// Returns `true` for methods that never carry a request body.
    #[must_use]
    pub const fn is_bodiless(self) -> bool {
        matches!(self, Self::Get | Self::Delete)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        })
    }
}

/// Encoding of a request body.
///
/// Only JSON is spoken by the catalog endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// `application/json`
    Json,
}

impl DataType {
    /// Returns the `Content-Type` value for this encoding.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

/// One call against a resource path, with an optional JSON body.
///
/// # Example
///
/// ```rust
/// use shopify_catalog::clients::{DataType, HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let list = HttpRequest::builder(HttpMethod::Get, "/admin/products.json")
///     .build()
///     .unwrap();
/// assert!(list.body.is_none());
///
/// let create = HttpRequest::builder(HttpMethod::Post, "/admin/products.json")
///     .body(json!({"product": {"title": "New Product"}}))
///     .body_type(DataType::Json)
///     .build()
///     .unwrap();
/// assert_eq!(create.body_type, Some(DataType::Json));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// Method to send with.
    pub http_method: HttpMethod,
    /// Resolved absolute path, e.g. `/admin/products/1.json`.
    pub path: String,
    /// Body to send, if any.
    pub body: Option<serde_json::Value>,
    /// How `body` is encoded; required whenever `body` is set.
    pub body_type: Option<DataType>,
}

impl HttpRequest {
    /// Starts a request for `method` against `path`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder {
            request: Self {
                http_method: method,
                path: path.into(),
                body: None,
                body_type: None,
            },
        }
    }

    /// Checks that the body agrees with the method and body type.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::UnexpectedBody`] for a GET or DELETE
    /// with a body, and [`InvalidHttpRequestError::MissingBodyType`] for a
    /// body with no `body_type`.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (&self.body, self.body_type) {
            (None, _) => Ok(()),
            (Some(_), _) if self.http_method.is_bodiless() => {
                Err(InvalidHttpRequestError::UnexpectedBody {
                    method: self.http_method.to_string(),
                })
            }
            (Some(_), None) => Err(InvalidHttpRequestError::MissingBodyType),
            (Some(_), Some(_)) => Ok(()),
        }
    }
}

/// Builder returned by [`HttpRequest::builder`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    /// Attaches a body. Pair it with [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    /// Declares how the body is encoded.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.request.body_type = Some(body_type);
        self
    }

    /// Finishes the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if [`HttpRequest::verify`] fails.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        self.request.verify()?;
        Ok(self.request)
    }
}
