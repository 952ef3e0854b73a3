//! HTTP response types for the Shopify catalog client.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// An HTTP response from the Shopify Admin API.
///
/// Holds the status code, the headers, and the raw body text. Typed access
/// to the body goes through [`HttpResponse::json`].
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns the first value of the header `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }

    /// Deserializes the body as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] if the body is not valid JSON for `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_catalog::clients::HttpResponse;
    /// use std::collections::HashMap;
    ///
    /// let response = HttpResponse::new(200, HashMap::new(), r#"{"count": 3}"#.to_string());
    /// let value: serde_json::Value = response.json().unwrap();
    /// assert_eq!(value["count"], 3);
    /// ```
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Serializes the error fields of the body into a compact JSON message.
    ///
    /// Picks `errors`, `error` and `error_description` from the body and
    /// appends the request ID as an `error_reference`. Falls back to the raw
    /// body when it is not JSON.
    #[must_use]
    pub fn error_message(&self) -> String {
        let mut error_body = serde_json::Map::new();

        match serde_json::from_str::<serde_json::Value>(&self.body) {
            Ok(body) => {
                for key in ["errors", "error", "error_description"] {
                    if let Some(value) = body.get(key) {
                        error_body.insert(key.to_string(), value.clone());
                    }
                }
            }
            Err(_) if !self.body.trim().is_empty() => {
                error_body.insert(
                    "raw_body".to_string(),
                    serde_json::Value::String(self.body.clone()),
                );
            }
            Err(_) => {}
        }

        if let Some(request_id) = self.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::Value::Object(error_body).to_string()
    }
}
