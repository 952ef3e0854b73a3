//! REST-specific error types for the Shopify catalog client.
//!
//! - [`RestError::InvalidPath`]: When a path template cannot be resolved
//! - [`RestError::Http`]: Wraps underlying HTTP errors
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_catalog::clients::{HttpError, RestError};
//!
//! match client.get::<ProductList>("/admin/products.json", &[]).await {
//!     Ok(list) => println!("{} products", list.products.len()),
//!     Err(RestError::Http(HttpError::NotFound)) => println!("Not found"),
//!     Err(e) => println!("Error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use crate::rest::PathTemplateError;
use thiserror::Error;

/// Error type for REST dispatcher operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// The path template could not be resolved against its arguments.
    ///
    /// Raised before any network call is made.
    #[error("Invalid REST API path '{template}': {source}")]
    InvalidPath {
        /// The template that failed to resolve.
        template: String,
        /// Why it failed.
        source: PathTemplateError,
    },

    /// An HTTP-level error occurred.
    ///
    /// This variant wraps [`HttpError`] for unified error handling.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns the HTTP status code behind this error, if there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::InvalidPath { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_error_includes_template_and_reason() {
        let error = RestError::InvalidPath {
            template: "/admin/products/{1}.json".to_string(),
            source: PathTemplateError::MissingArgument {
                index: 1,
                supplied: 0,
            },
        };
        let message = error.to_string();

        assert!(message.contains("Invalid REST API path"));
        assert!(message.contains("/admin/products/{1}.json"));
        assert!(message.contains("no matching argument"));
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_http_error_is_transparent() {
        let rest_error: RestError = HttpError::NotFound.into();
        assert_eq!(rest_error.to_string(), "Not Found");
        assert_eq!(rest_error.status(), Some(404));

        let rest_error: RestError = HttpError::ServerError { code: 500 }.into();
        assert_eq!(rest_error.to_string(), "Internal Server Error");
        assert_eq!(rest_error.status(), Some(500));
    }

    #[test]
    fn test_all_error_variants_implement_std_error() {
        let path_error: &dyn std::error::Error = &RestError::InvalidPath {
            template: "{x}".to_string(),
            source: PathTemplateError::InvalidPlaceholder {
                placeholder: "x".to_string(),
            },
        };
        let _ = path_error;

        let http_error: &dyn std::error::Error = &RestError::Http(HttpError::NotFound);
        let _ = http_error;
    }
}
