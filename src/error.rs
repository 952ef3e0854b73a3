//! Error types for the Shopify catalog client.
//!
//! This module contains the configuration error raised while validating
//! credentials and the crate-level [`ShopifyError`] that unifies setup-time
//! and request-time failures.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Blank credentials are rejected before any network
//! call is attempted.
//!
//! # Example
//!
//! ```rust
//! use shopify_catalog::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("   ");
//! assert!(matches!(
//!     result,
//!     Err(ConfigError::InvalidCredentials { field: "access token" })
//! ));
//! ```

use thiserror::Error;

use crate::clients::{HttpError, RestError};

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The access token or shop identifier is empty or whitespace-only.
    #[error("The {field} is required and cannot be blank. Details can be found at https://shopify.dev/docs/api/admin-rest")]
    InvalidCredentials {
        /// Which credential was rejected (`"access token"` or `"shop id"`).
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// Crate-level error covering both client setup and API calls.
///
/// Use the predicate helpers to branch on the error kinds callers usually
/// care about without matching through every layer.
///
/// # Example
///
/// ```rust
/// use shopify_catalog::{ShopifyClient, ShopifyError};
///
/// let result = ShopifyClient::new("", "my-shop");
/// assert!(result.unwrap_err().is_invalid_credentials());
/// ```
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// Configuration or credential validation failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The REST dispatcher failed.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ShopifyError {
    /// Returns `true` if the error was caused by blank credentials.
    #[must_use]
    pub const fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::Config(ConfigError::InvalidCredentials { .. }))
    }

    /// Returns `true` if the platform answered with HTTP 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Rest(RestError::Http(HttpError::NotFound)))
    }

    /// Returns `true` if the platform answered with a 5xx status.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::Rest(RestError::Http(HttpError::ServerError { .. }))
        )
    }
}

impl From<HttpError> for ShopifyError {
    fn from(error: HttpError) -> Self {
        Self::Rest(RestError::Http(error))
    }
}
