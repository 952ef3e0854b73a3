//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// Strips NUL characters and surrounding whitespace from a credential.
fn clean(value: &str) -> String {
    value.replace('\0', "").trim().to_string()
}

/// A validated Shopify Admin API access token.
///
/// The token is sent as the `X-Shopify-Access-Token` header on every request.
/// Its value is masked in debug output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use shopify_catalog::AccessToken;
///
/// let token = AccessToken::new("shpat_abc123").unwrap();
/// assert_eq!(token.as_ref(), "shpat_abc123");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCredentials`] if the token is empty or
    /// whitespace-only.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ConfigError> {
        let token = clean(token.as_ref());
        if token.is_empty() {
            return Err(ConfigError::InvalidCredentials {
                field: "access token",
            });
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated shop identifier (the store's `myshopify.com` subdomain).
///
/// # Accepted Formats
///
/// - `shop-name` - used as-is
/// - `shop-name.myshopify.com` - the suffix is stripped
///
/// # Example
///
/// ```rust
/// use shopify_catalog::ShopId;
///
/// let shop = ShopId::new("my-store").unwrap();
/// assert_eq!(shop.as_ref(), "my-store");
/// assert_eq!(shop.host(), "my-store.myshopify.com");
///
/// let shop = ShopId::new("my-store.myshopify.com").unwrap();
/// assert_eq!(shop.as_ref(), "my-store");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopId(String);

impl ShopId {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new validated shop identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCredentials`] if the identifier is empty,
    /// whitespace-only, or not a valid shop name (lowercase letters, digits
    /// and `-`, not starting or ending with `-`).
    pub fn new(shop_id: impl AsRef<str>) -> Result<Self, ConfigError> {
        let shop_id = clean(shop_id.as_ref()).to_ascii_lowercase();
        let shop_name = shop_id
            .strip_suffix(Self::SUFFIX)
            .map_or(shop_id.as_str(), str::trim_end);

        if !Self::is_valid_shop_name(shop_name) {
            return Err(ConfigError::InvalidCredentials { field: "shop id" });
        }
        Ok(Self(shop_name.to_string()))
    }

    // The name becomes the host's first label, so anything outside
    // [a-z0-9-] could redirect the request to another host
    fn is_valid_shop_name(name: &str) -> bool {
        if name.is_empty() || name.starts_with('-') || name.ends_with('-') {
            return false;
        }

        name.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }

    /// Returns the full host name, e.g. `my-store.myshopify.com`.
    #[must_use]
    pub fn host(&self) -> String {
        format!("{}{}", self.0, Self::SUFFIX)
    }
}

impl AsRef<str> for ShopId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated API host override.
///
/// When configured, requests are sent to this URL instead of the shop's
/// `myshopify.com` host. Useful for proxies and local test servers.
///
/// # Example
///
/// ```rust
/// use shopify_catalog::HostUrl;
///
/// let url = HostUrl::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), Some("127.0.0.1"));
/// assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL. A trailing `/` is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_start == host_end {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_empty_and_blank() {
        for token in ["", "   ", "\t\n", "\0\0"] {
            assert!(matches!(
                AccessToken::new(token),
                Err(ConfigError::InvalidCredentials {
                    field: "access token"
                })
            ));
        }
    }

    #[test]
    fn test_access_token_trims_whitespace() {
        let token = AccessToken::new("  abc  ").unwrap();
        assert_eq!(token.as_ref(), "abc");
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret-token").unwrap();
        let debug_output = format!("{:?}", token);
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_shop_id_rejects_empty_and_blank() {
        for shop in ["", "  ", ".myshopify.com", " \0 "] {
            assert!(matches!(
                ShopId::new(shop),
                Err(ConfigError::InvalidCredentials { field: "shop id" })
            ));
        }
    }

    #[test]
    fn test_shop_id_rejects_url_metacharacters() {
        for shop in [
            "evil.com#",
            "a/b",
            "u@h",
            "attacker.example/x?",
            "user@attacker.example#",
            "shop:443",
            "my shop",
            "other.example.com",
            "sub.my-shop.myshopify.com",
        ] {
            assert!(
                matches!(
                    ShopId::new(shop),
                    Err(ConfigError::InvalidCredentials { field: "shop id" })
                ),
                "{shop:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_shop_id_rejects_edge_hyphens() {
        assert!(ShopId::new("-shop").is_err());
        assert!(ShopId::new("shop-").is_err());
        assert!(ShopId::new("shop-2024").is_ok());
    }

    #[test]
    fn test_shop_id_is_lowercased() {
        let shop = ShopId::new("My-Shop.MyShopify.com").unwrap();
        assert_eq!(shop.as_ref(), "my-shop");
    }

    #[test]
    fn test_shop_id_builds_host() {
        let shop = ShopId::new("my-shop").unwrap();
        assert_eq!(shop.as_ref(), "my-shop");
        assert_eq!(shop.host(), "my-shop.myshopify.com");
        assert_eq!(shop.to_string(), "my-shop");
    }

    #[test]
    fn test_shop_id_strips_myshopify_suffix() {
        let shop = ShopId::new("my-shop.myshopify.com").unwrap();
        assert_eq!(shop.as_ref(), "my-shop");
        assert_eq!(shop.host(), "my-shop.myshopify.com");
    }

    #[test]
    fn test_host_url_validates_format() {
        let url = HostUrl::new("https://proxy.example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), Some("proxy.example.com"));

        let url = HostUrl::new("http://localhost:3000").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), Some("localhost"));

        let url = HostUrl::new("https://proxy.example.com/shopify/").unwrap();
        assert_eq!(url.as_ref(), "https://proxy.example.com/shopify");
        assert_eq!(url.host_name(), Some("proxy.example.com"));
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        assert!(HostUrl::new("proxy.example.com").is_err());
        assert!(HostUrl::new("https://").is_err());
        assert!(HostUrl::new("://example.com").is_err());
        assert!(HostUrl::new("https://:8080").is_err());
    }
}
