//! REST dispatcher for the Shopify Admin API.
//!
//! This module provides a typed request dispatcher built on top of the
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! - [`RestClient`]: `get()`, `get_raw()`, `post()`, `put()`, `delete()` over path templates
//! - [`RestError`]: Error type for dispatcher operations
//!
//! # Path Templates
//!
//! Paths are absolute templates with positional placeholders, resolved
//! before dispatch:
//!
//! - `/admin/products.json` is sent as-is
//! - `/admin/orders/{0}.json` with `&[&123]` becomes `/admin/orders/123.json`
//! - `admin/products.json` is given a leading `/`
//!
//! # Response Handling
//!
//! Exactly one request is sent per call. A 404 fails with
//! [`HttpError::NotFound`](crate::clients::HttpError::NotFound), any 5xx with
//! [`HttpError::ServerError`](crate::clients::HttpError::ServerError), and
//! every other non-2xx status with
//! [`HttpError::Response`](crate::clients::HttpError::Response).

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
