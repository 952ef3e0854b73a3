//! HTTP client types for Shopify Admin API communication.
//!
//! This module provides the request dispatcher: it owns the credentials'
//! headers, builds the per-shop base URI, serializes bodies, and maps
//! response statuses onto typed errors.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for one shop
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`rest::RestClient`]: Typed dispatcher over path templates
//! - [`rest::RestError`]: Dispatcher error type
//!
//! # No Retries
//!
//! Every call performs one round trip. Rate limiting (429) and server
//! errors (5xx) are returned to the caller, who may retry externally.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::HttpClient;
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::{RestClient, RestError};
