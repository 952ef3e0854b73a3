//! Per-resource service facades.
//!
//! Services share one [`RestClient`](crate::clients::RestClient) and map
//! catalog operations onto fixed resource paths.

mod products;

pub use products::ProductService;
