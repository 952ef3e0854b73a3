//! REST resource paths and record shapes.
//!
//! - [`format_path`]: Resolves positional path templates like `/admin/products/{0}.json`
//! - [`resources`]: serde record shapes for the catalog (products, variants, images, options)

mod path;
pub mod resources;

pub use path::{format_path, PathTemplateError};
