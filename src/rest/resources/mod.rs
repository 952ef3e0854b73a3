//! Record shapes for catalog resources.
//!
//! Every field is optional so the same type can describe both a full API
//! response and a partial create/update payload. Read-only fields (IDs,
//! timestamps, inventory counts) are never serialized.
//!
//! # Example
//!
//! ```rust
//! use shopify_catalog::rest::resources::{Product, ProductList};
//!
//! let list: ProductList =
//!     serde_json::from_str(r#"{"products":[{"id":1,"handle":"widget"}]}"#).unwrap();
//! assert_eq!(list.products[0].handle.as_deref(), Some("widget"));
//!
//! let draft = Product {
//!     title: Some("Widget".to_string()),
//!     ..Default::default()
//! };
//! assert_eq!(serde_json::to_string(&draft).unwrap(), r#"{"title":"Widget"}"#);
//! ```

mod common;
mod product;
mod variant;

pub use common::{ProductImage, ProductOption};
pub use product::{Product, ProductCount, ProductEnvelope, ProductList};
pub use variant::{InventoryPolicy, ProductVariant, WeightUnit};
