//! Product record shape and its response envelopes.
//!
//! The Admin API wraps product payloads in a keyed envelope:
//!
//! - `GET /admin/products.json` → `{"products": [...]}` ([`ProductList`])
//! - `GET /admin/products/{id}.json` → `{"product": {...}}` ([`ProductEnvelope`])
//! - `GET /admin/products/count.json` → `{"count": 2}` ([`ProductCount`])

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{ProductImage, ProductOption};
use super::variant::ProductVariant;

/// A product in a Shopify store.
///
/// A product can have multiple variants (e.g., different sizes or colors),
/// up to three options, and images.
///
/// # Fields
///
/// ## Writable Fields
/// - `title` - The name of the product
/// - `body_html` - The description of the product in HTML format
/// - `vendor` - The name of the product's vendor
/// - `product_type` - A categorization for the product
/// - `handle` - The URL-friendly name (generated from the title when omitted)
/// - `published_at` - When the product was published
/// - `published_scope` - Where the product is published (e.g., "web", "global")
/// - `tags` - A comma-separated list of tags
/// - `template_suffix` - The suffix of the template used for this product
///
/// ## Read-Only Fields
/// - `id` - The unique identifier
/// - `created_at` - When the product was created
/// - `updated_at` - When the product was last updated
///
/// ## Nested Records
/// - `variants` - The product's variants
/// - `options` - The product's options
/// - `images` - The product's images
/// - `image` - The main/featured image
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    /// The unique identifier of the product.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The name of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The description of the product in HTML format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// The name of the product's vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// A categorization for the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// When the product was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// The URL-friendly name of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// When the product was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// When the product was published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// The suffix of the Liquid template used for the product page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    /// Where the product is published.
    /// Valid values: "web", "global".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,

    /// A comma-separated list of tags for the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// The variants of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<ProductVariant>>,

    /// The options of the product (e.g., Size, Color).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ProductOption>>,

    /// All images associated with the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,

    /// The main/featured image of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ProductImage>,
}

/// The `{"products": [...]}` envelope returned by the list endpoint.
///
/// Order follows the wire payload.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductList {
    /// The products on this page.
    pub products: Vec<Product>,
}

/// The `{"product": {...}}` envelope used for single-product requests and
/// responses.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductEnvelope {
    /// The wrapped product.
    pub product: Product,
}

/// The `{"count": N}` envelope returned by the count endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductCount {
    /// Number of products in the store.
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::{InventoryPolicy, WeightUnit};

    #[test]
    fn test_product_serialization_with_all_fields() {
        let product = Product {
            id: Some(12345), // Read-only, should be skipped in serialization
            title: Some("Test Product".to_string()),
            body_html: Some("<p>Description</p>".to_string()),
            vendor: Some("Test Vendor".to_string()),
            product_type: Some("T-Shirts".to_string()),
            handle: Some("test-product".to_string()),
            created_at: Some(
                DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
            ), // Read-only
            updated_at: Some(
                DateTime::parse_from_rfc3339("2024-06-20T15:45:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
            ), // Read-only
            published_at: Some(
                DateTime::parse_from_rfc3339("2024-01-20T12:00:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
            ),
            published_scope: Some("global".to_string()),
            tags: Some("summer, sale, featured".to_string()),
            template_suffix: Some("custom".to_string()),
            variants: Some(vec![ProductVariant {
                id: Some(111),
                title: Some("Default".to_string()),
                price: Some("29.99".to_string()),
                ..Default::default()
            }]),
            options: Some(vec![ProductOption {
                name: Some("Size".to_string()),
                values: Some(vec!["Small".to_string(), "Medium".to_string()]),
                ..Default::default()
            }]),
            images: Some(vec![]),
            image: None,
        };

        let parsed = serde_json::to_value(&product).unwrap();

        // Writable fields should be present
        assert_eq!(parsed["title"], "Test Product");
        assert_eq!(parsed["body_html"], "<p>Description</p>");
        assert_eq!(parsed["vendor"], "Test Vendor");
        assert_eq!(parsed["product_type"], "T-Shirts");
        assert_eq!(parsed["handle"], "test-product");
        assert_eq!(parsed["published_scope"], "global");
        assert_eq!(parsed["tags"], "summer, sale, featured");
        assert_eq!(parsed["template_suffix"], "custom");
        assert_eq!(parsed["variants"][0]["price"], "29.99");
        assert_eq!(parsed["options"][0]["name"], "Size");

        // Read-only fields should be omitted
        assert!(parsed.get("id").is_none());
        assert!(parsed.get("created_at").is_none());
        assert!(parsed.get("updated_at").is_none());
        assert!(parsed["variants"][0].get("id").is_none());

        // None fields should be omitted
        assert!(parsed.get("image").is_none());
    }

    #[test]
    fn test_product_deserialization_from_api_response() {
        let json = r#"{
            "id": 632910392,
            "title": "IPod Nano - 8GB",
            "body_html": "<p>It's the small iPod with one very big idea.</p>",
            "vendor": "Apple",
            "product_type": "Cult Products",
            "created_at": "2024-01-15T10:30:00-05:00",
            "handle": "ipod-nano",
            "updated_at": "2024-06-20T15:45:00-04:00",
            "published_at": "2024-01-20T12:00:00-05:00",
            "template_suffix": null,
            "published_scope": "global",
            "tags": "Emotive, Flash Memory, MP3, Music",
            "variants": [
                {
                    "id": 808950810,
                    "product_id": 632910392,
                    "title": "Pink",
                    "price": "199.00",
                    "sku": "IPOD2008PINK",
                    "position": 1,
                    "inventory_policy": "continue",
                    "weight": 0.2,
                    "weight_unit": "kg"
                },
                {
                    "id": 49148385,
                    "product_id": 632910392,
                    "title": "Red",
                    "price": "199.00",
                    "position": 2
                }
            ],
            "options": [
                {
                    "id": 594680422,
                    "product_id": 632910392,
                    "name": "Color",
                    "position": 1,
                    "values": ["Pink", "Red"]
                }
            ],
            "images": [
                {
                    "id": 850703190,
                    "product_id": 632910392,
                    "position": 1,
                    "src": "https://cdn.shopify.com/s/files/1/ipod-nano.png",
                    "variant_ids": [808950810]
                }
            ],
            "image": {
                "id": 850703190,
                "position": 1,
                "src": "https://cdn.shopify.com/s/files/1/ipod-nano.png"
            }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, Some(632_910_392));
        assert_eq!(product.title.as_deref(), Some("IPod Nano - 8GB"));
        assert_eq!(product.vendor.as_deref(), Some("Apple"));
        assert_eq!(product.handle.as_deref(), Some("ipod-nano"));
        assert!(product.template_suffix.is_none());
        assert!(product.created_at.is_some());
        assert!(product.published_at.is_some());

        let variants = product.variants.unwrap();
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0].title.as_deref(), Some("Pink"));
        assert_eq!(variants[0].inventory_policy, Some(InventoryPolicy::Continue));
        assert_eq!(variants[0].weight_unit, Some(WeightUnit::Kg));
        assert_eq!(variants[1].position, Some(2));

        let options = product.options.unwrap();
        assert_eq!(options[0].name.as_deref(), Some("Color"));

        let images = product.images.unwrap();
        assert_eq!(images[0].variant_ids, Some(vec![808_950_810]));
        assert_eq!(product.image.unwrap().id, Some(850_703_190));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"id":1,"handle":"widget","status":"active","admin_graphql_api_id":"gid://shopify/Product/1"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, Some(1));
        assert_eq!(product.handle.as_deref(), Some("widget"));
    }

    #[test]
    fn test_product_list_preserves_order() {
        let json = r#"{"products":[{"id":3,"handle":"c"},{"id":1,"handle":"a"},{"id":2,"handle":"b"}]}"#;
        let list: ProductList = serde_json::from_str(json).unwrap();

        let ids: Vec<Option<u64>> = list.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![Some(3), Some(1), Some(2)]);
    }

    #[test]
    fn test_product_list_requires_products_key() {
        assert!(serde_json::from_str::<ProductList>(r#"{"product":{"id":1}}"#).is_err());
        assert!(serde_json::from_str::<ProductList>(r#"{"products":{}}"#).is_err());

        let empty: ProductList = serde_json::from_str(r#"{"products":[]}"#).unwrap();
        assert!(empty.products.is_empty());
    }

    #[test]
    fn test_product_envelope_wraps_under_product_key() {
        let envelope = ProductEnvelope {
            product: Product {
                title: Some("Burton Custom Freestyle 151".to_string()),
                vendor: Some("Burton".to_string()),
                ..Default::default()
            },
        };

        let parsed = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({
                "product": {
                    "title": "Burton Custom Freestyle 151",
                    "vendor": "Burton"
                }
            })
        );
    }

    #[test]
    fn test_product_count_deserialization() {
        let count: ProductCount = serde_json::from_str(r#"{"count":2}"#).unwrap();
        assert_eq!(count.count, 2);
    }
}
