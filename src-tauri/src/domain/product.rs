//! Product Entities
//!
//! The catalog API serves two shapes of the same product: a summary used by
//! catalog rows and the full detail used by the detail screen.

use serde::{Deserialize, Serialize};
use super::review::Review;

/// Product fields shown in a catalog row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: u32,
    pub title: String,
    /// Not every product has a brand (groceries, for instance)
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub thumbnail: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
}

/// Physical dimensions as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// Full product record returned by the single-product endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub thumbnail: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,

    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub minimum_order_quantity: u32,
    #[serde(default)]
    pub warranty_information: String,
    #[serde(default)]
    pub shipping_information: String,
    #[serde(default)]
    pub availability_status: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub return_policy: String,
    /// Reviews in the order the API returned them
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[cfg(test)]
impl ProductDetail {
    /// The catalog-row view of this product
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            id: self.id,
            title: self.title.clone(),
            brand: self.brand.clone(),
            thumbnail: self.thumbnail.clone(),
            price: self.price,
            discount_percentage: self.discount_percentage,
            rating: self.rating,
        }
    }
}

/// Envelope of the collection endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<ProductSummary>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
}
