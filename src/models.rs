//! Frontend Models
//!
//! Data structures matching backend entities, plus the display strings
//! the screens render from them.

use serde::{Deserialize, Serialize};

/// Catalog row data (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
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
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// Review entry (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub rating: f64,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub reviewer_name: String,
    #[serde(default)]
    pub reviewer_email: String,
}

/// Full product record (matches backend)
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
    #[serde(default)]
    pub reviews: Vec<Review>,
}

// ========================
// Display helpers
// ========================

pub fn price_label(price: f64) -> String {
    format!("${}", price)
}

pub fn discount_label(discount_percentage: f64) -> String {
    format!("Discount: {}%", discount_percentage)
}

pub fn rating_label(rating: impl std::fmt::Display) -> String {
    format!("Rating: {}", rating)
}

impl ProductSummary {
    /// Missing brands render as an empty line
    pub fn brand_label(&self) -> String {
        self.brand.clone().unwrap_or_default()
    }
}

impl ProductDetail {
    pub fn brand_label(&self) -> String {
        self.brand.clone().unwrap_or_default()
    }

    pub fn dimension_label(&self) -> String {
        let d = self.dimensions;
        format!("Dimension: {} x {} x {}", d.width, d.height, d.depth)
    }
}

impl Review {
    /// Comment wrapped in quotes, as shown under the reviewer
    pub fn quoted_comment(&self) -> String {
        format!("\"{}\"", self.comment)
    }
}
