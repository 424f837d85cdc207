//! Review Entity
//!
//! A customer review, always nested under one product detail.

use serde::{Deserialize, Serialize};

/// A single review entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Star rating given by the reviewer
    pub rating: f64,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub reviewer_name: String,
    #[serde(default)]
    pub reviewer_email: String,
}
