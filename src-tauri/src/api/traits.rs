//! API Layer - Core Traits
//!
//! Defines the abstract interface the commands read products through.
//! Implementations can hit the network or serve canned data.

use async_trait::async_trait;
use crate::domain::{ProductDetail, ProductSummary};
use super::ApiResult;

/// Read-only source of catalog products
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// The full collection, in the order the source returns it
    async fn list_products(&self) -> ApiResult<Vec<ProductSummary>>;

    /// One product with its reviews
    async fn get_product(&self, id: u32) -> ApiResult<ProductDetail>;
}
