//! Domain Layer
//!
//! Product shapes returned by the catalog API.
//! This layer has NO external dependencies (except serde for serialization).

mod product;
mod review;

pub use product::{Dimensions, ProductDetail, ProductPage, ProductSummary};
pub use review::Review;
