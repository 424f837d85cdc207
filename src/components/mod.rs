//! UI Components
//!
//! Leptos components for the catalog and detail screens.

mod product_list;
mod product_row;
mod product_detail;
mod detail_section;
mod review_list;
mod loading_indicator;

pub use product_list::ProductList;
pub use product_row::ProductRow;
pub use product_detail::ProductDetailView;
pub use detail_section::DetailSection;
pub use review_list::ReviewList;
pub use loading_indicator::LoadingIndicator;
