//! Tauri Commands for the Product Catalog
//!
//! Exposes the two catalog reads to the frontend via Tauri IPC.

use tauri::State;
use tracing::error;

use crate::api::ProductSource;
use crate::domain::{ProductDetail, ProductSummary};
use crate::AppState;

/// List every product for the catalog screen
#[tauri::command]
pub async fn fetch_products(state: State<'_, AppState>) -> Result<Vec<ProductSummary>, String> {
    list_products(state.products.as_ref()).await
}

/// Get one product with its reviews for the detail screen
#[tauri::command]
pub async fn fetch_product(
    id: u32,
    state: State<'_, AppState>,
) -> Result<ProductDetail, String> {
    get_product(state.products.as_ref(), id).await
}

async fn list_products(source: &dyn ProductSource) -> Result<Vec<ProductSummary>, String> {
    source.list_products().await.map_err(|e| {
        error!(error = %e, "Error fetching products");
        e.to_string()
    })
}

async fn get_product(source: &dyn ProductSource, id: u32) -> Result<ProductDetail, String> {
    source.get_product(id).await.map_err(|e| {
        error!(id, error = %e, "Error fetching product details");
        e.to_string()
    })
}
