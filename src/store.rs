//! Catalog Screen Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. One store is
//! created per catalog mount and dropped with it.

use std::future::Future;

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::ProductSummary;

/// Catalog screen state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Products in the order the API returned them
    pub products: Vec<ProductSummary>,
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Rows to show for a finished collection request.
///
/// A failed request leaves the list empty; the caller reports the error.
pub fn catalog_rows(result: &Result<Vec<ProductSummary>, String>) -> Vec<ProductSummary> {
    match result {
        Ok(products) => products.clone(),
        Err(_) => Vec::new(),
    }
}

/// Fresh store for one mount of the catalog screen, plus the task that
/// performs its single collection request.
///
/// `fetch` is called exactly once; a result arriving after the store is
/// disposed is dropped.
pub fn start_catalog_load<F, Fut>(fetch: F) -> (CatalogStore, impl Future<Output = ()>)
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<ProductSummary>, String>>,
{
    let store: CatalogStore = Store::new(CatalogState::default());
    let request = fetch();
    let task = async move {
        let result = request.await;
        if let Some(mut products) = store.products().try_write() {
            *products = catalog_rows(&result);
        }
    };
    (store, task)
}
