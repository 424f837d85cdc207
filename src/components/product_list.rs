//! Product List Component
//!
//! The catalog screen: one collection fetch per mount, one row per product.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::ProductRow;
use crate::store::{start_catalog_load, CatalogStateStoreFields};

/// Catalog screen
#[component]
pub fn ProductList() -> impl IntoView {
    // One collection fetch per mount
    let (store, load) = start_catalog_load(|| async {
        let result = commands::fetch_products().await;
        match &result {
            Ok(loaded) => {
                web_sys::console::log_1(&format!("[CATALOG] Loaded {} products", loaded.len()).into());
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[CATALOG] Error fetching products: {}", e).into());
            }
        }
        result
    });
    spawn_local(load);

    view! {
        <div class="catalog-screen">
            <h1 class="catalog-title">"Product's Page"</h1>

            <div class="product-list">
                <For
                    // Index in the key: the API may repeat an id and every row still renders
                    each=move || store.products().get().into_iter().enumerate()
                    key=|(index, product)| (*index, product.id)
                    children=move |(_, product)| {
                        view! { <ProductRow product=product /> }
                    }
                />
            </div>
        </div>
    }
}
