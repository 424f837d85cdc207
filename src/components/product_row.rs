//! Product Row Component
//!
//! One tappable catalog entry.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{discount_label, price_label, rating_label, ProductSummary};

/// A single product row; tapping it opens the detail screen
#[component]
pub fn ProductRow(product: ProductSummary) -> impl IntoView {
    let ctx = use_app_context();

    let title = product.title.clone();
    let brand = product.brand_label();
    let thumbnail = product.thumbnail.clone();
    let price = price_label(product.price);
    let discount = discount_label(product.discount_percentage);
    let rating = rating_label(product.rating);

    view! {
        <button class="product-button" on:click=move |_| ctx.open_product(&product)>
            <div class="product-container">
                <img class="product-image" src=thumbnail alt="" />
                <div class="product-info">
                    <p class="product-title">{title}</p>
                    <p class="product-brand">{brand}</p>
                    <p class="product-price">{price}</p>
                    <p class="product-discount">{discount}</p>
                    <p class="product-rating">{rating}</p>
                </div>
            </div>
        </button>
    }
}
