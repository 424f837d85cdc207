//! Product Detail Component
//!
//! The detail screen. Fetches the product named by the navigation id once
//! per mount and renders it in loading, error or loaded form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{DetailSection, LoadingIndicator, ReviewList};
use crate::context::use_app_context;
use crate::models::{discount_label, price_label, rating_label, ProductDetail};
use crate::view_state::{start_detail_load, DetailState, DETAIL_ERROR_MESSAGE};

/// Detail screen for one product
#[component]
pub fn ProductDetailView(product_id: u32) -> impl IntoView {
    let ctx = use_app_context();

    // One product fetch per mount; a new id means a new mount
    let (state, load) = start_detail_load(product_id, |id| async move {
        web_sys::console::log_1(&format!("[DETAIL] Loading product {}", id).into());
        let result = commands::fetch_product(id).await;
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("[DETAIL] Error fetching product details: {}", e).into());
        }
        result
    });
    spawn_local(load);

    view! {
        <div class="detail-screen" aria-busy=move || state.with(|s| s.is_loading()).to_string()>
            <button class="back-button" on:click=move |_| ctx.back()>"‹ Back"</button>

            {move || match state.get() {
                DetailState::Loading => view! { <LoadingIndicator /> }.into_any(),
                DetailState::Error => view! {
                    <p class="error-text">{DETAIL_ERROR_MESSAGE}</p>
                }.into_any(),
                DetailState::Loaded(product) => view! {
                    <ProductDetailBody product=product />
                }.into_any(),
            }}
        </div>
    }
}

/// Everything shown once the product has loaded
#[component]
fn ProductDetailBody(product: ProductDetail) -> impl IntoView {
    let brand = product.brand_label();
    let dimension = product.dimension_label();

    view! {
        <div class="image-container">
            <img class="detail-image" src=product.thumbnail.clone() alt="" />
        </div>

        <div class="info-container">
            <p class="category">{format!("Category: {}", product.category)}</p>
            <p class="detail-title">{product.title.clone()}</p>
            <p class="detail-brand">{brand}</p>
            <p class="detail-price">{price_label(product.price)}</p>
            <p class="detail-discount">{discount_label(product.discount_percentage)}</p>
            <p class="detail-rating">{rating_label(product.rating)}</p>
            <p class="detail-stock">{format!("Stock: {}", product.stock)}</p>
        </div>

        <DetailSection title="Specification">
            <p class="detail-description">{format!("Description: {}", product.description)}</p>
            <p class="detail-line">{format!("SKU: {}", product.sku)}</p>
            <p class="detail-line">{format!("Weight: {}", product.weight)}</p>
            <p class="detail-line">{dimension}</p>
            <p class="detail-line">{format!("Minimum Order Quantity: {}", product.minimum_order_quantity)}</p>
        </DetailSection>

        <DetailSection title="Warranty Information">
            <p class="detail-line">{format!("Warranty Period: {}", product.warranty_information)}</p>
            <p class="detail-line">{format!("Shipping Information: {}", product.shipping_information)}</p>
            <p class="detail-line">{format!("Availability Status: {}", product.availability_status)}</p>
        </DetailSection>

        <DetailSection title="Reviews">
            <ReviewList reviews=product.reviews.clone() />
        </DetailSection>

        <DetailSection title="Return Policy">
            <p class="detail-line">{product.return_policy.clone()}</p>
        </DetailSection>
    }
}
