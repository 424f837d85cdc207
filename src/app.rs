//! Catalog Frontend App
//!
//! Two-screen stack: the catalog, and the detail of one product on top.

use leptos::prelude::*;

use crate::components::{ProductDetailView, ProductList};
use crate::context::{AppContext, Screen};

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    let ctx = AppContext::new(signal(Screen::Catalog));
    provide_context(ctx);

    // New screens start at the top of the page
    Effect::new(move |_| {
        let _ = ctx.screen.get();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {
        <main class="app-layout">
            // Each navigation mounts a fresh screen, which fetches its own data
            {move || match ctx.screen.get() {
                Screen::Catalog => view! { <ProductList /> }.into_any(),
                Screen::Detail { product_id } => view! {
                    <ProductDetailView product_id=product_id />
                }.into_any(),
            }}
        </main>
    }
}
