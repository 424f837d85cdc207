//! Detail Section Component
//!
//! White card with a heading, used for each block of the detail screen.

use leptos::prelude::*;

#[component]
pub fn DetailSection(
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="section-container">
            <h2 class="section-title">{title}</h2>
            {children()}
        </section>
    }
}
