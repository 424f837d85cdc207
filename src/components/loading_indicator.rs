//! Loading Indicator Component

use leptos::prelude::*;

/// Spinner shown while a request is in flight
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-container" role="progressbar" aria-busy="true">
            <div class="spinner"></div>
        </div>
    }
}
