//! Detail Screen State
//!
//! `Loading` until the single request settles, then `Loaded` or `Error`
//! for the rest of the mount.

use std::future::Future;

use leptos::prelude::*;

use crate::models::ProductDetail;

/// Shown instead of the product when the request fails
pub const DETAIL_ERROR_MESSAGE: &str = "Error loading product details.";

/// Shown under the Reviews heading when a product has none
pub const NO_REVIEWS_MESSAGE: &str = "No reviews available.";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Loading,
    Loaded(ProductDetail),
    Error,
}

impl DetailState {
    /// Apply the outcome of the request. Only `Loading` moves; a settled
    /// state stays put until the screen is remounted.
    pub fn resolve(self, result: Result<ProductDetail, String>) -> Self {
        match self {
            DetailState::Loading => match result {
                Ok(product) => DetailState::Loaded(product),
                Err(_) => DetailState::Error,
            },
            settled => settled,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading)
    }
}

/// Fresh state for one mount of the detail screen, plus the task that
/// performs its single request.
///
/// `fetch` is called exactly once. If the screen's owner is disposed before
/// the task finishes, the result is dropped.
pub fn start_detail_load<F, Fut>(
    product_id: u32,
    fetch: F,
) -> (RwSignal<DetailState>, impl Future<Output = ()>)
where
    F: FnOnce(u32) -> Fut,
    Fut: Future<Output = Result<ProductDetail, String>>,
{
    let state = RwSignal::new(DetailState::default());
    let request = fetch(product_id);
    let task = async move {
        let result = request.await;
        state.try_update(|s| *s = std::mem::take(s).resolve(result));
    };
    (state, task)
}
