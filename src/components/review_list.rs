//! Review List Component
//!
//! Reviews of one product, or a placeholder when there are none.

use leptos::prelude::*;

use crate::models::{rating_label, Review};
use crate::view_state::NO_REVIEWS_MESSAGE;

#[component]
pub fn ReviewList(reviews: Vec<Review>) -> impl IntoView {
    if reviews.is_empty() {
        return view! { <p class="no-reviews">{NO_REVIEWS_MESSAGE}</p> }.into_any();
    }

    view! {
        <div class="review-list">
            {reviews.into_iter().map(|review| view! { <ReviewItem review=review /> }).collect_view()}
        </div>
    }
    .into_any()
}

/// A single review entry
#[component]
fn ReviewItem(review: Review) -> impl IntoView {
    view! {
        <div class="review-item">
            <p class="reviewer-name">{review.reviewer_name.clone()}</p>
            <p class="reviewer-email">{review.reviewer_email.clone()}</p>
            <p class="review-text">{review.quoted_comment()}</p>
            <p class="review-rating">{rating_label(review.rating)}</p>
        </div>
    }
}
