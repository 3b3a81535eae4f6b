use leptos::prelude::*;

use crate::models::Rating;
use crate::rating::render_stars;

#[component]
pub fn RatingStars(rating: Rating) -> impl IntoView {
    view! {
        <div class="rating">
            <span class="stars" title=format!("{:.1} out of 5", rating.rate)>
                {render_stars(rating.rate)}
            </span>
            <span class="count">{format!("({} reviews)", rating.count)}</span>
        </div>
    }
}
