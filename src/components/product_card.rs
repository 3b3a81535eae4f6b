use leptos::prelude::*;

use crate::components::rating_stars::RatingStars;
use crate::models::{format_price, Product};

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let price = format_price(product.price);

    view! {
        <div class="product-card">
            <div class="product-image">
                <img src=product.image.clone() alt=product.title.clone() />
                <div class="hover-info">
                    <p>{product.description.clone()}</p>
                </div>
            </div>
            <div class="product-details">
                <h3>{product.title.clone()}</h3>
                <RatingStars rating=product.rating.clone() />
                <p class="category">{product.category.clone()}</p>
                <p class="price">{price}</p>
                <button class="add-to-cart">"Add to Cart"</button>
            </div>
        </div>
    }
}
