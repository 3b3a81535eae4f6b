use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <h2>"Welcome to Storefront"</h2>
            <p class="page-description">
                "Two small demos: a user profile and a filterable product catalog."
            </p>

            <div class="card-grid">
                <div class="card">
                    <h3>"View Profile"</h3>
                    <p>"A profile card that loads after a short delay"</p>
                    <a href="/profile" class="btn btn-primary">"Open Profile"</a>
                </div>
                <div class="card">
                    <h3>"Browse Products"</h3>
                    <p>"Products and categories fetched live from the Fake Store API"</p>
                    <a href="/products" class="btn btn-primary">"Browse Now"</a>
                </div>
            </div>
        </div>
    }
}
