use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"Storefront"</h1>
                <p class="sidebar-subtitle">"Profile and catalog demos"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Home"</a>
                </li>
                <li class="nav-item">
                    <a href="/profile" class="nav-link">"Profile"</a>
                </li>
                <li class="nav-item">
                    <a href="/products" class="nav-link">"Products"</a>
                </li>
            </ul>
        </nav>
    }
}
