use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::sidebar::Sidebar;
use crate::config::AppConfig;
use crate::pages::catalog::CatalogPage;
use crate::pages::home::HomePage;
use crate::pages::profile::ProfilePage;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::default());

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/profile") view=ProfilePage />
                        <Route path=path!("/products") view=CatalogPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
