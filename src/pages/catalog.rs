use leptos::prelude::*;
use send_wrapper::SendWrapper;
use tracing::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::cancel::CancelToken;
use crate::catalog::{CatalogEvent, CatalogState, FetchStatus, Phase};
use crate::components::category_filter::CategoryFilter;
use crate::components::product_card::ProductCard;
use crate::config::use_config;

/// Apply `event` unless the view was torn down while the request was in flight.
fn dispatch(token: &CancelToken, set_state: WriteSignal<CatalogState>, event: CatalogEvent) {
    if token.is_cancelled() {
        debug!("Dropping {} after teardown", event.name());
        return;
    }
    set_state.update(|s| {
        s.apply_unless_cancelled(token, event);
    });
}

fn spawn_products(url: String, token: CancelToken, set_state: WriteSignal<CatalogState>) {
    spawn_local(async move {
        let event = match api::fetch_products(&url, &token).await {
            Ok(products) => {
                info!("Fetched {} products", products.len());
                CatalogEvent::ProductsLoaded(products)
            }
            Err(e) => {
                if !e.is_cancelled() {
                    warn!("Failed to fetch products: {}", e);
                }
                CatalogEvent::ProductsFailed(e)
            }
        };
        dispatch(&token, set_state, event);
    });
}

fn spawn_categories(url: String, token: CancelToken, set_state: WriteSignal<CatalogState>) {
    spawn_local(async move {
        let event = match api::fetch_categories(&url, &token).await {
            Ok(categories) => {
                info!("Fetched {} categories", categories.len());
                CatalogEvent::CategoriesLoaded(categories)
            }
            Err(e) => {
                if !e.is_cancelled() {
                    warn!("Failed to fetch categories: {}", e);
                }
                CatalogEvent::CategoriesFailed(e)
            }
        };
        dispatch(&token, set_state, event);
    });
}

/// Product grid with category filtering.
///
/// Products and categories are fetched concurrently on mount and share one
/// cancellation token, which is cancelled on teardown. Only the product fetch
/// ends the loading state. Retry re-fetches products only; categories are
/// left as they were.
#[component]
pub fn CatalogView() -> impl IntoView {
    let config = use_config();
    let products_url = config.products_url();
    let categories_url = config.categories_url();

    let (state, set_state) = signal(CatalogState::new());
    let token = CancelToken::new();

    info!("Catalog mounted, fetching products and categories");
    spawn_products(products_url.clone(), token.clone(), set_state);
    spawn_categories(categories_url, token.clone(), set_state);

    let retry_token = SendWrapper::new(token.clone());
    let on_retry = move |_: leptos::ev::MouseEvent| {
        set_state.update(|s| s.apply(CatalogEvent::ProductsRequested));
        spawn_products(products_url.clone(), (*retry_token).clone(), set_state);
    };

    let cleanup_token = SendWrapper::new(token);
    on_cleanup(move || {
        if cleanup_token.cancel() {
            info!("Cleanup: catalog requests aborted");
        }
    });

    let selected = Signal::derive(move || state.with(|s| s.selected_category.clone()));
    let on_select = Callback::new(move |category: String| {
        set_state.update(|s| s.apply(CatalogEvent::CategorySelected(category)));
    });

    view! {
        <div class="page catalog-page">
            {move || match state.with(CatalogState::phase) {
                Phase::Loading => view! {
                    <div class="loading-container">
                        <div class="loader"></div>
                        <p>"Loading amazing products..."</p>
                    </div>
                }.into_any(),
                Phase::Errored(message) => view! {
                    <div class="error-container">
                        <h3>"\u{274C} Oops! Something went wrong"</h3>
                        <p>{message}</p>
                        <button on:click=on_retry.clone()>"Try Again"</button>
                    </div>
                }.into_any(),
                Phase::Ready => {
                    let (categories, products) = state.with(|s| {
                        let visible = s.visible_products().into_iter().cloned().collect::<Vec<_>>();
                        let categories = (s.categories_status == FetchStatus::Loaded)
                            .then(|| s.categories.clone());
                        (categories, visible)
                    });
                    view! {
                        <div class="product-list">
                            <h1>"Featured Products"</h1>
                            {categories.map(|categories| view! {
                                <CategoryFilter categories=categories selected=selected on_select=on_select />
                            })}
                            <div class="products-container">
                                {products.into_iter().map(|product| {
                                    view! { <ProductCard product=product /> }
                                }).collect::<Vec<_>>()}
                            </div>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    view! { <CatalogView /> }
}
