use leptos::prelude::*;

use crate::catalog::category_label;

/// A row of category buttons; the selected one carries the `active` class.
#[component]
pub fn CategoryFilter(
    categories: Vec<String>,
    /// The currently selected category.
    #[prop(into)]
    selected: Signal<String>,
    /// Callback when a category is clicked.
    #[prop(into)]
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="category-filter">
            {categories.into_iter().map(|category| {
                let label = category_label(&category);
                let for_class = category.clone();
                view! {
                    <button
                        class="category-btn"
                        class:active=move || selected.get() == for_class
                        on:click=move |_| on_select.run(category.clone())
                    >
                        {label}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
