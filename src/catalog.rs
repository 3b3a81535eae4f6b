use crate::cancel::CancelToken;
use crate::error::FetchError;
use crate::models::Product;

/// Sentinel category that means "no filter".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Everything that can happen to the catalog during one mount cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    /// A (re)fetch of the product list was issued.
    ProductsRequested,
    ProductsLoaded(Vec<Product>),
    ProductsFailed(FetchError),
    CategoriesLoaded(Vec<String>),
    CategoriesFailed(FetchError),
    CategorySelected(String),
}

impl CatalogEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CatalogEvent::ProductsRequested => "products_requested",
            CatalogEvent::ProductsLoaded(_) => "products_loaded",
            CatalogEvent::ProductsFailed(_) => "products_failed",
            CatalogEvent::CategoriesLoaded(_) => "categories_loaded",
            CatalogEvent::CategoriesFailed(_) => "categories_failed",
            CatalogEvent::CategorySelected(_) => "category_selected",
        }
    }
}

/// Which of the three views the catalog renders, in precedence order.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Errored(String),
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
    pub products_status: FetchStatus,
    pub categories_status: FetchStatus,
    pub error: Option<String>,
    pub selected_category: String,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    /// State at mount: both fetches in flight, nothing loaded yet.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            products_status: FetchStatus::Loading,
            categories_status: FetchStatus::Loading,
            error: None,
            selected_category: ALL_CATEGORIES.to_string(),
        }
    }

    /// The aggregate loading flag. Only the product fetch gates it.
    pub fn is_loading(&self) -> bool {
        self.products_status == FetchStatus::Loading
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading() {
            return Phase::Loading;
        }
        match &self.error {
            Some(message) => Phase::Errored(message.clone()),
            None => Phase::Ready,
        }
    }

    /// Products to render for the current selection.
    pub fn visible_products(&self) -> Vec<&Product> {
        filter_products(&self.products, &self.selected_category)
    }

    pub fn apply(&mut self, event: CatalogEvent) {
        match event {
            CatalogEvent::ProductsRequested => {
                // The error stays until the outcome replaces or clears it
                self.products_status = FetchStatus::Loading;
            }
            CatalogEvent::ProductsLoaded(products) => {
                self.products = products;
                self.products_status = FetchStatus::Loaded;
                self.error = None;
            }
            CatalogEvent::ProductsFailed(err) => {
                if let Some(message) = err.describe("products") {
                    self.products_status = FetchStatus::Errored;
                    self.error = Some(message);
                }
            }
            CatalogEvent::CategoriesLoaded(names) => {
                let mut categories = Vec::with_capacity(names.len() + 1);
                categories.push(ALL_CATEGORIES.to_string());
                categories.extend(names);
                self.categories = categories;
                self.categories_status = FetchStatus::Loaded;
                self.error = None;
            }
            CatalogEvent::CategoriesFailed(err) => {
                if let Some(message) = err.describe("categories") {
                    self.categories_status = FetchStatus::Errored;
                    self.error = Some(message);
                }
            }
            CatalogEvent::CategorySelected(category) => {
                self.selected_category = category;
            }
        }
    }

    /// Apply `event` unless `token` was cancelled by teardown.
    /// Returns whether the event was applied.
    pub fn apply_unless_cancelled(&mut self, token: &CancelToken, event: CatalogEvent) -> bool {
        if token.is_cancelled() {
            return false;
        }
        self.apply(event);
        true
    }
}

/// Products in `selected`, or all of them for the sentinel. Order is preserved.
pub fn filter_products<'a>(products: &'a [Product], selected: &str) -> Vec<&'a Product> {
    if selected == ALL_CATEGORIES {
        return products.iter().collect();
    }
    products.iter().filter(|p| p.category == selected).collect()
}

/// Button label for a category: first character upper-cased, rest unchanged.
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
