pub mod category_filter;
pub mod product_card;
pub mod profile_card;
pub mod rating_stars;
pub mod sidebar;
