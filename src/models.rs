use serde::{Deserialize, Serialize};

// -- Catalog types matching the product API --

/// Average score and number of reviews for a product.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// A product as returned by `GET /products`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

/// Format a unit price the way the product cards show it, e.g. `$109.95`.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

// -- Profile types --

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// The profile shown on the profile page.
    pub fn demo() -> Self {
        Self {
            id: "1".to_string(),
            name: "Alex Nguyen".to_string(),
            email: "alex.nguyen@example.com".to_string(),
            phone: "0123456789".to_string(),
            avatar_url: None,
        }
    }

    /// Image source for the avatar. Missing or empty references use `fallback`.
    pub fn avatar_src<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.avatar_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCTS_JSON: &str = r#"[
        {
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use and walks in the forest.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 9,
            "title": "WD 2TB Elements Portable External Hard Drive",
            "price": 64,
            "description": "USB 3.0 and USB 2.0 compatibility.",
            "category": "electronics",
            "image": "https://fakestoreapi.com/img/61IBBVJvSDL._AC_SY879_.jpg",
            "rating": { "rate": 3.3, "count": 203 }
        }
    ]"#;

    #[test]
    fn test_decode_products_from_api_shape() {
        let products: Vec<Product> = serde_json::from_str(PRODUCTS_JSON).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].category, "men's clothing");
        assert_eq!(products[0].rating, Rating { rate: 3.9, count: 120 });
        // Integer prices in the JSON still decode as f64
        assert_eq!(products[1].price, 64.0);
    }

    #[test]
    fn test_decode_categories() {
        let categories: Vec<String> =
            serde_json::from_str(r#"["electronics","jewelery","men's clothing"]"#).unwrap();
        assert_eq!(categories, vec!["electronics", "jewelery", "men's clothing"]);
    }

    #[test]
    fn test_decode_rejects_missing_rating() {
        let json = r#"[{"id":1,"title":"t","price":1.0,"description":"d","category":"c","image":"i"}]"#;
        assert!(serde_json::from_str::<Vec<Product>>(json).is_err());
    }

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(109.95), "$109.95");
        assert_eq!(format_price(64.0), "$64.00");
        assert_eq!(format_price(7.5), "$7.50");
    }

    #[test]
    fn test_avatar_src_prefers_profile_avatar() {
        let profile = UserProfile {
            avatar_url: Some("https://example.com/me.png".to_string()),
            ..UserProfile::demo()
        };
        assert_eq!(profile.avatar_src("/assets/default.svg"), "https://example.com/me.png");
    }

    #[test]
    fn test_avatar_src_falls_back_when_absent_or_empty() {
        let absent = UserProfile { avatar_url: None, ..UserProfile::demo() };
        assert_eq!(absent.avatar_src("/assets/default.svg"), "/assets/default.svg");

        let empty = UserProfile { avatar_url: Some(String::new()), ..UserProfile::demo() };
        assert_eq!(empty.avatar_src("/assets/default.svg"), "/assets/default.svg");
    }
}
