use leptos::prelude::*;

const DEFAULT_API_BASE_URL: &str = "https://fakestoreapi.com";
const DEFAULT_PROFILE_DELAY_MS: u32 = 2000;
const DEFAULT_AVATAR: &str = "/assets/default-avatar.svg";

/// App-wide settings, provided once by `App` as context.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub profile_delay_ms: u32,
    pub default_avatar: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            profile_delay_ms: DEFAULT_PROFILE_DELAY_MS,
            default_avatar: DEFAULT_AVATAR.to_string(),
        }
    }
}

impl AppConfig {
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_profile_delay_ms(mut self, delay_ms: u32) -> Self {
        self.profile_delay_ms = delay_ms;
        self
    }

    pub fn with_default_avatar(mut self, src: impl Into<String>) -> Self {
        self.default_avatar = src.into();
        self
    }

    pub fn products_url(&self) -> String {
        self.endpoint("products")
    }

    pub fn categories_url(&self) -> String {
        self.endpoint("products/categories")
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url.trim_end_matches('/'), path)
    }
}

/// Read the `AppConfig` from context, or the defaults when none was provided.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
