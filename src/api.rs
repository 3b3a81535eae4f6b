use serde::de::DeserializeOwned;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{RequestInit, Response};

use crate::cancel::CancelToken;
use crate::error::FetchError;
use crate::models::Product;

/// GET `url` and decode the JSON body.
///
/// The token's abort signal is attached to the request. Non-2xx responses
/// fail with the status code.
pub async fn fetch_json<T: DeserializeOwned>(url: &str, token: &CancelToken) -> Result<T, FetchError> {
    let window = web_sys::window().ok_or(FetchError::Unknown)?;

    let init = RequestInit::new();
    init.set_method("GET");
    if let Some(signal) = token.signal() {
        init.set_signal(Some(&signal));
    }

    debug!("GET {}", url);
    let value = JsFuture::from(window.fetch_with_str_and_init(url, &init))
        .await
        .map_err(FetchError::from_js)?;
    let response: Response = value.dyn_into().map_err(|_| FetchError::Unknown)?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = JsFuture::from(response.json().map_err(FetchError::from_js)?)
        .await
        .map_err(FetchError::from_js)?;

    serde_wasm_bindgen::from_value(body).map_err(|e| FetchError::Decode(e.to_string()))
}

pub async fn fetch_products(url: &str, token: &CancelToken) -> Result<Vec<Product>, FetchError> {
    fetch_json(url, token).await
}

pub async fn fetch_categories(url: &str, token: &CancelToken) -> Result<Vec<String>, FetchError> {
    fetch_json(url, token).await
}
