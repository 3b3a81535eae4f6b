use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("request was cancelled")]
    Cancelled,

    #[error("An unknown error occurred")]
    Unknown,
}

impl FetchError {
    /// Classify a JS error by its `name` and `message`.
    /// Aborted fetches reject with a `DOMException` named `AbortError`.
    pub fn classify(name: &str, message: String) -> Self {
        if name == "AbortError" {
            FetchError::Cancelled
        } else {
            FetchError::Transport(message)
        }
    }

    /// Convert a rejected promise value into a `FetchError`.
    /// Values that are not JS `Error`s have no usable shape and map to `Unknown`.
    pub fn from_js(value: JsValue) -> Self {
        match value.dyn_ref::<js_sys::Error>() {
            Some(err) => Self::classify(&String::from(err.name()), String::from(err.message())),
            None => FetchError::Unknown,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }

    /// User-facing message for a failed fetch of `what`, or `None` when the
    /// failure was a cancellation and must not be shown.
    pub fn describe(&self, what: &str) -> Option<String> {
        match self {
            FetchError::Cancelled => None,
            FetchError::Unknown => Some(self.to_string()),
            _ => Some(format!("Failed to fetch {}: {}", what, self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_abort_error_as_cancelled() {
        let err = FetchError::classify("AbortError", "The user aborted a request.".to_string());
        assert_eq!(err, FetchError::Cancelled);
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_classify_other_errors_as_transport() {
        let err = FetchError::classify("TypeError", "Failed to fetch".to_string());
        assert_eq!(err, FetchError::Transport("Failed to fetch".to_string()));
        assert!(!err.is_cancelled());
    }

    #[test]
    fn test_describe_embeds_status_code() {
        let msg = FetchError::Status(500).describe("products").unwrap();
        assert_eq!(msg, "Failed to fetch products: HTTP error! status: 500");
    }

    #[test]
    fn test_describe_transport_and_decode() {
        assert_eq!(
            FetchError::Transport("Failed to fetch".to_string()).describe("categories"),
            Some("Failed to fetch categories: Failed to fetch".to_string())
        );
        let decode = FetchError::Decode("invalid type: null".to_string())
            .describe("products")
            .unwrap();
        assert!(decode.contains("invalid response body"), "Got: {}", decode);
    }

    #[test]
    fn test_describe_unknown_is_generic() {
        assert_eq!(
            FetchError::Unknown.describe("products"),
            Some("An unknown error occurred".to_string())
        );
    }

    #[test]
    fn test_describe_suppresses_cancellation() {
        assert_eq!(FetchError::Cancelled.describe("products"), None);
    }
}
