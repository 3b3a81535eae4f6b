use std::cell::Cell;
use std::rc::Rc;

use tracing::warn;
use web_sys::{AbortController, AbortSignal};

/// Shared cancellation handle for the async work owned by one mounted component.
///
/// Clones observe the same flag. When a browser `AbortController` is attached,
/// cancelling also aborts every fetch that was given its signal. Callbacks that
/// resume after cancellation must check `is_cancelled()` before touching state.
#[derive(Clone)]
pub struct CancelToken {
    inner: Rc<Inner>,
}

struct Inner {
    cancelled: Cell<bool>,
    controller: Option<AbortController>,
}

impl CancelToken {
    /// Token backed by an `AbortController`. Only call this in the browser.
    pub fn new() -> Self {
        let controller = match AbortController::new() {
            Ok(controller) => Some(controller),
            Err(e) => {
                warn!("AbortController unavailable, requests will not be aborted: {:?}", e);
                None
            }
        };
        Self::with_controller(controller)
    }

    /// Token with only the cancelled flag. Suitable for timers.
    pub fn detached() -> Self {
        Self::with_controller(None)
    }

    fn with_controller(controller: Option<AbortController>) -> Self {
        Self {
            inner: Rc::new(Inner {
                cancelled: Cell::new(false),
                controller,
            }),
        }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.inner.controller.as_ref().map(AbortController::signal)
    }

    /// Cancel the token. Returns `true` only for the call that actually
    /// cancelled it; later calls are no-ops.
    pub fn cancel(&self) -> bool {
        if self.inner.cancelled.replace(true) {
            return false;
        }
        if let Some(controller) = &self.inner.controller {
            controller.abort();
        }
        true
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_token_starts_live() {
        let token = CancelToken::detached();
        assert!(!token.is_cancelled());
        assert!(token.signal().is_none());
    }

    #[test]
    fn test_cancel_is_visible_to_clones() {
        let token = CancelToken::detached();
        let clone = token.clone();
        assert!(token.cancel());
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let token = CancelToken::detached();
        assert!(token.cancel(), "First cancel should report it cancelled");
        assert!(!token.cancel(), "Second cancel should be a no-op");
        assert!(!token.clone().cancel());
        assert!(token.is_cancelled());
    }
}
