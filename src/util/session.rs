//! Session-token storage backed by browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The stored token is the sole signal the HTTP layer uses to decide whether
//! to attach an `Authorization` header. Auth state owns every mutation here;
//! other modules only read. No expiry is tracked client-side — a stale token
//! is discovered when the server rejects it.

#[cfg(feature = "hydrate")]
use crate::util::query::query_param;

/// `localStorage` key holding the bearer token.
#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";

/// Query parameter carrying a one-time token on OAuth callback landings.
#[cfg(feature = "hydrate")]
const TOKEN_PARAM: &str = "token";

/// Read the persisted session token, if any.
pub fn token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token` as the current session token.
pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted session token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Consume a one-time token delivered via the landing URL (OAuth callback).
///
/// When present, the token is persisted and the query string is stripped from
/// the visible URL so a page refresh never re-submits it. Must run before the
/// bootstrap fetch so the restored session uses the fresh token.
///
/// Returns `true` when a token was adopted.
pub fn adopt_url_token() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let location = window.location();
        let Ok(search) = location.search() else {
            return false;
        };
        let Some(token) = query_param(&search, TOKEN_PARAM).filter(|t| !t.is_empty()) else {
            return false;
        };
        store_token(&token);
        if let (Ok(history), Ok(pathname)) = (window.history(), location.pathname()) {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&pathname),
            );
        }
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
