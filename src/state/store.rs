//! Persisted Token Store
//!
//! One string value in browser local storage under a fixed key. Absence
//! means the logged-out state.

/// Local storage key holding the raw access token
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Durable key-value storage for the session token.
///
/// Session logic only sees this trait, so tests exercise it against an
/// in-memory store instead of the browser.
pub trait TokenStore {
    /// Read the stored token, if any
    fn load(&self) -> Option<String>;

    /// Write the token, replacing any previous value
    fn save(&self, token: &str);

    /// Remove the stored token
    fn clear(&self);
}

/// Store backed by `window.localStorage`.
///
/// All operations degrade to no-ops when storage is unavailable; a
/// missing value is a valid state, not an error.
#[derive(Clone, Copy, Default)]
pub struct BrowserTokenStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
    }

    fn save(&self, token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}
