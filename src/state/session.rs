//! Session State
//!
//! Reactive session and notification state using Leptos signals.

use leptos::*;
use std::rc::Rc;

use crate::state::store::{BrowserTokenStore, TokenStore};

/// Session state provided to all components.
///
/// The token signal is the single source of truth for which view renders:
/// the dashboard is reachable if and only if a non-empty token is held.
/// Every mutation goes through [`set_token`](SessionState::set_token) or
/// [`clear_token`](SessionState::clear_token), which write through to the
/// persisted store so the session survives page reloads.
#[derive(Clone)]
pub struct SessionState {
    /// Current access token, `None` while logged out
    pub token: RwSignal<Option<String>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    store: Rc<dyn TokenStore>,
}

impl SessionState {
    /// Restore session state from the persisted store.
    ///
    /// No network call is made; absence of a stored token is the valid
    /// logged-out state, not an error. Empty strings count as absent.
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        let restored = store.load().filter(|token| !token.is_empty());

        Self {
            token: create_rw_signal(restored),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
            store,
        }
    }

    /// Whether a session is currently held
    pub fn is_logged_in(&self) -> bool {
        self.token
            .with(|token| token.as_deref().is_some_and(|t| !t.is_empty()))
    }

    /// Adopt a freshly issued token, mirroring it to the store
    pub fn set_token(&self, token: &str) {
        self.store.save(token);
        self.token.set(Some(token.to_string()));
    }

    /// Drop the session and the stored token. Synchronous, cannot fail.
    pub fn clear_token(&self) {
        self.store.clear();
        self.token.set(None);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }
}

/// Provide session state to the component tree, restoring any persisted
/// token from browser local storage
pub fn provide_session_state() {
    provide_context(SessionState::new(Rc::new(BrowserTokenStore)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryTokenStore {
        token: RefCell<Option<String>>,
    }

    impl TokenStore for MemoryTokenStore {
        fn load(&self) -> Option<String> {
            self.token.borrow().clone()
        }

        fn save(&self, token: &str) {
            *self.token.borrow_mut() = Some(token.to_string());
        }

        fn clear(&self) {
            *self.token.borrow_mut() = None;
        }
    }

    fn store_with(token: Option<&str>) -> Rc<MemoryTokenStore> {
        Rc::new(MemoryTokenStore {
            token: RefCell::new(token.map(str::to_string)),
        })
    }

    #[test]
    fn starts_logged_out_without_stored_token() {
        let runtime = create_runtime();
        let state = SessionState::new(store_with(None));

        assert!(!state.is_logged_in());
        assert_eq!(state.token.get_untracked(), None);
        runtime.dispose();
    }

    #[test]
    fn restores_session_from_stored_token() {
        let runtime = create_runtime();
        let state = SessionState::new(store_with(Some("abc123")));

        assert!(state.is_logged_in());
        assert_eq!(state.token.get_untracked().as_deref(), Some("abc123"));
        runtime.dispose();
    }

    #[test]
    fn empty_stored_token_counts_as_logged_out() {
        let runtime = create_runtime();
        let state = SessionState::new(store_with(Some("")));

        assert!(!state.is_logged_in());
        runtime.dispose();
    }

    #[test]
    fn set_token_writes_through_to_store() {
        let runtime = create_runtime();
        let store = store_with(None);
        let state = SessionState::new(store.clone());

        state.set_token("fresh-token");

        assert!(state.is_logged_in());
        assert_eq!(state.token.get_untracked().as_deref(), Some("fresh-token"));
        assert_eq!(store.load().as_deref(), Some("fresh-token"));
        runtime.dispose();
    }

    #[test]
    fn clear_token_empties_store_and_session() {
        let runtime = create_runtime();
        let store = store_with(Some("abc123"));
        let state = SessionState::new(store.clone());

        state.clear_token();

        assert!(!state.is_logged_in());
        assert_eq!(state.token.get_untracked(), None);
        assert_eq!(store.load(), None);
        runtime.dispose();
    }

    #[test]
    fn logout_after_login_round_trip() {
        let runtime = create_runtime();
        let store = store_with(None);
        let state = SessionState::new(store.clone());

        state.set_token("abc123");
        state.clear_token();

        assert!(!state.is_logged_in());
        assert_eq!(store.load(), None);

        // Both states stay revisitable
        state.set_token("def456");
        assert!(state.is_logged_in());
        assert_eq!(store.load().as_deref(), Some("def456"));
        runtime.dispose();
    }
}
