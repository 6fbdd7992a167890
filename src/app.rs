//! App Root Component
//!
//! Chooses between the Login and Dashboard views based on session state.

use leptos::*;

use crate::components::Toast;
use crate::pages::{Dashboard, Login};
use crate::state::session::{provide_session_state, SessionState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide session state to all components, restoring any persisted token
    provide_session_state();

    let state = use_context::<SessionState>().expect("SessionState not found");

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            // The token signal drives the view: no token means login
            {move || {
                if state.is_logged_in() {
                    view! { <Dashboard /> }.into_view()
                } else {
                    view! { <Login /> }.into_view()
                }
            }}

            // Toast notifications
            <Toast />
        </div>
    }
}
