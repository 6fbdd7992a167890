//! Login Page
//!
//! Credential form shown while no session is held.

use leptos::*;

use crate::api;
use crate::state::session::SessionState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    // Credentials live only in these signals and are dropped with the view
    let (phone, set_phone) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (pending, set_pending) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Reject overlapping submissions while a round-trip is outstanding
        if pending.get() {
            return;
        }

        let phone_value = phone.get();
        let password_value = password.get();

        set_pending.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::login(&phone_value, &password_value).await {
                Ok(token) => {
                    state_clone.set_token(&token);
                    state_clone.show_success("Signed in");
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="w-full max-w-md bg-gray-800 rounded-xl p-8">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold">"Hayat"</h1>
                    <p class="text-gray-400 mt-1">"Sign in to your dashboard"</p>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Phone number"</label>
                        <input
                            type="text"
                            required=true
                            prop:value=move || phone.get()
                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                               transition-colors"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="text-sm text-gray-500 text-center mt-6">
                    "Use the phone number registered to your account."
                </p>
            </div>
        </div>
    }
}
