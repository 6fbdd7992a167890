//! Loading Component

use leptos::*;

/// Centered spinner shown while a fetch is outstanding
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-10">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}
