//! Dashboard Page
//!
//! Project listing for the signed-in user.

use leptos::*;

use crate::api::{self, Project};
use crate::components::Loading;
use crate::state::session::SessionState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    // Owned by this view: replaced wholesale on each successful fetch,
    // discarded with the view on logout. Loading is manual only.
    let (projects, set_projects) = create_signal(Vec::<Project>::new());
    let (loading, set_loading) = create_signal(false);

    let state_for_load = state.clone();
    let load_projects = move |_| {
        // Reject overlapping fetches while one is outstanding
        if loading.get() {
            return;
        }

        let token = state_for_load.token.get().unwrap_or_default();

        set_loading.set(true);

        let state_clone = state_for_load.clone();
        spawn_local(async move {
            match api::fetch_projects(&token).await {
                Ok(list) => {
                    set_projects.set(list);
                }
                Err(e) => {
                    // Previously loaded projects stay on screen
                    state_clone.show_error(&e);
                }
            }
            set_loading.set(false);
        });
    };

    let state_for_logout = state;
    let logout = move |_| {
        state_for_logout.clear_token();
    };

    view! {
        <div class="container mx-auto px-4 py-8 space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Your projects at a glance"</p>
                </div>

                <button
                    on:click=logout
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                           font-medium transition-colors"
                >
                    "Log out"
                </button>
            </div>

            // Manual refresh
            <button
                on:click=load_projects
                disabled=move || loading.get()
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg font-semibold
                       transition-colors flex items-center space-x-2"
            >
                {move || if loading.get() {
                    view! {
                        <div class="loading-spinner w-5 h-5" />
                        <span>"Loading..."</span>
                    }.into_view()
                } else {
                    view! {
                        <span>"Load projects"</span>
                    }.into_view()
                }}
            </button>

            // Project list
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">
                    {move || format!("My projects ({})", projects.get().len())}
                </h2>

                {move || {
                    let list = projects.get();

                    if loading.get() && list.is_empty() {
                        return view! { <Loading /> }.into_view();
                    }

                    if list.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">
                                "No projects loaded. Use the button above to fetch them."
                            </p>
                        }.into_view()
                    } else {
                        list.into_iter().map(|project| view! {
                            <div class="py-3 border-b border-gray-700 last:border-0">
                                <h3 class="font-medium">{project.title}</h3>
                                <p class="text-sm text-gray-400 mt-1">{project.description}</p>
                            </div>
                        }).collect_view()
                    }
                }}
            </section>
        </div>
    }
}
