//! Hayat Dashboard
//!
//! Login and project-listing frontend for the Hayat platform, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Phone/password sign-in against the Hayat API
//! - Session token persisted across page reloads
//! - Project listing for the signed-in user
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It holds the session in reactive state mirrored to browser
//! local storage and communicates with the Hayat API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
