//! UI Components
//!
//! Reusable Leptos components shared by both views.

pub mod loading;
pub mod toast;

pub use loading::Loading;
pub use toast::Toast;
