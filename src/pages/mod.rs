//! Pages
//!
//! Top-level page components for the two views.

pub mod dashboard;
pub mod login;

pub use dashboard::Dashboard;
pub use login::Login;
