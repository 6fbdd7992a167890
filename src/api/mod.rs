//! API Client
//!
//! HTTP communication with the Hayat REST API.
//!
//! # Endpoints
//!
//! - `POST /login` - Exchange phone/password credentials for an access token
//! - `GET /projects` - List the signed-in user's projects (bearer auth)

pub mod client;

pub use client::{fetch_projects, login, Project};
