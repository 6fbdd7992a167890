//! HTTP API Client
//!
//! Functions for communicating with the Hayat REST API.

use gloo_net::http::Request;

/// API base URL, fixed at build time
pub const API_BASE: &str = "http://localhost:8000";

/// Fixed message shown when the project list cannot be loaded. The
/// server's failure reason is deliberately not threaded through.
pub const LOAD_PROJECTS_FAILED: &str = "Failed to load projects";

// ============ Wire Types ============

#[derive(Debug, serde::Serialize)]
struct LoginRequest {
    phone: String,
    password: String,
}

#[derive(Debug, serde::Deserialize)]
struct LoginResponse {
    access_token: String,
}

/// A project owned by the signed-in user
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
}

/// Error body in the server's shape; `detail` carries the reason
#[derive(Debug, serde::Deserialize)]
struct ApiError {
    #[serde(default)]
    detail: Option<String>,
}

// ============ API Functions ============

/// Authenticate with phone/password credentials.
///
/// Returns the issued access token on success. On failure, the error
/// string carries the server-provided detail when the server sent one.
pub async fn login(phone: &str, password: &str) -> Result<String, String> {
    let response = Request::post(&format!("{}/login", API_BASE))
        .json(&LoginRequest {
            phone: phone.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let detail = response
            .text()
            .await
            .ok()
            .and_then(|body| error_detail(&body));
        return Err(login_error_message(detail.as_deref()));
    }

    let body: LoginResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(body.access_token)
}

/// Fetch the signed-in user's projects, preserving server order.
///
/// Every failure collapses to [`LOAD_PROJECTS_FAILED`] regardless of
/// cause; callers keep whatever list they already hold. The underlying
/// cause only goes to the browser console.
pub async fn fetch_projects(token: &str) -> Result<Vec<Project>, String> {
    let response = Request::get(&format!("{}/projects", API_BASE))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| {
            web_sys::console::error_1(&format!("Project fetch failed: {}", e).into());
            LOAD_PROJECTS_FAILED.to_string()
        })?;

    if !response.ok() {
        web_sys::console::error_1(
            &format!("Project fetch failed: HTTP {}", response.status()).into(),
        );
        return Err(LOAD_PROJECTS_FAILED.to_string());
    }

    response.json().await.map_err(|e| {
        web_sys::console::error_1(&format!("Project fetch failed: {}", e).into());
        LOAD_PROJECTS_FAILED.to_string()
    })
}

/// Pull the `detail` field out of an error body, if the server sent one
fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ApiError>(body).ok()?.detail
}

/// User-facing login failure message
fn login_error_message(detail: Option<&str>) -> String {
    match detail {
        Some(detail) => format!("Login failed: {}", detail),
        None => "Login failed".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_detail_read_from_detail_field() {
        assert_eq!(
            error_detail(r#"{"detail":"invalid credentials"}"#).as_deref(),
            Some("invalid credentials")
        );
    }

    #[test]
    fn error_detail_tolerates_other_shapes() {
        assert_eq!(error_detail(r#"{"message":"nope"}"#), None);
        assert_eq!(error_detail("not json"), None);
        assert_eq!(error_detail(""), None);
    }

    #[test]
    fn login_failure_message_carries_server_detail() {
        let message = login_error_message(Some("invalid credentials"));
        assert!(message.contains("invalid credentials"));
    }

    #[test]
    fn login_failure_message_without_detail_is_generic() {
        assert_eq!(login_error_message(None), "Login failed");
    }

    #[test]
    fn single_project_response_yields_single_entry() {
        let body = r#"[{"id":1,"title":"A","description":"d"}]"#;
        let projects: Vec<Project> = serde_json::from_str(body).unwrap();

        assert_eq!(
            projects,
            vec![Project {
                id: 1,
                title: "A".to_string(),
                description: "d".to_string(),
            }]
        );
    }

    #[test]
    fn projects_deserialize_in_server_order() {
        let body = r#"[
            {"id":3,"title":"C","description":"third"},
            {"id":1,"title":"A","description":"first"}
        ]"#;
        let projects: Vec<Project> = serde_json::from_str(body).unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].id, 3);
        assert_eq!(projects[1].id, 1);
    }
}
