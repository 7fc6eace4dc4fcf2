//! REST API helpers for communicating with the backend.
//!
//! The backend runs as a separate service on a fixed local origin, so every
//! request targets an absolute URL rather than the page's own host.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! UI behavior without crashing the page. The page logs and swallows; no
//! error state is surfaced to the user.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{HelloResponse, UserRecord};

/// Fixed origin of the backend API.
const API_ORIGIN: &str = "http://localhost:5000";

fn hello_endpoint() -> String {
    format!("{API_ORIGIN}/api/hello")
}

fn users_endpoint() -> String {
    format!("{API_ORIGIN}/api/usuarios")
}

/// Failure modes of a backend fetch.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (network down, CORS, DNS, ...).
    #[error("request failed: {0}")]
    Request(String),
    /// The server answered with a non-success status code.
    #[error("unexpected status: {0}")]
    Status(u16),
    /// The response body did not decode as the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Fetch the greeting from `GET /api/hello`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server responds with a
/// non-success status, or the body is not a valid `HelloResponse`.
pub async fn fetch_greeting() -> Result<HelloResponse, ApiError> {
    let resp = gloo_net::http::Request::get(&hello_endpoint())
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<HelloResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the user list from `GET /api/usuarios`.
///
/// The list is returned in server order; no dedup, sort, or validation.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server responds with a
/// non-success status, or the body is not a `UserRecord` array.
pub async fn fetch_users() -> Result<Vec<UserRecord>, ApiError> {
    let resp = gloo_net::http::Request::get(&users_endpoint())
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<Vec<UserRecord>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
