//! API utilities for frontend-backend communication
//!
//! The backend serves the SPA itself, so every request goes to the page's
//! own origin and the session cookie travels with it.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Error text returned by the helpers for HTTP 401.
pub const UNAUTHORIZED: &str = "Your session has expired. Please sign in again.";

/// Body of a non-2xx backend response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Base URL for API requests: the current window origin, empty when there
/// is no window (requests then stay relative).
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// ```ignore
/// let url = api_url("/api/customers/C-2001");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

pub fn is_unauthorized(error: &str) -> bool {
    error == UNAUTHORIZED
}

async fn read_error(response: Response) -> String {
    if response.status() == 401 {
        return UNAUTHORIZED.to_string();
    }
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("Request failed: HTTP {}", status),
    }
}

/// GET a JSON payload.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(read_error(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST a JSON body and read a JSON answer.
pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(read_error(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST without a body (revoke, logout).
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(read_error(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
