use contracts::shared::actions::ActionAck;
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, get_json, post_empty};

/// Login with username and password. The session cookie is set by the response.
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };
    if !request.is_complete() {
        return Err("Username and password are required".to_string());
    }

    let response = Request::post(&api_url("/api/system/auth/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        401 => return Err("Invalid username or password".to_string()),
        status if !response.ok() => return Err(format!("Login failed: HTTP {}", status)),
        _ => {}
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Logout (drops the server session and the cookie)
pub async fn logout() -> Result<ActionAck, String> {
    post_empty("/api/system/auth/logout").await
}

/// Get current user info, `Err` without a valid session
pub async fn get_current_user() -> Result<UserInfo, String> {
    get_json("/api/system/auth/me").await
}
