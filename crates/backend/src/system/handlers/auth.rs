use axum::{
    extract::Json,
    http::{header, HeaderMap},
    response::IntoResponse,
};
use contracts::shared::actions::ActionAck;
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::shared::{config, error::AppError};
use crate::system::auth::{cookie, extractor::CurrentUser, session};

/// POST /api/system/auth/login
pub async fn login(Json(request): Json<LoginRequest>) -> Result<impl IntoResponse, AppError> {
    if !request.is_complete() {
        return Err(AppError::Validation(
            "Username and password are required".into(),
        ));
    }

    let auth = &config::get()?.auth;
    if request.username.trim() != auth.demo_username || request.password != auth.demo_password {
        tracing::warn!("Failed login attempt for '{}'", request.username.trim());
        return Err(AppError::Unauthorized);
    }

    let user = UserInfo {
        id: "usr-001".into(),
        username: auth.demo_username.clone(),
        full_name: auth.demo_full_name.clone(),
        email: auth.demo_email.clone(),
    };
    let token = session::create(user.clone())?;
    tracing::info!("User '{}' signed in", user.username);

    Ok((
        [(
            header::SET_COOKIE,
            cookie::session_cookie(&auth.cookie_name, &token, auth.cookie_max_age_days),
        )],
        Json(LoginResponse { user }),
    ))
}

/// POST /api/system/auth/logout
pub async fn logout(headers: HeaderMap) -> Result<impl IntoResponse, AppError> {
    let auth = &config::get()?.auth;
    if let Some(token) = cookie::read_cookie(&headers, &auth.cookie_name) {
        session::revoke(token);
    }
    Ok((
        [(header::SET_COOKIE, cookie::expired_cookie(&auth.cookie_name))],
        Json(ActionAck::ok("Signed out")),
    ))
}

/// GET /api/system/auth/me (protected by middleware)
pub async fn current_user(CurrentUser(user): CurrentUser) -> Json<UserInfo> {
    Json(user)
}
