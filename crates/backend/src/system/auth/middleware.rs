use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};

use super::{cookie, session};
use crate::shared::config;

/// Middleware that requires a valid session cookie
pub async fn require_auth(mut req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let config = config::get().map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let token = cookie::read_cookie(req.headers(), &config.auth.cookie_name)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let user = session::lookup(token).ok_or(StatusCode::UNAUTHORIZED)?;

    // Пользователь доступен обработчикам через CurrentUser
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
