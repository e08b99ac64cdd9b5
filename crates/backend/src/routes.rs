use axum::{
    http::Uri,
    middleware,
    routing::{any, get, post},
    Router,
};

use crate::shared::error::AppError;
use crate::{handlers, system};

/// Unknown `/api/*` path: JSON 404 instead of the SPA page.
async fn api_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("API route {}", uri.path()))
}

/// Конфигурация всех роутов API
pub fn configure_routes() -> Router {
    // ========================================
    // SYSTEM AUTH ROUTES (PUBLIC)
    // ========================================
    let public = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/system/auth/login", post(system::handlers::auth::login))
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        .route("/api/*rest", any(api_not_found));

    // ========================================
    // PORTAL ROUTES (require session cookie)
    // ========================================
    let protected = Router::new()
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user),
        )
        // A001 Deals
        .route("/api/deals", get(handlers::a001_deal::list_all))
        .route("/api/deals/trend", get(handlers::a001_deal::pipeline_trend))
        .route("/api/deals/export.csv", get(handlers::a001_deal::export_csv))
        .route("/api/deals/register", post(handlers::a001_deal::register))
        // A002 Customers
        .route("/api/customers", get(handlers::a002_customer::list_all))
        .route(
            "/api/customers/:customer_id",
            get(handlers::a002_customer::get_by_id),
        )
        // A003 Quotes
        .route("/api/quotes", get(handlers::a003_quote::get_all))
        .route("/api/quotes/request", post(handlers::a003_quote::request))
        // A004 Revenue
        .route("/api/revenue", get(handlers::a004_commission::get_all))
        // A005 Support
        .route("/api/support", get(handlers::a005_ticket::get_all))
        .route("/api/support/tickets", post(handlers::a005_ticket::create))
        // A006 - A008 read-only
        .route(
            "/api/announcements",
            get(handlers::a006_announcement::get_all),
        )
        .route("/api/training", get(handlers::a007_training::get_all))
        .route("/api/resources", get(handlers::a008_resource::get_all))
        // A009 Settings
        .route("/api/settings", get(handlers::a009_settings::get_all))
        .route(
            "/api/settings/account",
            post(handlers::a009_settings::save_account),
        )
        .route(
            "/api/settings/notifications",
            post(handlers::a009_settings::save_notifications),
        )
        .route(
            "/api/settings/security",
            post(handlers::a009_settings::save_security),
        )
        .route(
            "/api/settings/sessions/:id/revoke",
            post(handlers::a009_settings::revoke_session),
        )
        .route_layer(middleware::from_fn(
            system::auth::middleware::require_auth,
        ));

    public.merge(protected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use tower::ServiceExt;

    use contracts::domain::a001_deal::Deal;
    use contracts::shared::actions::ActionAck;

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, cookie: Option<&str>, body: serde_json::Value) -> Request<Body> {
        let mut builder = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get_with(uri: &str, cookie: &str) -> Request<Body> {
        Request::get(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap()
    }

    /// Вход демо-пользователем, возвращает значение для заголовка Cookie
    async fn sign_in() -> String {
        let response = configure_routes()
            .oneshot(post_json(
                "/api/system/auth/login",
                None,
                serde_json::json!({ "username": "john.smith", "password": "partner" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .to_string();
        set_cookie.split(';').next().unwrap().to_string()
    }

    #[tokio::test]
    async fn health_is_public() {
        let response = configure_routes()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn api_requires_session() {
        let response = configure_routes()
            .oneshot(Request::get("/api/deals").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = configure_routes()
            .oneshot(get_with("/api/deals", "auth-token=not-a-session"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let response = configure_routes()
            .oneshot(post_json(
                "/api/system/auth/login",
                None,
                serde_json::json!({ "username": "john.smith", "password": "nope" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn signed_in_user_reads_deals() {
        let cookie = sign_in().await;
        let response = configure_routes()
            .oneshot(get_with("/api/deals", &cookie))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let deals: Vec<Deal> = body_json(response).await;
        assert!(deals.len() > 10);

        let response = configure_routes()
            .oneshot(get_with("/api/system/auth/me", &cookie))
            .await
            .unwrap();
        let user: contracts::system::auth::UserInfo = body_json(response).await;
        assert_eq!(user.full_name, "John Smith");
    }

    #[tokio::test]
    async fn unknown_customer_is_404() {
        let cookie = sign_in().await;
        let response = configure_routes()
            .oneshot(get_with("/api/customers/C-0000", &cookie))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_api_path_is_json_404() {
        let cookie = sign_in().await;
        for uri in ["/api/no-such-thing", "/api/deals/1/nope"] {
            let response = configure_routes()
                .oneshot(get_with(uri, &cookie))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            let body: serde_json::Value = body_json(response).await;
            assert_eq!(body["error"], format!("API route {} not found", uri));
        }
    }

    #[tokio::test]
    async fn pipeline_trend_is_served() {
        let cookie = sign_in().await;
        let response = configure_routes()
            .oneshot(get_with("/api/deals/trend", &cookie))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let points: Vec<contracts::domain::a001_deal::PipelinePoint> = body_json(response).await;
        assert_eq!(points.len(), 14);
    }

    #[tokio::test]
    async fn csv_export_content_type() {
        let cookie = sign_in().await;
        let response = configure_routes()
            .oneshot(get_with("/api/deals/export.csv", &cookie))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/csv; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn mismatched_passwords_are_rejected() {
        let cookie = sign_in().await;
        let response = configure_routes()
            .oneshot(post_json(
                "/api/settings/security",
                Some(&cookie),
                serde_json::json!({
                    "currentPassword": "old",
                    "newPassword": "first",
                    "confirmPassword": "second",
                    "mfaEnabled": false
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: serde_json::Value = body_json(response).await;
        assert_eq!(body["error"], "Passwords do not match");
    }

    #[tokio::test]
    async fn session_revoke_acknowledged() {
        let cookie = sign_in().await;
        let response = configure_routes()
            .oneshot(post_json(
                "/api/settings/sessions/sess-002/revoke",
                Some(&cookie),
                serde_json::json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let ack: ActionAck = body_json(response).await;
        assert_eq!(ack.message, "Session revoked successfully");
    }

    #[tokio::test]
    async fn logout_ends_session() {
        let cookie = sign_in().await;
        let response = configure_routes()
            .oneshot(post_json("/api/system/auth/logout", Some(&cookie), serde_json::json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = configure_routes()
            .oneshot(get_with("/api/system/auth/me", &cookie))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
