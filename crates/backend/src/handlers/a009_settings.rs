use axum::{extract::Path, Json};

use contracts::domain::a009_settings::{AccountForm, NotificationSettings, SecurityForm, SettingsData};
use contracts::shared::actions::ActionAck;

use crate::shared::{data::store::store, error::AppError};
use crate::system::auth::extractor::CurrentUser;

/// GET /api/settings
pub async fn get_all() -> Result<Json<SettingsData>, AppError> {
    Ok(Json(store()?.settings.clone()))
}

/// POST /api/settings/account
pub async fn save_account(
    CurrentUser(user): CurrentUser,
    Json(form): Json<AccountForm>,
) -> Result<Json<ActionAck>, AppError> {
    form.validate()?;
    tracing::info!("Account settings saved for {}", user.username);
    Ok(Json(ActionAck::ok("Account settings saved")))
}

/// POST /api/settings/notifications
pub async fn save_notifications(
    CurrentUser(user): CurrentUser,
    Json(settings): Json<NotificationSettings>,
) -> Result<Json<ActionAck>, AppError> {
    tracing::info!(
        "Notification preferences saved for {} (digest: {})",
        user.username,
        settings.email_digest
    );
    Ok(Json(ActionAck::ok("Notification preferences saved")))
}

/// POST /api/settings/security
pub async fn save_security(
    CurrentUser(user): CurrentUser,
    Json(form): Json<SecurityForm>,
) -> Result<Json<ActionAck>, AppError> {
    let provider = &store()?.settings.user.auth_provider;
    form.validate(provider)?;
    tracing::info!(
        "Security settings saved for {} (mfa: {})",
        user.username,
        form.mfa_enabled
    );
    Ok(Json(ActionAck::ok("Security settings saved")))
}

/// POST /api/settings/sessions/:id/revoke
pub async fn revoke_session(Path(id): Path<String>) -> Result<Json<ActionAck>, AppError> {
    let security = &store()?.settings.security;
    let session = security
        .active_sessions
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Session {}", id)))?;
    if session.current {
        return Err(AppError::Validation(
            "The current session cannot be revoked".into(),
        ));
    }
    tracing::info!("Session {} ({}) revoked", session.id, session.device);
    Ok(Json(ActionAck::ok("Session revoked successfully")))
}
