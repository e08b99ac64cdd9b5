use contracts::domain::a009_settings::{AccountForm, NotificationSettings, SecurityForm, SettingsData};
use contracts::shared::actions::ActionAck;

use crate::shared::api_utils::{get_json, post_empty, post_json};

pub async fn get_settings() -> Result<SettingsData, String> {
    get_json("/api/settings").await
}

pub async fn save_account(form: &AccountForm) -> Result<ActionAck, String> {
    post_json("/api/settings/account", form).await
}

pub async fn save_notifications(settings: &NotificationSettings) -> Result<ActionAck, String> {
    post_json("/api/settings/notifications", settings).await
}

pub async fn save_security(form: &SecurityForm) -> Result<ActionAck, String> {
    post_json("/api/settings/security", form).await
}

pub async fn revoke_session(id: &str) -> Result<ActionAck, String> {
    post_empty(&format!("/api/settings/sessions/{}/revoke", urlencoding::encode(id))).await
}
