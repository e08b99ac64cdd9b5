use contracts::domain::a001_deal::{Deal, DealRegistrationRequest};
use contracts::shared::actions::ActionAck;

use crate::shared::api_utils::{api_url, get_json, post_json};

pub async fn get_deals() -> Result<Vec<Deal>, String> {
    get_json("/api/deals").await
}

/// Регистрация сделки: сервер проверяет форму и только подтверждает приём
pub async fn register_deal(request: &DealRegistrationRequest) -> Result<ActionAck, String> {
    post_json("/api/deals/register", request).await
}

/// The browser downloads the file itself, so this is a plain link target.
pub fn export_csv_url() -> String {
    api_url("/api/deals/export.csv")
}
