use contracts::domain::a005_ticket::{NewTicketRequest, SupportData};
use contracts::shared::actions::ActionAck;

use crate::shared::api_utils::{get_json, post_json};

pub async fn get_support() -> Result<SupportData, String> {
    get_json("/api/support").await
}

/// Тикет только подтверждается сервером, список не меняется
pub async fn create_ticket(request: &NewTicketRequest) -> Result<ActionAck, String> {
    post_json("/api/support/tickets", request).await
}
