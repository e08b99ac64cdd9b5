use axum::Json;

use contracts::domain::a005_ticket::{NewTicketRequest, SupportData};
use contracts::shared::actions::ActionAck;

use crate::shared::{data::store::store, error::AppError};

/// GET /api/support
pub async fn get_all() -> Result<Json<SupportData>, AppError> {
    Ok(Json(store()?.support.clone()))
}

/// POST /api/support/tickets
pub async fn create(Json(request): Json<NewTicketRequest>) -> Result<Json<ActionAck>, AppError> {
    let categories: Vec<&str> = store()?
        .support
        .categories
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    request.validate(&categories)?;
    tracing::info!(
        "Support ticket submitted: [{}] {} ({})",
        request.category,
        request.subject,
        request.priority
    );
    Ok(Json(ActionAck::ok("Support ticket submitted")))
}
