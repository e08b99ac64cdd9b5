use axum::Json;

use contracts::domain::a003_quote::{QuoteRequest, QuotesData};
use contracts::shared::actions::ActionAck;

use crate::shared::{data::store::store, error::AppError};

/// GET /api/quotes
pub async fn get_all() -> Result<Json<QuotesData>, AppError> {
    Ok(Json(store()?.quotes.clone()))
}

/// POST /api/quotes/request
pub async fn request(Json(request): Json<QuoteRequest>) -> Result<Json<ActionAck>, AppError> {
    request.validate()?;
    tracing::info!(
        "Quote requested for {} ({}, {} seats, deal: {})",
        request.customer,
        request.plan,
        request.seats,
        request.linked_deal().unwrap_or("new")
    );
    Ok(Json(ActionAck::ok(format!(
        "Quote request for {} submitted",
        request.customer
    ))))
}
