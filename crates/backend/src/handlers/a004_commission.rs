use axum::Json;

use contracts::domain::a004_commission::RevenueData;

use crate::shared::{data::store::store, error::AppError};

/// GET /api/revenue
pub async fn get_all() -> Result<Json<RevenueData>, AppError> {
    Ok(Json(store()?.revenue.clone()))
}
