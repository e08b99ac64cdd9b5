use axum::Json;

use contracts::domain::a007_training::TrainingData;

use crate::shared::{data::store::store, error::AppError};

/// GET /api/training
pub async fn get_all() -> Result<Json<TrainingData>, AppError> {
    Ok(Json(store()?.training.clone()))
}
