use axum::Json;

use contracts::domain::a008_resource::ResourcesData;

use crate::shared::{data::store::store, error::AppError};

/// GET /api/resources
pub async fn get_all() -> Result<Json<ResourcesData>, AppError> {
    Ok(Json(store()?.resources.clone()))
}
