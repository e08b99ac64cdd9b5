use axum::Json;

use contracts::domain::a006_announcement::AnnouncementsData;

use crate::shared::{data::store::store, error::AppError};

/// GET /api/announcements
pub async fn get_all() -> Result<Json<AnnouncementsData>, AppError> {
    Ok(Json(store()?.announcements.clone()))
}
