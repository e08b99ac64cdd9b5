use contracts::domain::a001_deal::{Deal, PipelinePoint};
use contracts::domain::a006_announcement::AnnouncementsData;

use crate::shared::api_utils::get_json;

/// Сделки для карточек и таблицы последних сделок
pub async fn get_deals() -> Result<Vec<Deal>, String> {
    get_json("/api/deals").await
}

/// Недельные срезы воронки для графика
pub async fn get_pipeline_trend() -> Result<Vec<PipelinePoint>, String> {
    get_json("/api/deals/trend").await
}

/// Закреплённые объявления для блока "Notices"
pub async fn get_announcements() -> Result<AnnouncementsData, String> {
    get_json("/api/announcements").await
}
