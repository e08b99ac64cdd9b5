use contracts::domain::a006_announcement::AnnouncementsData;

use crate::shared::api_utils::get_json;

pub async fn get_announcements() -> Result<AnnouncementsData, String> {
    get_json("/api/announcements").await
}
