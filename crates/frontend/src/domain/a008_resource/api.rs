use contracts::domain::a008_resource::ResourcesData;

use crate::shared::api_utils::get_json;

pub async fn get_resources() -> Result<ResourcesData, String> {
    get_json("/api/resources").await
}
