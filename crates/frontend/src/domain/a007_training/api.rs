use contracts::domain::a007_training::TrainingData;

use crate::shared::api_utils::get_json;

pub async fn get_training() -> Result<TrainingData, String> {
    get_json("/api/training").await
}
