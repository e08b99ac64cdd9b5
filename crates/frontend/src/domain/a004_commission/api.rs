use contracts::domain::a004_commission::RevenueData;

use crate::shared::api_utils::get_json;

pub async fn get_revenue() -> Result<RevenueData, String> {
    get_json("/api/revenue").await
}
