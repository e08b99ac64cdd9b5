use contracts::domain::a002_customer::Customer;

use crate::shared::api_utils::get_json;

pub async fn get_customers() -> Result<Vec<Customer>, String> {
    get_json("/api/customers").await
}

pub async fn get_customer(customer_id: &str) -> Result<Customer, String> {
    get_json(&format!(
        "/api/customers/{}",
        urlencoding::encode(customer_id)
    ))
    .await
}
