use axum::{extract::Path, Json};

use contracts::domain::a002_customer::Customer;

use crate::shared::{data::store::store, error::AppError};

/// GET /api/customers
pub async fn list_all() -> Result<Json<Vec<Customer>>, AppError> {
    Ok(Json(store()?.customers.clone()))
}

/// GET /api/customers/:customer_id
pub async fn get_by_id(Path(customer_id): Path<String>) -> Result<Json<Customer>, AppError> {
    store()?
        .customer(&customer_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Customer {}", customer_id)))
}
