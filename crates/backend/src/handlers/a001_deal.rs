use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use contracts::domain::a001_deal::{Deal, DealRegistrationRequest, PipelinePoint};
use contracts::shared::actions::ActionAck;

use crate::shared::{data::store::store, error::AppError};
use crate::system::auth::extractor::CurrentUser;

const CSV_HEADERS: [&str; 13] = [
    "Deal ID",
    "Account",
    "Stage",
    "Value",
    "Close Date",
    "Owner",
    "Region",
    "Status",
    "Package",
    "Seats",
    "Term",
    "Last Activity",
    "Contact Email",
];

/// GET /api/deals
pub async fn list_all() -> Result<Json<Vec<Deal>>, AppError> {
    Ok(Json(store()?.deals.clone()))
}

/// GET /api/deals/trend
pub async fn pipeline_trend() -> Result<Json<Vec<PipelinePoint>>, AppError> {
    Ok(Json(store()?.pipeline_trend.clone()))
}

/// GET /api/deals/export.csv
pub async fn export_csv() -> Result<Response, AppError> {
    let body = deals_csv(&store()?.deals)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"deals.csv\"",
            ),
        ],
        body,
    )
        .into_response())
}

/// POST /api/deals/register
///
/// Заявка проверяется и записывается в лог, но не сохраняется.
pub async fn register(
    CurrentUser(user): CurrentUser,
    Json(request): Json<DealRegistrationRequest>,
) -> Result<Json<ActionAck>, AppError> {
    request.validate()?;
    tracing::info!(
        "Deal registration from {}: {} ({}, {} seats)",
        user.username,
        request.account_name,
        request.package,
        request.seats
    );
    Ok(Json(ActionAck::ok(format!(
        "Deal registration for {} submitted for review",
        request.account_name
    ))))
}

pub fn deals_csv(deals: &[Deal]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;
    for deal in deals {
        writer.write_record([
            deal.deal_id.as_str(),
            deal.account.as_str(),
            deal.stage.as_str(),
            &deal.value.to_string(),
            deal.close_date.as_str(),
            deal.owner.as_str(),
            deal.region.as_str(),
            deal.status.as_str(),
            deal.package.as_str(),
            deal.seats.as_str(),
            deal.term.as_str(),
            deal.last_activity.as_deref().unwrap_or(""),
            deal.contact_email.as_deref().unwrap_or(""),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("csv flush failed: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_has_header_and_one_line_per_deal() {
        let deals = &store().unwrap().deals;
        let csv = deals_csv(deals).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Deal ID,Account,Stage,Value,Close Date,Owner,Region,Status,Package,Seats,Term,Last Activity,Contact Email")
        );
        assert_eq!(lines.count(), deals.len());
    }

    #[test]
    fn csv_quotes_values_with_commas() {
        let deals = &store().unwrap().deals;
        let csv = deals_csv(deals).unwrap();
        // "1,000" seats must stay a single field
        assert!(csv.contains("\"1,000\""));
    }
}
