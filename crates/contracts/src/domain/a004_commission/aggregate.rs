use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::table_view::{FieldValue, TableRecord};

crate::string_enum! {
    pub enum CommissionStatus {
        Pending => "pending",
        Approved => "approved",
        Scheduled => "scheduled",
        Paid => "paid",
    }
}

impl CommissionStatus {
    pub fn display_label(&self) -> &str {
        match self {
            CommissionStatus::Pending => "Pending",
            CommissionStatus::Approved => "Approved",
            CommissionStatus::Scheduled => "Scheduled",
            CommissionStatus::Paid => "Paid",
            CommissionStatus::Other(s) => s.as_str(),
        }
    }
}

/// Комиссия партнёра по закрытой сделке
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commission {
    pub id: String,
    pub deal_id: String,
    pub customer: String,
    pub deal_value: f64,
    pub commission_rate: String,
    pub earned_amount: f64,
    pub status: CommissionStatus,
    pub deal_close_date: String,
    #[serde(default)]
    pub expected_payout_date: Option<String>,
    #[serde(default)]
    pub paid_date: Option<String>,
    #[serde(default)]
    pub payout_reference: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Commission {
    /// Paid date when paid, otherwise the expected payout date.
    pub fn payout_date(&self) -> Option<&str> {
        self.paid_date
            .as_deref()
            .or(self.expected_payout_date.as_deref())
    }
}

impl TableRecord for Commission {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.customer.as_str(), self.deal_id.as_str(), self.id.as_str()]
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "id" => FieldValue::text(&self.id),
            "dealId" => FieldValue::text(&self.deal_id),
            "customer" => FieldValue::text(&self.customer),
            "dealValue" => FieldValue::Number(self.deal_value),
            "commissionRate" => FieldValue::text(&self.commission_rate),
            "earnedAmount" => FieldValue::Number(self.earned_amount),
            "status" => FieldValue::text(self.status.as_str()),
            "dealCloseDate" => FieldValue::Date(&self.deal_close_date),
            "payoutDate" => FieldValue::opt_date(self.payout_date()),
            "notes" => FieldValue::opt_text(self.notes.as_deref()),
            _ => FieldValue::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSummary {
    pub earned_this_month: f64,
    pub pending_commissions: f64,
    pub paid_to_date: f64,
    pub forecasted_commissions: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    pub id: String,
    pub date: String,
    pub amount: f64,
    pub status: String,
    pub method: String,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub commissions_included: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutSchedule {
    pub frequency: String,
    pub payout_day: String,
    pub minimum_payout: f64,
    pub currency: String,
    pub method: String,
    pub next_payout_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxDocument {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub upload_date: String,
    pub status: String,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyEarning {
    pub month: String,
    pub amount: f64,
}

/// Payload of the revenue page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueData {
    pub summary: RevenueSummary,
    pub commissions: Vec<Commission>,
    #[serde(default)]
    pub payouts: Vec<Payout>,
    pub payout_schedule: PayoutSchedule,
    #[serde(default)]
    pub tax_documents: Vec<TaxDocument>,
    #[serde(default)]
    pub status_definitions: BTreeMap<String, String>,
    #[serde(default)]
    pub monthly_earnings: Vec<MonthlyEarning>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn commission(id: &str, status: CommissionStatus, earned: f64) -> Commission {
        Commission {
            id: id.to_string(),
            deal_id: format!("D-{}", id),
            customer: format!("Customer {}", id),
            deal_value: earned * 10.0,
            commission_rate: "10%".to_string(),
            earned_amount: earned,
            status,
            deal_close_date: "2024-12-15".to_string(),
            expected_payout_date: Some("2025-01-31".to_string()),
            paid_date: None,
            payout_reference: None,
            notes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::commission;
    use super::*;

    #[test]
    fn tax_document_type_field_and_null_expiry() {
        let json = r#"{"id":"TAX-1","name":"W-9","type":"W-9","uploadDate":"2024-01-10",
            "status":"verified","expiryDate":null,"year":2024}"#;
        let doc: TaxDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.doc_type, "W-9");
        assert_eq!(doc.expiry_date, None);
    }

    #[test]
    fn payout_date_prefers_paid() {
        let mut c = commission("C-1", CommissionStatus::Paid, 100.0);
        assert_eq!(c.payout_date(), Some("2025-01-31"));
        c.paid_date = Some("2025-01-20".to_string());
        assert_eq!(c.payout_date(), Some("2025-01-20"));
    }
}
