use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::table_view::{FieldValue, TableRecord};

use super::pricing::{DiscountRules, Pricing};

crate::string_enum! {
    pub enum QuoteStatus {
        Draft => "draft",
        PendingApproval => "pending_approval",
        Approved => "approved",
        Sent => "sent",
        Accepted => "accepted",
        Rejected => "rejected",
        Expired => "expired",
    }
}

impl QuoteStatus {
    pub fn display_label(&self) -> &str {
        match self {
            QuoteStatus::Draft => "Draft",
            QuoteStatus::PendingApproval => "Pending Approval",
            QuoteStatus::Approved => "Approved",
            QuoteStatus::Sent => "Sent",
            QuoteStatus::Accepted => "Accepted",
            QuoteStatus::Rejected => "Rejected",
            QuoteStatus::Expired => "Expired",
            QuoteStatus::Other(_) => "Unknown",
        }
    }
}

/// Коммерческое предложение по сделке
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub deal_id: String,
    pub customer: String,
    pub plan: String,
    pub seats: u32,
    pub term: String,
    pub region: String,
    pub total_value: f64,
    pub discount_applied: String,
    pub status: QuoteStatus,
    pub created_date: String,
    #[serde(default)]
    pub valid_until: Option<String>,
    pub submitted_by: String,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default)]
    pub sent_date: Option<String>,
    #[serde(default)]
    pub pending_approver: Option<String>,
}

impl TableRecord for Quote {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.customer.as_str(), self.id.as_str(), self.deal_id.as_str()]
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "id" => FieldValue::text(&self.id),
            "dealId" => FieldValue::text(&self.deal_id),
            "customer" => FieldValue::text(&self.customer),
            "plan" => FieldValue::text(&self.plan),
            "seats" => FieldValue::Number(self.seats as f64),
            "term" => FieldValue::text(&self.term),
            "region" => FieldValue::text(&self.region),
            "totalValue" => FieldValue::Number(self.total_value),
            "discountApplied" => FieldValue::text(&self.discount_applied),
            "status" => FieldValue::text(self.status.as_str()),
            "createdDate" => FieldValue::Date(&self.created_date),
            "validUntil" => FieldValue::opt_date(self.valid_until.as_deref()),
            _ => FieldValue::Missing,
        }
    }
}

/// Payload of the quotes page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotesData {
    pub pricing: Pricing,
    pub discount_rules: DiscountRules,
    pub quotes: Vec<Quote>,
    #[serde(default)]
    pub quote_status_definitions: BTreeMap<String, String>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn quote(id: &str, customer: &str, status: QuoteStatus) -> Quote {
        Quote {
            id: id.to_string(),
            deal_id: format!("D-{}", id),
            customer: customer.to_string(),
            plan: "Business".to_string(),
            seats: 100,
            term: "Annual".to_string(),
            region: "EMEA".to_string(),
            total_value: 24_000.0,
            discount_applied: "10%".to_string(),
            status,
            created_date: "2025-01-02".to_string(),
            valid_until: None,
            submitted_by: "John Smith".to_string(),
            approved_by: None,
            sent_date: None,
            pending_approver: None,
        }
    }
}
