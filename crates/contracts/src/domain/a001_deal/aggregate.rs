use serde::{Deserialize, Serialize};

use crate::shared::table_view::{FieldValue, TableRecord};

// ============================================================================
// Enums
// ============================================================================

crate::string_enum! {
    /// Стадия сделки в воронке партнёра
    pub enum DealStage {
        LeadCaptured => "Lead Captured",
        Qualified => "Qualified",
        DealRegistered => "Deal Registered",
        Approved => "Approved",
        ProposalShared => "Proposal Shared",
        Negotiation => "Negotiation",
        ClosedSuccessful => "Closed Successful",
        ClosedUnsuccessful => "Closed Unsuccessful",
    }
}

impl DealStage {
    pub fn is_closed(&self) -> bool {
        matches!(self, DealStage::ClosedSuccessful | DealStage::ClosedUnsuccessful)
    }
}

crate::string_enum! {
    /// Статус согласования сделки вендором
    pub enum DealStatus {
        Approved => "Approved",
        PendingApproval => "Pending Approval",
        Conflict => "Conflict",
        AtRisk => "At Risk",
    }
}

impl DealStatus {
    pub fn needs_attention(&self) -> bool {
        matches!(self, DealStatus::AtRisk | DealStatus::Conflict)
    }
}

// ============================================================================
// Record
// ============================================================================

/// Зарегистрированная партнёром сделка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: u32,
    pub deal_id: String,
    pub account: String,
    pub stage: DealStage,
    pub value: f64,
    pub close_date: String,
    pub owner: String,
    pub region: String,
    pub status: DealStatus,
    pub package: String,
    /// Free text in the source data ("150", "500+").
    pub seats: String,
    pub term: String,
    #[serde(default)]
    pub last_activity: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

impl Deal {
    pub fn is_active(&self) -> bool {
        !self.stage.is_closed()
    }

    /// Leading integer of `seats`, if any.
    pub fn seat_count(&self) -> Option<u32> {
        let digits: String = self
            .seats
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == ',')
            .filter(|c| *c != ',')
            .collect();
        digits.parse().ok()
    }
}

impl TableRecord for Deal {
    fn record_id(&self) -> String {
        self.id.to_string()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.account.as_str(), self.deal_id.as_str()];
        if let Some(email) = &self.contact_email {
            fields.push(email);
        }
        fields
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "dealId" => FieldValue::text(&self.deal_id),
            "account" => FieldValue::text(&self.account),
            "stage" => FieldValue::text(self.stage.as_str()),
            "package" => FieldValue::text(&self.package),
            "seats" => match self.seat_count() {
                Some(n) => FieldValue::Number(n as f64),
                None => FieldValue::text(&self.seats),
            },
            "term" => FieldValue::text(&self.term),
            "value" => FieldValue::Number(self.value),
            "closeDate" => FieldValue::Date(&self.close_date),
            "status" => FieldValue::text(self.status.as_str()),
            "owner" => FieldValue::text(&self.owner),
            "lastActivity" => FieldValue::opt_date(self.last_activity.as_deref()),
            "region" => FieldValue::text(&self.region),
            "contactEmail" => FieldValue::opt_text(self.contact_email.as_deref()),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn deal(id: u32, account: &str, stage: DealStage, status: DealStatus, value: f64) -> Deal {
        Deal {
            id,
            deal_id: format!("DR-{:04}", id),
            account: account.to_string(),
            stage,
            value,
            close_date: "2025-01-25".to_string(),
            owner: "John Smith".to_string(),
            region: "North America".to_string(),
            status,
            package: "Business".to_string(),
            seats: "100".to_string(),
            term: "Yearly".to_string(),
            last_activity: Some("2025-01-10".to_string()),
            contact_email: Some(format!("buyer{}@example.com", id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::deal;
    use super::*;

    #[test]
    fn deserializes_camel_case_and_unknown_stage() {
        let json = r#"{
            "id": 7, "dealId": "DR-0007", "account": "Acme Corp", "stage": "Discovery",
            "value": 42000, "closeDate": "2025-02-01", "owner": "Sarah Lee",
            "region": "EMEA", "status": "Approved", "package": "Business",
            "seats": "150", "term": "Yearly"
        }"#;
        let d: Deal = serde_json::from_str(json).unwrap();
        assert_eq!(d.stage, DealStage::Other("Discovery".to_string()));
        assert!(d.is_active());
        assert_eq!(d.contact_email, None);
        assert_eq!(d.field("contactEmail"), FieldValue::Missing);
        assert_eq!(d.search_fields(), vec!["Acme Corp", "DR-0007"]);
    }

    #[test]
    fn seats_parse_leading_number() {
        let mut d = deal(1, "Acme", DealStage::Qualified, DealStatus::Approved, 1.0);
        assert_eq!(d.seat_count(), Some(100));
        d.seats = "1,250+".to_string();
        assert_eq!(d.seat_count(), Some(1250));
        d.seats = "TBD".to_string();
        assert_eq!(d.seat_count(), None);
        assert_eq!(d.field("seats"), FieldValue::text("TBD"));
    }
}
