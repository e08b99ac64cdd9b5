use serde::{Deserialize, Serialize};

use crate::shared::table_view::{FieldValue, TableRecord};

crate::string_enum! {
    /// Оценка внедрения продукта у клиента
    pub enum AdoptionHealth {
        Good => "Good",
        Medium => "Medium",
        Risk => "Risk",
    }
}

impl AdoptionHealth {
    /// Text shown in badges and dropdowns ("Risk" reads as "At Risk").
    pub fn display_label(&self) -> &str {
        match self {
            AdoptionHealth::Risk => "At Risk",
            other => other.as_str(),
        }
    }
}

crate::string_enum! {
    pub enum UsageTrend {
        Up => "up",
        Down => "down",
        Flat => "flat",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Клиент партнёра (конечная организация с подпиской)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: u32,
    pub customer_id: String,
    pub name: String,
    pub domain: String,
    pub industry: String,
    pub region: String,
    pub plan: String,
    pub seats: u32,
    #[serde(default)]
    pub seats_used: u32,
    #[serde(default)]
    pub products: Vec<String>,
    pub contract_start: String,
    pub contract_end: String,
    pub renewal_type: String,
    pub adoption_health: AdoptionHealth,
    pub active_users_trend: UsageTrend,
    #[serde(default)]
    pub open_issues: u32,
    pub owner: String,
    #[serde(default)]
    pub admin_contact: Option<Contact>,
    #[serde(default)]
    pub billing_contact: Option<Contact>,
    #[serde(default)]
    pub champion: Option<Contact>,
    #[serde(default)]
    pub risk_flags: Vec<String>,
    #[serde(default)]
    pub expansion_opportunities: Vec<String>,
    #[serde(default)]
    pub last_activity: Option<String>,
}

impl TableRecord for Customer {
    fn record_id(&self) -> String {
        self.customer_id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.customer_id.as_str(),
            self.domain.as_str(),
        ]
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "name" => FieldValue::text(&self.name),
            "customerId" => FieldValue::text(&self.customer_id),
            "industry" => FieldValue::text(&self.industry),
            "plan" => FieldValue::text(&self.plan),
            "seats" => FieldValue::Number(self.seats as f64),
            "seatsUsed" => FieldValue::Number(self.seats_used as f64),
            "contractEnd" => FieldValue::Date(&self.contract_end),
            "contractStart" => FieldValue::Date(&self.contract_start),
            "adoptionHealth" => FieldValue::text(self.adoption_health.as_str()),
            "activeUsersTrend" => FieldValue::text(self.active_users_trend.as_str()),
            "openIssues" => FieldValue::Number(self.open_issues as f64),
            "owner" => FieldValue::text(&self.owner),
            "domain" => FieldValue::text(&self.domain),
            "region" => FieldValue::text(&self.region),
            "renewalType" => FieldValue::text(&self.renewal_type),
            "lastActivity" => FieldValue::opt_date(self.last_activity.as_deref()),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn customer(id: u32, name: &str, contract_end: &str, health: AdoptionHealth) -> Customer {
        Customer {
            id,
            customer_id: format!("CUST-{:03}", id),
            name: name.to_string(),
            domain: format!("{}.com", name.to_lowercase().replace(' ', "")),
            industry: "Technology".to_string(),
            region: "North America".to_string(),
            plan: "Business".to_string(),
            seats: 200,
            seats_used: 150,
            products: vec!["Chat".to_string(), "Meetings".to_string()],
            contract_start: "2024-01-01".to_string(),
            contract_end: contract_end.to_string(),
            renewal_type: "Auto-renew".to_string(),
            adoption_health: health,
            active_users_trend: UsageTrend::Up,
            open_issues: 1,
            owner: "John Smith".to_string(),
            admin_contact: None,
            billing_contact: None,
            champion: None,
            risk_flags: Vec::new(),
            expansion_opportunities: Vec::new(),
            last_activity: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_contacts_are_optional() {
        let json = r#"{
            "id": 1, "customerId": "CUST-001", "name": "Acme Corp", "domain": "acme.com",
            "industry": "Technology", "region": "EMEA", "plan": "Enterprise", "seats": 500,
            "contractStart": "2024-03-01", "contractEnd": "2025-03-01", "renewalType": "Manual",
            "adoptionHealth": "Risk", "activeUsersTrend": "down", "owner": "John Smith",
            "adminContact": { "name": "Ana", "email": "ana@acme.com", "role": "IT Admin" }
        }"#;
        let c: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(c.adoption_health, AdoptionHealth::Risk);
        assert_eq!(c.adoption_health.display_label(), "At Risk");
        assert_eq!(c.admin_contact.as_ref().and_then(|a| a.phone.clone()), None);
        assert!(c.champion.is_none());
        assert_eq!(c.seats_used, 0);
        assert_eq!(c.field("lastActivity"), FieldValue::Missing);
    }
}
