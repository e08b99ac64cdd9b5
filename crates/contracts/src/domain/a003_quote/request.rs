use serde::{Deserialize, Serialize};

use crate::shared::actions::ValidationErrors;

pub const PLANS: &[(&str, &str)] = &[
    ("starter", "Starter"),
    ("professional", "Professional"),
    ("business", "Business"),
    ("enterprise", "Enterprise"),
];

pub const TERMS: &[(&str, &str)] = &[
    ("monthly", "Monthly"),
    ("annual", "Annual"),
    ("2-year", "2-Year"),
    ("3-year", "3-Year"),
];

pub const REGIONS: &[(&str, &str)] = &[
    ("na", "North America"),
    ("emea", "EMEA"),
    ("apac", "APAC"),
    ("latam", "LATAM"),
];

/// Value of the deal selector meaning "no existing deal".
pub const NEW_DEAL: &str = "new";

/// Запрос котировки от партнёра
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub customer: String,
    #[serde(default)]
    pub deal_id: String,
    pub plan: String,
    pub seats: String,
    pub term: String,
    pub region: String,
    #[serde(default)]
    pub notes: String,
}

fn is_option(options: &[(&str, &str)], value: &str) -> bool {
    options.iter().any(|(key, _)| *key == value)
}

impl QuoteRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require(&self.customer, "Customer name");
        if !is_option(PLANS, &self.plan) {
            errors.push("Select a plan");
        }
        match self.seats.trim().parse::<u32>() {
            Ok(n) if n >= 1 => {}
            _ => errors.push("Number of seats must be at least 1"),
        }
        if !is_option(TERMS, &self.term) {
            errors.push("Select a contract term");
        }
        if !is_option(REGIONS, &self.region) {
            errors.push("Select a region");
        }
        errors.into_result()
    }

    /// `None` when the request is not linked to an existing deal.
    pub fn linked_deal(&self) -> Option<&str> {
        let deal = self.deal_id.trim();
        if deal.is_empty() || deal == NEW_DEAL {
            None
        } else {
            Some(deal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_request_validation() {
        let mut req = QuoteRequest {
            customer: "Acme Corp".to_string(),
            deal_id: NEW_DEAL.to_string(),
            plan: "business".to_string(),
            seats: "250".to_string(),
            term: "annual".to_string(),
            region: "emea".to_string(),
            notes: String::new(),
        };
        assert!(req.validate().is_ok());
        assert_eq!(req.linked_deal(), None);

        req.plan = "Business".to_string();
        req.seats = "-3".to_string();
        let err = req.validate().unwrap_err();
        assert_eq!(err.errors, vec!["Select a plan", "Number of seats must be at least 1"]);
    }
}
