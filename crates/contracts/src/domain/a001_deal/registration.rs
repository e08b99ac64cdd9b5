use serde::{Deserialize, Serialize};

use crate::shared::actions::ValidationErrors;
use crate::shared::table_view::dates::parse_timestamp;

pub const PACKAGES: &[&str] = &["Starter", "Professional", "Business", "Enterprise"];
pub const TERMS: &[&str] = &["Monthly", "Yearly"];
pub const REGIONS: &[&str] = &["North America", "EMEA", "APAC", "LATAM"];
pub const EXPANSION_OPTIONS: &[&str] = &["Yes", "No"];

/// Форма регистрации новой сделки
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealRegistrationRequest {
    pub account_name: String,
    pub account_domain: String,
    pub package: String,
    pub seats: String,
    pub contract_term: String,
    pub deal_value: String,
    pub region: String,
    pub close_date: String,
    #[serde(default)]
    pub use_case: String,
    #[serde(default)]
    pub competitor: String,
    #[serde(default)]
    pub expansion_potential: String,
    #[serde(default)]
    pub notes: String,
}

impl DealRegistrationRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require(&self.account_name, "Account name");
        errors.require(&self.account_domain, "Account domain");

        if !PACKAGES.contains(&self.package.as_str()) {
            errors.push("Select a package");
        }
        match self.seats.trim().parse::<u32>() {
            Ok(n) if n >= 1 => {}
            _ => errors.push("Seats must be a whole number of at least 1"),
        }
        if !TERMS.contains(&self.contract_term.as_str()) {
            errors.push("Select a contract term");
        }
        match self.deal_value.trim().parse::<f64>() {
            Ok(v) if v >= 0.0 && v.is_finite() => {}
            _ => errors.push("Estimated deal value must be a non-negative number"),
        }
        if !REGIONS.contains(&self.region.as_str()) {
            errors.push("Select a region");
        }
        if parse_timestamp(&self.close_date).is_none() {
            errors.push("Expected close date is required");
        }
        if !self.expansion_potential.is_empty()
            && !EXPANSION_OPTIONS.contains(&self.expansion_potential.as_str())
        {
            errors.push("Expansion potential must be Yes or No");
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> DealRegistrationRequest {
        DealRegistrationRequest {
            account_name: "Mono Corporation".to_string(),
            account_domain: "mono.com".to_string(),
            package: "Business".to_string(),
            seats: "150".to_string(),
            contract_term: "Yearly".to_string(),
            deal_value: "50000".to_string(),
            region: "EMEA".to_string(),
            close_date: "2025-03-31".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_complete_form() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn reports_every_problem() {
        let mut form = valid();
        form.account_name = "  ".to_string();
        form.seats = "0".to_string();
        form.close_date = String::new();
        let err = form.validate().unwrap_err();
        assert_eq!(err.errors.len(), 3);
        assert!(err.errors.contains(&"Account name is required".to_string()));
    }

    #[test]
    fn rejects_unknown_package() {
        let mut form = valid();
        form.package = "Ultimate".to_string();
        assert_eq!(form.validate().unwrap_err().errors, vec!["Select a package"]);
    }
}
