use serde::{Deserialize, Serialize};

use crate::shared::actions::ValidationErrors;

pub const PRIORITIES: &[(&str, &str)] = &[("normal", "Normal"), ("high", "High - Blocking Issue")];

/// Value of the related-deal selector meaning "not linked".
pub const NO_DEAL: &str = "none";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicketRequest {
    pub category: String,
    pub priority: String,
    pub subject: String,
    #[serde(default)]
    pub related_deal_id: String,
    pub description: String,
}

impl NewTicketRequest {
    /// `known_categories` are the support category ids of the current payload.
    pub fn validate(&self, known_categories: &[&str]) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !known_categories.contains(&self.category.as_str()) {
            errors.push("Select a category");
        }
        if !PRIORITIES.iter().any(|(k, _)| *k == self.priority) {
            errors.push("Select a priority");
        }
        errors.require(&self.subject, "Subject");
        errors.require(&self.description, "Description");
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_form_validation() {
        let mut req = NewTicketRequest {
            category: "technical".to_string(),
            priority: "high".to_string(),
            subject: "SSO broken".to_string(),
            related_deal_id: NO_DEAL.to_string(),
            description: "Users cannot sign in".to_string(),
        };
        assert!(req.validate(&["technical", "billing"]).is_ok());

        req.category = "legal".to_string();
        req.description = String::new();
        let err = req.validate(&["technical"]).unwrap_err();
        assert_eq!(err.errors, vec!["Select a category", "Description is required"]);
    }
}
