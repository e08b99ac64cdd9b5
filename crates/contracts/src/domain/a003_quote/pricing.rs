use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOverview {
    pub title: String,
    pub description: String,
    pub pricing_model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageLimits {
    pub ai_summaries: String,
    pub translation_minutes: String,
    pub storage_per_user: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub description: String,
    pub seat_range: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub usage_limits: UsageLimits,
    #[serde(default)]
    pub recommended: bool,
}

impl Plan {
    /// Plan cards list at most four highlights.
    pub fn card_highlights(&self) -> &[String] {
        &self.highlights[..self.highlights.len().min(4)]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingFactor {
    pub factor: String,
    pub description: String,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub overview: PricingOverview,
    pub plans: Vec<Plan>,
    #[serde(default)]
    pub factors: Vec<PricingFactor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerTier {
    pub tier: String,
    pub base_discount: String,
    pub max_without_approval: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalThreshold {
    pub condition: String,
    pub approval_required: bool,
    pub approver: String,
    pub sla: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountRules {
    pub partner_tiers: Vec<PartnerTier>,
    pub approval_thresholds: Vec<ApprovalThreshold>,
    pub current_partner_tier: String,
}

impl DiscountRules {
    pub fn current_tier(&self) -> Option<&PartnerTier> {
        self.partner_tiers
            .iter()
            .find(|t| t.tier.eq_ignore_ascii_case(&self.current_partner_tier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_tier_lookup_ignores_case() {
        let rules = DiscountRules {
            partner_tiers: vec![PartnerTier {
                tier: "Gold".to_string(),
                base_discount: "15%".to_string(),
                max_without_approval: "20%".to_string(),
                description: String::new(),
            }],
            approval_thresholds: Vec::new(),
            current_partner_tier: "gold".to_string(),
        };
        assert_eq!(rules.current_tier().map(|t| t.base_discount.as_str()), Some("15%"));
    }
}
