pub mod details;
pub mod list;
pub mod register;

use contracts::domain::a001_deal::{DealStage, DealStatus};

/// Badge variant of an approval status.
pub fn status_variant(status: &DealStatus) -> &'static str {
    match status {
        DealStatus::Approved => "success",
        DealStatus::PendingApproval => "warning",
        DealStatus::Conflict | DealStatus::AtRisk => "error",
        DealStatus::Other(_) => "neutral",
    }
}

pub fn stage_variant(stage: &DealStage) -> &'static str {
    match stage {
        DealStage::ClosedSuccessful => "success",
        DealStage::ClosedUnsuccessful => "error",
        DealStage::Approved | DealStage::Negotiation | DealStage::ProposalShared => "primary",
        _ => "neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_values_are_neutral() {
        assert_eq!(status_variant(&DealStatus::parse("Escalated")), "neutral");
        assert_eq!(status_variant(&DealStatus::AtRisk), "error");
        assert_eq!(stage_variant(&DealStage::ClosedSuccessful), "success");
        assert_eq!(stage_variant(&DealStage::LeadCaptured), "neutral");
    }
}
