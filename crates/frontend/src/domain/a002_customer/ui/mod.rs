pub mod details;
pub mod list;

use contracts::domain::a002_customer::{AdoptionHealth, UsageTrend};

pub fn health_variant(health: &AdoptionHealth) -> &'static str {
    match health {
        AdoptionHealth::Good => "success",
        AdoptionHealth::Medium => "warning",
        AdoptionHealth::Risk => "error",
        AdoptionHealth::Other(_) => "neutral",
    }
}

pub fn trend_icon(trend: &UsageTrend) -> &'static str {
    match trend {
        UsageTrend::Up => "trending-up",
        UsageTrend::Down => "trending-down",
        _ => "activity",
    }
}
