//! Headline cards for the deals page and the dashboard home.

use crate::shared::indicators::{IndicatorStatus, MetricValue};
use crate::shared::table_view::summary::{average, count_where, sum_where};

use super::aggregate::{Deal, DealStage, DealStatus};

pub fn summary(deals: &[Deal]) -> Vec<MetricValue> {
    let active = count_where(deals, Deal::is_active);
    let pipeline = pipeline_value(deals);
    let pending = count_where(deals, |d| d.status == DealStatus::PendingApproval);
    let at_risk = count_where(deals, |d| d.status.needs_attention());

    vec![
        MetricValue::integer("active_deals", "Active Deals", active)
            .with_hint("Deals currently in pipeline"),
        MetricValue::money("pipeline_value", "Pipeline Value", pipeline)
            .with_hint("Total value of active deals"),
        MetricValue::integer("awaiting_approval", "Awaiting Approval", pending)
            .with_status(if pending > 0 { IndicatorStatus::Warning } else { IndicatorStatus::Neutral })
            .with_hint("Deals needing review"),
        MetricValue::integer("at_risk", "At-Risk Deals", at_risk)
            .with_status(if at_risk > 0 { IndicatorStatus::Bad } else { IndicatorStatus::Good })
            .with_hint(if at_risk > 0 { "Requires immediate action" } else { "No deals at risk" }),
    ]
}

pub fn pipeline_value(deals: &[Deal]) -> f64 {
    sum_where(deals, Deal::is_active, |d| d.value)
}

/// Closed-won share of closed deals, in percent. 0 when nothing closed yet.
pub fn win_rate(deals: &[Deal]) -> f64 {
    let won = count_where(deals, |d| d.stage == DealStage::ClosedSuccessful);
    let closed = count_where(deals, |d| d.stage.is_closed());
    if closed == 0 {
        0.0
    } else {
        won as f64 * 100.0 / closed as f64
    }
}

/// Карточки главной страницы
pub fn dashboard_summary(deals: &[Deal]) -> Vec<MetricValue> {
    let with_seats: Vec<u32> = deals.iter().filter_map(Deal::seat_count).collect();
    let avg_seats = average(&with_seats, |n| *n as f64).unwrap_or(0.0);
    let avg_deal = average(deals, |d| d.value).unwrap_or(0.0);
    let rate = win_rate(deals);

    vec![
        MetricValue::money("pipeline_value", "Pipeline Value", pipeline_value(deals))
            .with_hint("Total value of active deals"),
        MetricValue::money("avg_deal_size", "Avg Deal Size", avg_deal)
            .with_hint("Across all registered deals"),
        MetricValue::integer("avg_seats", "Avg Seats per Deal", avg_seats.round() as usize)
            .with_hint("Deals with a numeric seat count"),
        MetricValue::percent("win_rate", "Win Rate", rate)
            .with_status(if rate >= 50.0 { IndicatorStatus::Good } else { IndicatorStatus::Warning })
            .with_hint("Closed successful vs. all closed"),
    ]
}

#[cfg(test)]
mod tests {
    use super::super::aggregate::fixtures::deal;
    use super::*;
    use crate::shared::indicators::metric;
    use crate::shared::table_view::{derive_view, TableState};
    use crate::shared::table_view::filter::ViewContext;
    use chrono::{TimeZone, Utc};

    fn four_stages() -> Vec<Deal> {
        vec![
            deal(1, "Acme Corp", DealStage::Negotiation, DealStatus::PendingApproval, 50_000.0),
            deal(2, "Beta Inc", DealStage::Qualified, DealStatus::Conflict, 10_000.0),
            deal(3, "Cobalt", DealStage::ClosedSuccessful, DealStatus::Approved, 80_000.0),
            deal(4, "Delta", DealStage::ClosedUnsuccessful, DealStatus::AtRisk, 5_000.0),
        ]
    }

    #[test]
    fn active_deals_and_pipeline() {
        let metrics = summary(&four_stages());
        assert_eq!(metric(&metrics, "active_deals").unwrap().value, 2.0);
        assert_eq!(metric(&metrics, "pipeline_value").unwrap().value, 60_000.0);
        assert_eq!(metric(&metrics, "awaiting_approval").unwrap().value, 1.0);
        assert_eq!(metric(&metrics, "at_risk").unwrap().value, 2.0);
    }

    #[test]
    fn summary_ignores_view_state() {
        let deals = four_stages();
        let before = summary(&deals);

        let mut state = TableState::default();
        state.set_search("acme");
        state.set_categorical("stage", "Negotiation");
        state.toggle_sort(super::super::table::COLUMNS, "value");
        state.set_page_size(20);
        let ctx = ViewContext::at(Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap());
        let page = derive_view(&deals, &state, super::super::table::PRESETS, &ctx);
        assert_eq!(page.filtered_count, 1);

        assert_eq!(summary(&deals), before);
    }

    #[test]
    fn dashboard_cards() {
        let deals = four_stages();
        assert_eq!(win_rate(&deals), 50.0);
        assert_eq!(win_rate(&[]), 0.0);

        let cards = dashboard_summary(&deals);
        assert_eq!(metric(&cards, "avg_deal_size").unwrap().value, 36_250.0);
        assert_eq!(metric(&cards, "avg_seats").unwrap().value, 100.0);
    }
}
