use std::collections::BTreeMap;

use crate::shared::indicators::{IndicatorStatus, MetricValue, ValueFormat};
use crate::shared::table_view::summary::{count_where, sum_where, tally_by};

use super::aggregate::{Commission, CommissionStatus, MonthlyEarning, RevenueData};

/// Cards at the top of the revenue page. Headline amounts come from the
/// payload's own summary block, counts from the commission array.
pub fn summary(data: &RevenueData) -> Vec<MetricValue> {
    let currency = ValueFormat::Money {
        currency: data.summary.currency.clone(),
    };
    let money = |id: &str, label: &str, value: f64| MetricValue {
        id: id.to_string(),
        label: label.to_string(),
        value,
        format: currency.clone(),
        status: IndicatorStatus::Neutral,
        hint: None,
    };
    let c = &data.commissions;
    let pending = count_where(c, |x| x.status == CommissionStatus::Pending);

    vec![
        money("earned_this_month", "Earned This Month", data.summary.earned_this_month)
            .with_status(IndicatorStatus::Good),
        money("pending_commissions", "Pending Commissions", data.summary.pending_commissions)
            .with_hint(format!("{} commissions awaiting approval", pending)),
        money("paid_to_date", "Paid to Date", data.summary.paid_to_date),
        money("forecasted", "Forecasted", data.summary.forecasted_commissions)
            .with_hint("Based on open pipeline"),
    ]
}

/// Pending / approved / paid counts and earned totals over the commission array.
pub fn commission_totals(commissions: &[Commission]) -> Vec<MetricValue> {
    let is_paid = |c: &Commission| c.status == CommissionStatus::Paid;
    vec![
        MetricValue::integer("pending", "Pending", count_where(commissions, |c| c.status == CommissionStatus::Pending)),
        MetricValue::integer("approved", "Approved", count_where(commissions, |c| c.status == CommissionStatus::Approved)),
        MetricValue::integer("paid", "Paid", count_where(commissions, is_paid)),
        MetricValue::money("earned_paid", "Earned (paid)", sum_where(commissions, is_paid, |c| c.earned_amount)),
        MetricValue::money(
            "earned_outstanding",
            "Earned (outstanding)",
            sum_where(commissions, |c| !is_paid(c), |c| c.earned_amount),
        ),
    ]
}

pub fn status_counts(commissions: &[Commission]) -> BTreeMap<String, usize> {
    tally_by(commissions, |c| c.status.as_str().to_string())
}

/// Bar heights of the earnings chart as a percentage of the best month.
pub fn bar_heights(months: &[MonthlyEarning]) -> Vec<f64> {
    let max = months.iter().map(|m| m.amount).fold(0.0_f64, f64::max);
    months
        .iter()
        .map(|m| if max > 0.0 { m.amount / max * 100.0 } else { 0.0 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::aggregate::fixtures::commission;
    use super::*;
    use crate::shared::indicators::metric;

    #[test]
    fn totals_by_status() {
        let c = vec![
            commission("C-1", CommissionStatus::Pending, 100.0),
            commission("C-2", CommissionStatus::Paid, 250.0),
            commission("C-3", CommissionStatus::Scheduled, 50.0),
            commission("C-4", CommissionStatus::Paid, 150.0),
        ];
        let m = commission_totals(&c);
        assert_eq!(metric(&m, "pending").unwrap().value, 1.0);
        assert_eq!(metric(&m, "paid").unwrap().value, 2.0);
        assert_eq!(metric(&m, "earned_paid").unwrap().value, 400.0);
        assert_eq!(metric(&m, "earned_outstanding").unwrap().value, 150.0);
        assert_eq!(status_counts(&c).get("scheduled"), Some(&1));
    }

    #[test]
    fn chart_heights() {
        let months = vec![
            MonthlyEarning { month: "Oct".to_string(), amount: 500.0 },
            MonthlyEarning { month: "Nov".to_string(), amount: 1000.0 },
        ];
        assert_eq!(bar_heights(&months), vec![50.0, 100.0]);
        let flat = vec![MonthlyEarning { month: "Dec".to_string(), amount: 0.0 }];
        assert_eq!(bar_heights(&flat), vec![0.0]);
    }
}
