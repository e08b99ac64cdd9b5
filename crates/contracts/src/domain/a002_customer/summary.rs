use chrono::{DateTime, Utc};

use crate::shared::indicators::{IndicatorStatus, MetricValue, ValueFormat};
use crate::shared::table_view::summary::{count_where, count_within_next_days, sum_where};

use super::aggregate::{AdoptionHealth, Customer};

pub fn summary(customers: &[Customer], now: DateTime<Utc>) -> Vec<MetricValue> {
    let total = customers.len();
    let seats = sum_where(customers, |_| true, |c| c.seats as f64);
    let renewals = count_within_next_days(customers, now, 90, |c| Some(c.contract_end.as_str()));
    let at_risk = count_where(customers, |c| c.adoption_health == AdoptionHealth::Risk);
    let healthy = count_where(customers, |c| c.adoption_health == AdoptionHealth::Good);

    vec![
        MetricValue {
            id: "total_customers".to_string(),
            label: "Total Customers".to_string(),
            value: total as f64,
            format: ValueFormat::Integer,
            status: IndicatorStatus::Neutral,
            hint: Some(format!("{} seats under contract", crate::shared::format::format_thousands(seats as i64))),
        },
        MetricValue::integer("upcoming_renewals", "Upcoming Renewals", renewals)
            .with_status(if renewals > 0 { IndicatorStatus::Warning } else { IndicatorStatus::Neutral })
            .with_hint("Contracts ending in the next 90 days"),
        MetricValue::integer("at_risk", "At-Risk Customers", at_risk)
            .with_status(if at_risk > 0 { IndicatorStatus::Bad } else { IndicatorStatus::Good })
            .with_hint("Low adoption or open escalations"),
        MetricValue::integer("healthy", "Healthy Customers", healthy)
            .with_status(IndicatorStatus::Good)
            .with_hint("Strong adoption signals"),
        MetricValue::integer("total_seats", "Total Seats", seats as usize),
    ]
}

#[cfg(test)]
mod tests {
    use super::super::aggregate::fixtures::customer;
    use super::*;
    use crate::shared::indicators::metric;
    use chrono::TimeZone;

    #[test]
    fn customer_cards() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
        let customers = vec![
            customer(1, "Acme", "2025-04-15", AdoptionHealth::Good),
            customer(2, "Beta", "2025-04-16", AdoptionHealth::Risk),
            customer(3, "Cobalt", "2025-02-01", AdoptionHealth::Medium),
        ];
        let m = summary(&customers, now);
        assert_eq!(metric(&m, "total_customers").unwrap().value, 3.0);
        assert_eq!(metric(&m, "total_customers").unwrap().hint.as_deref(), Some("600 seats under contract"));
        assert_eq!(metric(&m, "upcoming_renewals").unwrap().value, 2.0);
        assert_eq!(metric(&m, "at_risk").unwrap().value, 1.0);
        assert_eq!(metric(&m, "healthy").unwrap().value, 1.0);
        assert_eq!(metric(&m, "total_seats").unwrap().value, 600.0);
    }
}
