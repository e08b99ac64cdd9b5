use std::collections::BTreeMap;

use crate::shared::indicators::{IndicatorStatus, MetricValue};
use crate::shared::table_view::summary::{count_where, tally_by};

use super::aggregate::{Quote, QuoteStatus};

pub fn summary(quotes: &[Quote]) -> Vec<MetricValue> {
    let pending = count_where(quotes, |q| q.status == QuoteStatus::PendingApproval);
    vec![
        MetricValue::integer("total", "Total Quotes", quotes.len()),
        MetricValue::integer("pending", "Pending", pending).with_status(if pending > 0 {
            IndicatorStatus::Warning
        } else {
            IndicatorStatus::Neutral
        }),
        MetricValue::integer("approved", "Approved", count_where(quotes, |q| q.status == QuoteStatus::Approved))
            .with_status(IndicatorStatus::Good),
        MetricValue::integer("sent", "Sent", count_where(quotes, |q| q.status == QuoteStatus::Sent)),
    ]
}

/// Count per raw status key, for the "(N)" suffixes in the status dropdown.
pub fn status_counts(quotes: &[Quote]) -> BTreeMap<String, usize> {
    tally_by(quotes, |q| q.status.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::super::aggregate::fixtures::quote;
    use super::*;
    use crate::shared::indicators::metric;

    #[test]
    fn quote_stats() {
        let quotes = vec![
            quote("Q-1", "A", QuoteStatus::PendingApproval),
            quote("Q-2", "B", QuoteStatus::PendingApproval),
            quote("Q-3", "C", QuoteStatus::Approved),
            quote("Q-4", "D", QuoteStatus::Other("on_hold".to_string())),
        ];
        let m = summary(&quotes);
        assert_eq!(metric(&m, "total").unwrap().value, 4.0);
        assert_eq!(metric(&m, "pending").unwrap().value, 2.0);
        assert_eq!(metric(&m, "sent").unwrap().value, 0.0);

        let counts = status_counts(&quotes);
        assert_eq!(counts.get("pending_approval"), Some(&2));
        assert_eq!(counts.get("on_hold"), Some(&1));
        assert_eq!(counts.get("sent"), None);
    }
}
