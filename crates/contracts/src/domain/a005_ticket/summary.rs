use crate::shared::indicators::{IndicatorStatus, MetricValue};
use crate::shared::table_view::summary::count_where;

use super::aggregate::{Ticket, TicketStatus};

pub fn summary(tickets: &[Ticket]) -> Vec<MetricValue> {
    let active = count_where(tickets, |t| t.status.is_active());
    vec![
        MetricValue::integer("open", "Open", count_where(tickets, |t| t.status == TicketStatus::Open)),
        MetricValue::integer("active", "Active Tickets", active).with_status(if active > 0 {
            IndicatorStatus::Warning
        } else {
            IndicatorStatus::Good
        }),
        MetricValue::integer("resolved", "Resolved", count_where(tickets, |t| t.status == TicketStatus::Resolved))
            .with_status(IndicatorStatus::Good),
    ]
}

#[cfg(test)]
mod tests {
    use super::super::aggregate::fixtures::ticket;
    use super::*;
    use crate::shared::indicators::metric;

    #[test]
    fn support_cards() {
        let tickets = vec![
            ticket("T-1", "a", TicketStatus::Open, None),
            ticket("T-2", "b", TicketStatus::Other("escalated".to_string()), None),
            ticket("T-3", "c", TicketStatus::Resolved, None),
        ];
        let m = summary(&tickets);
        assert_eq!(metric(&m, "open").unwrap().value, 1.0);
        // неизвестный статус считается активным
        assert_eq!(metric(&m, "active").unwrap().value, 2.0);
        assert_eq!(metric(&m, "resolved").unwrap().value, 1.0);
    }
}
