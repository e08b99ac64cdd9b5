//! Derived figures for the customer detail page.

use chrono::{DateTime, Utc};

use crate::shared::table_view::dates::{days_until, parse_timestamp};

use super::aggregate::Customer;

/// Product features listed on the adoption card.
pub const FEATURES: &[&str] = &["Chat", "Meetings", "AI Summaries", "Translation"];

/// Colour band of the renewal countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenewalUrgency {
    /// 30 days or less (includes already expired contracts)
    Critical,
    /// 31..=60
    Soon,
    /// 61 and more
    Comfortable,
}

impl RenewalUrgency {
    pub fn from_days(days: i64) -> Self {
        if days <= 30 {
            RenewalUrgency::Critical
        } else if days <= 60 {
            RenewalUrgency::Soon
        } else {
            RenewalUrgency::Comfortable
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RenewalUrgency::Critical => "text-danger",
            RenewalUrgency::Soon => "text-warning",
            RenewalUrgency::Comfortable => "text-success",
        }
    }
}

impl Customer {
    /// Days until `contract_end`, rounded up. `None` when the date is unreadable.
    pub fn days_until_renewal(&self, now: DateTime<Utc>) -> Option<i64> {
        days_until(&self.contract_end, now)
    }

    /// `round(seats_used / seats * 100)`; `None` for a zero-seat contract.
    pub fn seat_utilization(&self) -> Option<u32> {
        if self.seats == 0 {
            return None;
        }
        Some((self.seats_used as f64 / self.seats as f64 * 100.0).round() as u32)
    }

    /// Renewal reminder banner is shown inside the 90-day window.
    pub fn renewal_reminder_due(&self, now: DateTime<Utc>) -> bool {
        self.days_until_renewal(now).is_some_and(|d| d <= 90)
    }

    /// Elapsed share of the contract term, 0..=100.
    pub fn contract_progress(&self, now: DateTime<Utc>) -> Option<u32> {
        let start = parse_timestamp(&self.contract_start)?;
        let end = parse_timestamp(&self.contract_end)?;
        let total = (end - start).num_seconds();
        if total <= 0 {
            return None;
        }
        let elapsed = (now - start).num_seconds().clamp(0, total);
        Some((elapsed as f64 / total as f64 * 100.0).round() as u32)
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.products.iter().any(|p| p == feature)
    }
}

#[cfg(test)]
mod tests {
    use super::super::aggregate::fixtures::customer;
    use super::super::aggregate::AdoptionHealth;
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn days_until_renewal_rounds_up() {
        let c = customer(1, "Acme", "2025-02-14", AdoptionHealth::Good);
        // 29.5 days -> 30
        assert_eq!(c.days_until_renewal(now()), Some(30));
        assert!(c.renewal_reminder_due(now()));
        assert_eq!(RenewalUrgency::from_days(30), RenewalUrgency::Critical);
        assert_eq!(RenewalUrgency::from_days(45), RenewalUrgency::Soon);
        assert_eq!(RenewalUrgency::from_days(120), RenewalUrgency::Comfortable);
    }

    #[test]
    fn seat_utilization_percent() {
        let mut c = customer(1, "Acme", "2025-12-31", AdoptionHealth::Good);
        assert_eq!(c.seat_utilization(), Some(75));
        c.seats_used = 1;
        c.seats = 3;
        assert_eq!(c.seat_utilization(), Some(33));
        c.seats = 0;
        assert_eq!(c.seat_utilization(), None);
    }

    #[test]
    fn contract_progress_is_clamped() {
        let c = customer(1, "Acme", "2025-01-01", AdoptionHealth::Good);
        assert_eq!(c.contract_progress(now()), Some(100));
        let mut c = customer(2, "Beta", "2026-01-01", AdoptionHealth::Good);
        c.contract_start = "2025-06-01".to_string();
        assert_eq!(c.contract_progress(now()), Some(0));
        assert!(c.has_feature("Chat"));
        assert!(!c.has_feature("Translation"));
    }
}
