//! Date-window helpers. Record dates are ISO 8601 strings; anything that
//! fails to parse never falls inside a window.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};

/// Parse `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` or full RFC 3339 into UTC.
/// Bare dates are taken as midnight UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// `now <= date <= now + days`, both ends inclusive.
pub fn within_next_days(value: &str, now: DateTime<Utc>, days: i64) -> bool {
    match parse_timestamp(value) {
        Some(ts) => ts >= now && ts <= now + Duration::days(days),
        None => false,
    }
}

/// Last second of the calendar month containing `now`.
pub fn end_of_month(now: DateTime<Utc>) -> DateTime<Utc> {
    let (year, month) = if now.month() == 12 {
        (now.year() + 1, 1)
    } else {
        (now.year(), now.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc() - Duration::seconds(1))
        .unwrap_or(now)
}

/// From `now` up to the end of the current month.
pub fn within_rest_of_month(value: &str, now: DateTime<Utc>) -> bool {
    match parse_timestamp(value) {
        Some(ts) => ts >= now && ts <= end_of_month(now),
        None => false,
    }
}

/// Strictly before `now - days`.
pub fn older_than_days(value: &str, now: DateTime<Utc>, days: i64) -> bool {
    match parse_timestamp(value) {
        Some(ts) => ts < now - Duration::days(days),
        None => false,
    }
}

/// On or after `now - days`.
pub fn within_last_days(value: &str, now: DateTime<Utc>, days: i64) -> bool {
    match parse_timestamp(value) {
        Some(ts) => ts >= now - Duration::days(days),
        None => false,
    }
}

/// Whole days until `value`, rounded up (a renewal later today counts as 1).
pub fn days_until(value: &str, now: DateTime<Utc>) -> Option<i64> {
    let ts = parse_timestamp(value)?;
    let ms = (ts - now).num_milliseconds() as f64;
    Some((ms / 86_400_000.0).ceil() as i64)
}

/// Whole days elapsed since `value`, rounded down.
pub fn days_since(value: &str, now: DateTime<Utc>) -> Option<i64> {
    let ts = parse_timestamp(value)?;
    let ms = (now - ts).num_milliseconds() as f64;
    Some((ms / 86_400_000.0).floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap()
    }

    #[test]
    fn parses_supported_shapes() {
        assert!(parse_timestamp("2025-03-01").is_some());
        assert!(parse_timestamp("2025-03-01T10:30:00").is_some());
        assert!(parse_timestamp("2025-03-01T10:30:00Z").is_some());
        assert!(parse_timestamp("next tuesday").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn next_days_window_is_inclusive() {
        // now + 90 days exactly
        assert!(within_next_days("2025-04-15", now(), 90));
        assert!(!within_next_days("2025-04-16", now(), 90));
        assert!(within_next_days("2025-01-15", now(), 30));
        assert!(!within_next_days("2025-01-14", now(), 30));
        assert!(!within_next_days("garbage", now(), 30));
    }

    #[test]
    fn rest_of_month_window() {
        assert_eq!(
            end_of_month(now()),
            Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap()
        );
        assert!(within_rest_of_month("2025-01-31", now()));
        assert!(!within_rest_of_month("2025-02-01", now()));
        assert!(!within_rest_of_month("2025-01-10", now()));

        let december = Utc.with_ymd_and_hms(2024, 12, 20, 0, 0, 0).unwrap();
        assert!(within_rest_of_month("2024-12-31", december));
    }

    #[test]
    fn older_than_and_day_counts() {
        assert!(older_than_days("2024-12-01", now(), 30));
        assert!(!older_than_days("2024-12-16", now(), 30));
        assert!(within_last_days("2024-12-16", now(), 30));
        assert_eq!(days_until("2025-01-25", now()), Some(10));
        assert_eq!(days_until("2025-01-15T06:00:00Z", now()), Some(1));
        assert_eq!(days_since("2025-01-13", now()), Some(2));
        assert_eq!(days_until("n/a", now()), None);
    }
}
