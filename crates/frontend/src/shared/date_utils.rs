//! Utilities for date and time formatting
//!
//! Dates arrive as ISO strings ("2025-03-15" or "2025-03-15T14:02:26Z") and
//! are shown en-US style.

use chrono::{DateTime, Utc};
use contracts::shared::table_view::dates::parse_timestamp;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Current instant from the browser clock.
pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// Format ISO date string to "Mon D, YYYY"
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "Mar 15, 2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    let mut parts = date_part.splitn(3, '-');
    if let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) {
        if let (Ok(m), Ok(d)) = (month.parse::<usize>(), day.parse::<u32>()) {
            if (1..=12).contains(&m) && year.len() == 4 {
                return format!("{} {}, {}", MONTHS[m - 1], d, year);
            }
        }
    }
    date_str.to_string()
}

/// Optional date with a dash placeholder.
pub fn format_opt_date(date_str: Option<&str>) -> String {
    match date_str {
        Some(d) if !d.trim().is_empty() => format_date(d),
        _ => "—".to_string(),
    }
}

/// Chart axis label: "2024-12-03" -> "Dec 3"
pub fn format_short_date(date_str: &str) -> String {
    match parse_timestamp(date_str) {
        Some(ts) => ts.format("%b %-d").to_string(),
        None => date_str.to_string(),
    }
}

/// Format ISO datetime string to "Mon D, YYYY HH:MM" (UTC)
pub fn format_datetime(datetime_str: &str) -> String {
    if !datetime_str.contains('T') {
        return format_date(datetime_str);
    }
    match parse_timestamp(datetime_str) {
        Some(ts) => format!(
            "{} {}",
            format_date(datetime_str),
            ts.format("%H:%M")
        ),
        None => datetime_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "Mar 15, 2024");
        assert_eq!(format_date("2024-03-05T14:02:26.123Z"), "Mar 5, 2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "Dec 31, 2024 23:59");
        assert_eq!(format_datetime("2024-12-31"), "Dec 31, 2024");
    }

    #[test]
    fn test_format_short_date() {
        assert_eq!(format_short_date("2024-12-03"), "Dec 3");
        assert_eq!(format_short_date("later"), "later");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date("2024-13-01"), "2024-13-01");
        assert_eq!(format_opt_date(None), "—");
        assert_eq!(format_opt_date(Some("")), "—");
    }
}
