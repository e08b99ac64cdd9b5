//! Scalar aggregates over the full record array. Filters, sort and paging
//! never reach these functions.

use std::collections::BTreeMap;

use super::dates::within_next_days;
use super::filter::{PresetDef, ViewContext};
use chrono::{DateTime, Utc};

pub fn count_where<T>(records: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    records.iter().filter(|r| predicate(r)).count()
}

pub fn sum_where<T>(
    records: &[T],
    predicate: impl Fn(&T) -> bool,
    value: impl Fn(&T) -> f64,
) -> f64 {
    records.iter().filter(|r| predicate(r)).map(value).sum()
}

/// Records whose date falls in `[now, now + days]`. Missing dates never count.
pub fn count_within_next_days<'r, T>(
    records: &'r [T],
    now: DateTime<Utc>,
    days: i64,
    date: impl Fn(&'r T) -> Option<&'r str>,
) -> usize {
    records
        .iter()
        .filter(|r| date(*r).is_some_and(|d| within_next_days(d, now, days)))
        .count()
}

/// Arithmetic mean, `None` for an empty input.
pub fn average<T>(records: &[T], value: impl Fn(&T) -> f64) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    Some(records.iter().map(value).sum::<f64>() / records.len() as f64)
}

/// Occurrences per key.
pub fn tally_by<T>(records: &[T], key: impl Fn(&T) -> String) -> BTreeMap<String, usize> {
    let mut out = BTreeMap::new();
    for record in records {
        *out.entry(key(record)).or_insert(0) += 1;
    }
    out
}

/// Row count per tab over the full array (tab badges).
pub fn preset_counts<T>(
    records: &[T],
    presets: &[PresetDef<T>],
    ctx: &ViewContext,
) -> BTreeMap<&'static str, usize> {
    presets
        .iter()
        .map(|p| (p.key, records.iter().filter(|r| p.matches(r, ctx)).count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Renewal {
        kind: &'static str,
        amount: f64,
        end: Option<&'static str>,
    }

    fn data() -> Vec<Renewal> {
        vec![
            Renewal { kind: "a", amount: 100.0, end: Some("2025-04-15") },
            Renewal { kind: "b", amount: 50.0, end: Some("2025-04-16") },
            Renewal { kind: "a", amount: 25.0, end: None },
            Renewal { kind: "c", amount: 5.0, end: Some("bogus") },
        ]
    }

    #[test]
    fn counting_and_summing() {
        let d = data();
        assert_eq!(count_where(&d, |r| r.kind == "a"), 2);
        assert_eq!(sum_where(&d, |r| r.kind == "a", |r| r.amount), 125.0);
        assert_eq!(average(&d, |r| r.amount), Some(45.0));
        assert_eq!(average::<Renewal>(&[], |r| r.amount), None);

        let tally = tally_by(&d, |r| r.kind.to_string());
        assert_eq!(tally.get("a"), Some(&2));
        assert_eq!(tally.get("c"), Some(&1));
    }

    #[test]
    fn next_days_includes_boundary() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(count_within_next_days(&data(), now, 90, |r| r.end), 1);
    }
}
