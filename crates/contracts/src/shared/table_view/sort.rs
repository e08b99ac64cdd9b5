use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::dates::parse_timestamp;
use super::record::{FieldValue, TableRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Single-column sort. `None` in [`TableState`](super::TableState) means source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(column: &str) -> Self {
        Self {
            column: column.to_string(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: &str) -> Self {
        Self {
            column: column.to_string(),
            direction: SortDirection::Descending,
        }
    }
}

/// Normalized comparison key. Variant order is the cross-kind order.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Number(f64),
    Date(DateTime<Utc>),
    Text { folded: String, raw: String },
    Missing,
}

impl SortKey {
    fn of(value: FieldValue<'_>) -> Self {
        match value {
            FieldValue::Number(n) => SortKey::Number(n),
            // неразборчивая дата ведёт себя как отсутствующая
            FieldValue::Date(s) => match parse_timestamp(s) {
                Some(ts) => SortKey::Date(ts),
                None => SortKey::Missing,
            },
            FieldValue::Text(s) => SortKey::Text {
                folded: s.to_lowercase(),
                raw: s.into_owned(),
            },
            FieldValue::Missing => SortKey::Missing,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Date(_) => 1,
            SortKey::Text { .. } => 2,
            SortKey::Missing => 3,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            (
                SortKey::Text { folded: fa, raw: ra },
                SortKey::Text { folded: fb, raw: rb },
            ) => fa.cmp(fb).then_with(|| ra.cmp(rb)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Order two keys for `direction`; missing values stay last either way.
fn directed(a: &SortKey, b: &SortKey, direction: SortDirection) -> Ordering {
    match (a, b) {
        (SortKey::Missing, SortKey::Missing) => Ordering::Equal,
        (SortKey::Missing, _) => Ordering::Greater,
        (_, SortKey::Missing) => Ordering::Less,
        _ => match direction {
            SortDirection::Ascending => a.compare(b),
            SortDirection::Descending => b.compare(a),
        },
    }
}

/// Stable sort of row references by one column.
pub fn sort_rows<T: TableRecord>(rows: &mut Vec<&T>, sort: &SortState) {
    let mut keyed: Vec<(SortKey, &T)> = rows
        .iter()
        .map(|row| (SortKey::of(row.field(&sort.column)), *row))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| directed(a, b, sort.direction));
    *rows = keyed.into_iter().map(|(_, row)| row).collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        id: u32,
        name: &'static str,
        value: Option<f64>,
        date: &'static str,
    }

    impl TableRecord for Item {
        fn record_id(&self) -> String {
            self.id.to_string()
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }

        fn field(&self, key: &str) -> FieldValue<'_> {
            match key {
                "name" => FieldValue::text(self.name),
                "value" => self.value.map(FieldValue::Number).unwrap_or(FieldValue::Missing),
                "date" => FieldValue::Date(self.date),
                _ => FieldValue::Missing,
            }
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: 1, name: "beta", value: Some(30.0), date: "2025-03-01" },
            Item { id: 2, name: "Alpha", value: None, date: "soon" },
            Item { id: 3, name: "alpha", value: Some(10.0), date: "2025-01-01" },
            Item { id: 4, name: "Gamma", value: Some(30.0), date: "2025-02-01" },
        ]
    }

    fn ids(rows: &[&Item]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn numeric_sort_is_stable_and_missing_last() {
        let items = items();
        let mut rows: Vec<&Item> = items.iter().collect();
        sort_rows(&mut rows, &SortState::ascending("value"));
        assert_eq!(ids(&rows), vec![3, 1, 4, 2]);

        let mut rows: Vec<&Item> = items.iter().collect();
        sort_rows(&mut rows, &SortState::descending("value"));
        assert_eq!(ids(&rows), vec![1, 4, 3, 2]);
    }

    #[test]
    fn text_sort_ignores_case_with_raw_tiebreak() {
        let items = items();
        let mut rows: Vec<&Item> = items.iter().collect();
        sort_rows(&mut rows, &SortState::ascending("name"));
        // "Alpha" < "alpha" по байтам
        assert_eq!(ids(&rows), vec![2, 3, 1, 4]);
    }

    #[test]
    fn dates_sort_chronologically_unparseable_last() {
        let items = items();
        let mut rows: Vec<&Item> = items.iter().collect();
        sort_rows(&mut rows, &SortState::descending("date"));
        assert_eq!(ids(&rows), vec![1, 4, 3, 2]);
    }

    #[test]
    fn cross_kind_order() {
        let n = SortKey::Number(1.0);
        let t = SortKey::of(FieldValue::text("a"));
        let d = SortKey::of(FieldValue::Date("2025-01-01"));
        assert_eq!(n.compare(&d), Ordering::Less);
        assert_eq!(d.compare(&t), Ordering::Less);
    }
}
