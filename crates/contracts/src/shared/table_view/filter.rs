//! Row predicate set: free-text search, categorical equality filters and
//! the active tab preset, combined with AND.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::TableRecord;

/// Sentinel meaning "no constraint" for dropdowns and tabs.
pub const ALL: &str = "all";

pub fn is_inactive(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == ALL
}

// ============================================================================
// Filter values
// ============================================================================

/// Current search text plus one selected value per categorical field.
/// Fields set to [`ALL`] are not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterValues {
    pub search: String,
    #[serde(default)]
    pub categorical: BTreeMap<String, String>,
}

impl FilterValues {
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn set_categorical(&mut self, field: &str, value: impl Into<String>) {
        let value = value.into();
        if is_inactive(&value) {
            self.categorical.remove(field);
        } else {
            self.categorical.insert(field.to_string(), value);
        }
    }

    /// Selected value for `field`, [`ALL`] when unconstrained.
    pub fn categorical(&self, field: &str) -> &str {
        self.categorical.get(field).map(String::as_str).unwrap_or(ALL)
    }

    /// Number of constraints currently narrowing the rows (search counts as one).
    pub fn active_count(&self) -> usize {
        let search = usize::from(!self.search.trim().is_empty());
        search + self.categorical.values().filter(|v| !is_inactive(v)).count()
    }

    pub fn has_active(&self) -> bool {
        self.active_count() > 0
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.categorical.clear();
    }
}

/// Case-insensitive substring match against any of the record's search fields.
/// Leading/trailing whitespace in the query is ignored; an empty query matches.
pub fn matches_search<T: TableRecord + ?Sized>(record: &T, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Exact equality on `field`. [`ALL`] always matches, a missing field never does.
pub fn matches_categorical<T: TableRecord + ?Sized>(record: &T, field: &str, expected: &str) -> bool {
    if is_inactive(expected) {
        return true;
    }
    match record.field(field).as_text() {
        Some(actual) => actual == expected,
        None => false,
    }
}

/// Distinct non-empty values of `field`, in first-seen order (dropdown options).
pub fn distinct_values<T: TableRecord>(records: &[T], field: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for record in records {
        if let Some(value) = record.field(field).as_text() {
            if !value.is_empty() && !out.iter().any(|v| v.as_str() == &*value) {
                out.push(value.into_owned());
            }
        }
    }
    out
}

// ============================================================================
// Presets (tabs)
// ============================================================================

/// Inputs a preset may depend on besides the record itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewContext {
    pub now: DateTime<Utc>,
    /// Display name of the signed-in partner user, for "my" tabs.
    pub current_owner: Option<String>,
}

impl ViewContext {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            current_owner: None,
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.current_owner = Some(owner.into());
        self
    }
}

/// Named tab predicate. Domain modules keep them in `static` slices.
pub struct PresetDef<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub predicate: fn(&T, &ViewContext) -> bool,
}

impl<T> Clone for PresetDef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PresetDef<T> {}

impl<T> std::fmt::Debug for PresetDef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresetDef")
            .field("key", &self.key)
            .field("label", &self.label)
            .finish()
    }
}

impl<T> PresetDef<T> {
    pub fn matches(&self, record: &T, ctx: &ViewContext) -> bool {
        (self.predicate)(record, ctx)
    }
}

/// Tab predicate that accepts everything.
pub fn any_record<T>(_: &T, _: &ViewContext) -> bool {
    true
}

pub fn find_preset<'a, T>(presets: &'a [PresetDef<T>], key: &str) -> Option<&'a PresetDef<T>> {
    presets.iter().find(|p| p.key == key)
}

// ============================================================================
// Composition
// ============================================================================

/// All predicates of a view, ready to test rows.
pub struct RowPredicates<'a, T> {
    filters: &'a FilterValues,
    preset: Option<&'a PresetDef<T>>,
    ctx: &'a ViewContext,
}

impl<'a, T: TableRecord> RowPredicates<'a, T> {
    /// Unknown or [`ALL`] preset keys impose no constraint.
    pub fn new(
        filters: &'a FilterValues,
        presets: &'a [PresetDef<T>],
        preset_key: &str,
        ctx: &'a ViewContext,
    ) -> Self {
        let preset = if is_inactive(preset_key) {
            None
        } else {
            find_preset(presets, preset_key)
        };
        Self {
            filters,
            preset,
            ctx,
        }
    }

    pub fn matches(&self, record: &T) -> bool {
        if let Some(preset) = self.preset {
            if !preset.matches(record, self.ctx) {
                return false;
            }
        }
        if !matches_search(record, &self.filters.search) {
            return false;
        }
        self.filters
            .categorical
            .iter()
            .all(|(field, value)| matches_categorical(record, field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::record::FieldValue;
    use chrono::TimeZone;

    struct Row {
        id: &'static str,
        name: &'static str,
        email: Option<&'static str>,
        region: &'static str,
        score: f64,
    }

    impl TableRecord for Row {
        fn record_id(&self) -> String {
            self.id.to_string()
        }

        fn search_fields(&self) -> Vec<&str> {
            let mut fields = vec![self.id, self.name];
            if let Some(email) = self.email {
                fields.push(email);
            }
            fields
        }

        fn field(&self, key: &str) -> FieldValue<'_> {
            match key {
                "name" => FieldValue::text(self.name),
                "region" => FieldValue::text(self.region),
                "email" => FieldValue::opt_text(self.email),
                "score" => FieldValue::Number(self.score),
                _ => FieldValue::Missing,
            }
        }
    }

    fn high_score(row: &Row, _: &ViewContext) -> bool {
        row.score >= 50.0
    }

    static PRESETS: &[PresetDef<Row>] = &[
        PresetDef {
            key: ALL,
            label: "All",
            predicate: any_record,
        },
        PresetDef {
            key: "high",
            label: "High",
            predicate: high_score,
        },
    ];

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "R-1", name: "Acme Corp", email: Some("ops@acme.io"), region: "EMEA", score: 80.0 },
            Row { id: "R-2", name: "Globex", email: None, region: "AMER", score: 20.0 },
            Row { id: "R-3", name: "Initech", email: Some("it@initech.com"), region: "EMEA", score: 55.0 },
        ]
    }

    fn ctx() -> ViewContext {
        ViewContext::at(Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap())
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let rows = rows();
        assert!(matches_search(&rows[0], "ACME"));
        assert!(matches_search(&rows[0], "acme.io"));
        assert!(matches_search(&rows[1], "r-2"));
        assert!(!matches_search(&rows[1], "acme"));
        assert!(matches_search(&rows[1], "   "));
    }

    #[test]
    fn categorical_all_and_missing() {
        let rows = rows();
        assert!(matches_categorical(&rows[0], "region", ALL));
        assert!(matches_categorical(&rows[0], "region", "EMEA"));
        assert!(!matches_categorical(&rows[1], "region", "EMEA"));
        assert!(!matches_categorical(&rows[1], "email", "x@y.z"));
        assert!(matches_categorical(&rows[0], "score", "80"));
    }

    #[test]
    fn filter_values_bookkeeping() {
        let mut filters = FilterValues::default();
        assert!(!filters.has_active());
        filters.set_search("acme");
        filters.set_categorical("region", "EMEA");
        filters.set_categorical("owner", ALL);
        assert_eq!(filters.active_count(), 2);
        assert_eq!(filters.categorical("owner"), ALL);

        filters.set_categorical("region", ALL);
        assert_eq!(filters.categorical("region"), ALL);
        assert_eq!(filters.active_count(), 1);

        filters.clear();
        assert_eq!(filters, FilterValues::default());
    }

    #[test]
    fn predicates_combine_with_and() {
        let rows = rows();
        let ctx = ctx();
        let mut filters = FilterValues::default();
        filters.set_categorical("region", "EMEA");

        let p = RowPredicates::new(&filters, PRESETS, "high", &ctx);
        let ids: Vec<_> = rows.iter().filter(|r| p.matches(r)).map(|r| r.id).collect();
        assert_eq!(ids, vec!["R-1", "R-3"]);

        filters.set_search("init");
        let p = RowPredicates::new(&filters, PRESETS, "high", &ctx);
        let ids: Vec<_> = rows.iter().filter(|r| p.matches(r)).map(|r| r.id).collect();
        assert_eq!(ids, vec!["R-3"]);
    }

    #[test]
    fn unknown_preset_is_unconstrained() {
        let rows = rows();
        let ctx = ctx();
        let filters = FilterValues::default();
        let p = RowPredicates::new(&filters, PRESETS, "no-such-tab", &ctx);
        assert_eq!(rows.iter().filter(|r| p.matches(r)).count(), 3);
    }

    #[test]
    fn distinct_values_keep_first_seen_order() {
        assert_eq!(distinct_values(&rows(), "region"), vec!["EMEA", "AMER"]);
        assert_eq!(distinct_values(&rows(), "email").len(), 2);
    }
}
