use serde::{Deserialize, Serialize};

use super::filter::{PresetDef, RowPredicates, ViewContext};
use super::record::TableRecord;
use super::sort::sort_rows;
use super::state::{clamp_page_index, page_count, TableState};

/// One rendered page plus the counters the footer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewPage<T> {
    pub rows: Vec<T>,
    pub total_count: usize,
    pub filtered_count: usize,
    /// Effective (clamped) index of `rows`.
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
}

impl<T> ViewPage<T> {
    /// No row passes the filters: the table shows its empty-state row.
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    /// 1-based number of the first row on the page, 0 when empty.
    pub fn first_row_number(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.page_index * self.page_size + 1
        }
    }

    pub fn last_row_number(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.page_index * self.page_size + self.rows.len()
        }
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }
}

/// Records passing every predicate, in source order.
pub fn filter_records<'r, T: TableRecord>(
    records: &'r [T],
    state: &TableState,
    presets: &[PresetDef<T>],
    ctx: &ViewContext,
) -> Vec<&'r T> {
    let predicates = RowPredicates::new(&state.filters, presets, &state.preset, ctx);
    records.iter().filter(|r| predicates.matches(r)).collect()
}

/// Filter, then sort, then slice one page. Never mutates `records`.
pub fn derive_view<T: TableRecord + Clone>(
    records: &[T],
    state: &TableState,
    presets: &[PresetDef<T>],
    ctx: &ViewContext,
) -> ViewPage<T> {
    let mut filtered = filter_records(records, state, presets, ctx);
    if let Some(sort) = &state.sort {
        sort_rows(&mut filtered, sort);
    }

    let filtered_count = filtered.len();
    let page_size = state.page_size.max(1);
    let page_index = clamp_page_index(state.page_index, filtered_count, page_size);
    let rows = filtered
        .into_iter()
        .skip(page_index * page_size)
        .take(page_size)
        .cloned()
        .collect();

    ViewPage {
        rows,
        total_count: records.len(),
        filtered_count,
        page_index,
        page_count: page_count(filtered_count, page_size),
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::filter::{any_record, ALL};
    use crate::shared::table_view::record::FieldValue;
    use crate::shared::table_view::sort::{sort_rows, SortState};
    use crate::shared::table_view::state::PAGE_SIZE_OPTIONS;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeSet;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: usize,
        name: String,
        open: bool,
        region: Option<String>,
    }

    impl TableRecord for Row {
        fn record_id(&self) -> String {
            self.id.to_string()
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str()]
        }

        fn field(&self, key: &str) -> FieldValue<'_> {
            match key {
                "id" => FieldValue::Number(self.id as f64),
                "name" => FieldValue::text(&self.name),
                "region" => FieldValue::opt_text(self.region.as_deref()),
                _ => FieldValue::Missing,
            }
        }
    }

    fn open_only(row: &Row, _: &ViewContext) -> bool {
        row.open
    }

    static PRESETS: &[PresetDef<Row>] = &[
        PresetDef { key: ALL, label: "All", predicate: any_record },
        PresetDef { key: "open", label: "Open", predicate: open_only },
    ];

    fn twelve() -> Vec<Row> {
        (1..=12)
            .map(|id| Row {
                id,
                name: format!("Row {:02}", id),
                open: id % 3 != 0,
                region: None,
            })
            .collect()
    }

    /// Rows with repeated names (for stable-sort ties) and some missing regions.
    fn mixed(n: usize) -> Vec<Row> {
        const REGIONS: [Option<&str>; 4] = [Some("EMEA"), Some("APAC"), None, Some("NA")];
        (1..=n)
            .map(|id| Row {
                id,
                name: if id % 2 == 0 { "Acme Corp" } else { "beta inc" }.to_string(),
                open: id % 3 != 0,
                region: REGIONS[id % 4].map(str::to_string),
            })
            .collect()
    }

    /// Filter and sort combinations, search applied after the tab.
    fn scenarios() -> Vec<TableState> {
        let filters = [
            ("", ALL, ALL),
            ("acme", ALL, ALL),
            ("", "EMEA", "open"),
            ("BETA", "NA", ALL),
            ("acme", "APAC", "open"),
            ("no such row", ALL, ALL),
        ];
        let sorts = [
            None,
            Some(SortState::ascending("name")),
            Some(SortState::descending("region")),
            Some(SortState::descending("id")),
        ];

        let mut out = Vec::new();
        for (search, region, preset) in filters {
            for sort in sorts.iter().cloned() {
                let mut state = TableState::default();
                state.set_preset(preset);
                state.set_search(search);
                state.set_categorical("region", region);
                state.sort = sort;
                out.push(state);
            }
        }
        out
    }

    fn ids(rows: &[Row]) -> Vec<usize> {
        rows.iter().map(|r| r.id).collect()
    }

    fn ctx() -> ViewContext {
        ViewContext::at(Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap())
    }

    #[test]
    fn twelve_rows_split_into_two_pages() {
        let records = twelve();
        let mut state = TableState::default();

        let first = derive_view(&records, &state, PRESETS, &ctx());
        assert_eq!(first.rows.len(), 10);
        assert_eq!(first.page_count, 2);
        assert_eq!(first.total_count, 12);
        assert_eq!((first.first_row_number(), first.last_row_number()), (1, 10));
        assert!(first.can_next());

        state.set_page(1);
        let second = derive_view(&records, &state, PRESETS, &ctx());
        assert_eq!(second.rows.len(), 2);
        assert_eq!(second.rows[0].id, 11);
        assert!(!second.can_next());
        assert!(second.can_previous());
    }

    #[test]
    fn page_index_clamps_when_filter_shrinks() {
        let records = twelve();
        let mut state = TableState::default();
        state.set_page(1);
        state.set_search("Row 1");

        // "Row 10", "Row 11", "Row 12"
        let page = derive_view(&records, &state, PRESETS, &ctx());
        assert_eq!(page.filtered_count, 3);
        assert_eq!(page.page_index, 0);
        assert_eq!(page.rows.len(), 3);
    }

    #[test]
    fn empty_result_still_has_one_page() {
        let records = twelve();
        let mut state = TableState::default();
        state.set_search("nothing like this");
        let page = derive_view(&records, &state, PRESETS, &ctx());
        assert!(page.is_empty());
        assert_eq!(page.page_count, 1);
        assert_eq!(page.first_row_number(), 0);
    }

    #[test]
    fn preset_and_sort_apply_before_paging() {
        let records = twelve();
        let mut state = TableState::default().with_sort(SortState::descending("id"));
        state.set_preset("open");

        let page = derive_view(&records, &state, PRESETS, &ctx());
        assert_eq!(page.filtered_count, 8);
        let ids: Vec<usize> = page.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![11, 10, 8, 7, 5, 4, 2, 1]);
        // исходный массив не изменился
        assert_eq!(records[0].id, 1);
    }

    #[test]
    fn filtered_rows_come_from_source_and_pass_every_filter() {
        let records = mixed(23);
        let source: BTreeSet<usize> = records.iter().map(|r| r.id).collect();

        for state in scenarios() {
            let search = state.filters.search.trim().to_lowercase();
            let region = state.filters.categorical("region").to_string();
            let rows = filter_records(&records, &state, PRESETS, &ctx());
            assert!(rows.len() <= records.len());

            for row in rows {
                assert!(source.contains(&row.id));
                assert!(row.name.to_lowercase().contains(&search));
                if region != ALL {
                    assert_eq!(row.region.as_deref(), Some(region.as_str()));
                }
                if state.preset == "open" {
                    assert!(row.open);
                }
            }
        }
    }

    #[test]
    fn sorting_sorted_rows_changes_nothing() {
        let records = mixed(23);
        for state in scenarios() {
            let Some(sort) = &state.sort else { continue };
            let mut once = filter_records(&records, &state, PRESETS, &ctx());
            sort_rows(&mut once, sort);
            let mut twice = once.clone();
            sort_rows(&mut twice, sort);
            assert_eq!(once, twice);

            // то же через derive_view над уже отсортированным массивом
            let sorted: Vec<Row> = once.into_iter().cloned().collect();
            let mut all_rows = state.clone();
            all_rows.set_page_size(50);
            let page = derive_view(&sorted, &all_rows, PRESETS, &ctx());
            assert_eq!(ids(&page.rows), ids(&sorted));
        }
    }

    #[test]
    fn pages_concatenate_to_filtered_sequence() {
        let records = mixed(23);
        for base in scenarios() {
            let mut expected = filter_records(&records, &base, PRESETS, &ctx());
            if let Some(sort) = &base.sort {
                sort_rows(&mut expected, sort);
            }
            let expected: Vec<usize> = expected.iter().map(|r| r.id).collect();

            for size in PAGE_SIZE_OPTIONS {
                let mut state = base.clone();
                assert!(state.set_page_size(size));
                let page_count = derive_view(&records, &state, PRESETS, &ctx()).page_count;
                assert_eq!(page_count, expected.len().div_ceil(size).max(1));

                let mut seen = Vec::new();
                for index in 0..page_count {
                    state.set_page(index);
                    let page = derive_view(&records, &state, PRESETS, &ctx());
                    assert_eq!(page.page_index, index);
                    assert!(page.rows.len() <= size);
                    seen.extend(ids(&page.rows));
                }
                assert_eq!(seen, expected);
                let unique: BTreeSet<usize> = seen.iter().copied().collect();
                assert_eq!(unique.len(), seen.len());
            }
        }
    }
}
