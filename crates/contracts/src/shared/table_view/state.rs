use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::column::{default_hidden_columns, find_column, ColumnDef};
use super::filter::{FilterValues, ALL};
use super::sort::{SortDirection, SortState};

pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Всё, что пользователь может изменить в таблице. Никогда не содержит
/// производных данных: строки и счётчики считает [`derive_view`](super::derive_view).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    pub filters: FilterValues,
    /// Active tab key, [`ALL`] by default.
    pub preset: String,
    pub sort: Option<SortState>,
    /// Zero-based.
    pub page_index: usize,
    pub page_size: usize,
    pub hidden_columns: BTreeSet<String>,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            filters: FilterValues::default(),
            preset: ALL.to_string(),
            sort: None,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            hidden_columns: BTreeSet::new(),
        }
    }
}

impl TableState {
    /// Initial state with the columns' default visibility applied.
    pub fn with_columns(columns: &[ColumnDef]) -> Self {
        Self {
            hidden_columns: default_hidden_columns(columns),
            ..Self::default()
        }
    }

    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filters.set_search(query);
    }

    pub fn set_categorical(&mut self, field: &str, value: impl Into<String>) {
        self.filters.set_categorical(field, value);
    }

    /// Switching tabs clears the search text and returns to the first page.
    /// Dropdown filters are kept.
    pub fn set_preset(&mut self, key: impl Into<String>) {
        self.preset = key.into();
        self.filters.search.clear();
        self.page_index = 0;
    }

    /// Preset picked from a status dropdown rather than a tab strip: search
    /// text and dropdown filters survive, paging restarts.
    pub fn set_segment(&mut self, key: impl Into<String>) {
        self.preset = key.into();
        self.page_index = 0;
    }

    /// Resets search and dropdowns. The tab stays selected.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Header click: unsorted -> ascending -> descending -> unsorted.
    /// A different column starts again at ascending. Unsortable and unknown
    /// columns are ignored.
    pub fn toggle_sort(&mut self, columns: &[ColumnDef], column: &str) {
        if !find_column(columns, column).is_some_and(|c| c.sortable) {
            return;
        }
        self.sort = match self.sort.take() {
            Some(current) if current.column == column => match current.direction {
                SortDirection::Ascending => Some(SortState::descending(column)),
                SortDirection::Descending => None,
            },
            _ => Some(SortState::ascending(column)),
        };
    }

    pub fn sort_direction(&self, column: &str) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .filter(|s| s.column == column)
            .map(|s| s.direction)
    }

    pub fn set_page(&mut self, index: usize) {
        self.page_index = index;
    }

    /// Sizes outside [`PAGE_SIZE_OPTIONS`] are ignored. Returns whether applied.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            return false;
        }
        self.page_size = size;
        self.page_index = 0;
        true
    }

    /// Show/hide a column. Pinned and unknown columns are left alone.
    pub fn toggle_column(&mut self, columns: &[ColumnDef], key: &str) {
        let Some(column) = find_column(columns, key) else {
            return;
        };
        if !column.hideable {
            return;
        }
        if !self.hidden_columns.remove(key) {
            self.hidden_columns.insert(key.to_string());
        }
    }

    pub fn is_column_visible(&self, key: &str) -> bool {
        !self.hidden_columns.contains(key)
    }

    pub fn visible_columns<'c>(&self, columns: &'c [ColumnDef]) -> Vec<&'c ColumnDef> {
        columns
            .iter()
            .filter(|c| self.is_column_visible(c.key))
            .collect()
    }

    /// Pull the page index back into range after the filtered count shrank.
    pub fn sync_page(&mut self, filtered_count: usize) {
        self.page_index = clamp_page_index(self.page_index, filtered_count, self.page_size);
    }
}

/// `max(1, ceil(filtered / size))`
pub fn page_count(filtered_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    filtered_count.div_ceil(page_size).max(1)
}

pub fn clamp_page_index(page_index: usize, filtered_count: usize, page_size: usize) -> usize {
    page_index.min(page_count(filtered_count, page_size) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[ColumnDef] = &[
        ColumnDef::new("account", "Account").pinned(),
        ColumnDef::new("value", "Value").right(),
        ColumnDef::new("contactEmail", "Contact Email").hidden(),
        ColumnDef::new("actions", "").pinned().unsortable(),
    ];

    #[test]
    fn sort_cycles_through_three_states() {
        let mut state = TableState::default();
        state.toggle_sort(COLUMNS, "value");
        assert_eq!(state.sort_direction("value"), Some(SortDirection::Ascending));
        state.toggle_sort(COLUMNS, "value");
        assert_eq!(state.sort_direction("value"), Some(SortDirection::Descending));
        state.toggle_sort(COLUMNS, "value");
        assert_eq!(state.sort, None);

        state.toggle_sort(COLUMNS, "value");
        state.toggle_sort(COLUMNS, "account");
        assert_eq!(state.sort, Some(SortState::ascending("account")));
        assert_eq!(state.sort_direction("value"), None);
    }

    #[test]
    fn unsortable_columns_keep_current_sort() {
        let mut state = TableState::default();
        state.toggle_sort(COLUMNS, "value");
        state.toggle_sort(COLUMNS, "actions");
        assert_eq!(state.sort, Some(SortState::ascending("value")));
        state.toggle_sort(COLUMNS, "unknown");
        assert_eq!(state.sort, Some(SortState::ascending("value")));
    }

    #[test]
    fn segment_keeps_search_and_dropdowns() {
        let mut state = TableState::default();
        state.set_search("acme");
        state.set_categorical("priority", "high");
        state.set_page(2);
        state.set_segment("active");

        assert_eq!(state.preset, "active");
        assert_eq!(state.filters.search, "acme");
        assert_eq!(state.filters.categorical("priority"), "high");
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut state = TableState::default();
        state.set_page(3);
        assert!(state.set_page_size(20));
        assert_eq!(state.page_index, 0);
        assert_eq!(state.page_size, 20);

        state.set_page(2);
        assert!(!state.set_page_size(15));
        assert_eq!(state.page_size, 20);
        assert_eq!(state.page_index, 2);
    }

    #[test]
    fn preset_switch_keeps_dropdowns() {
        let mut state = TableState::default();
        state.set_search("acme");
        state.set_categorical("region", "EMEA");
        state.set_page(1);
        state.set_preset("pending");

        assert_eq!(state.preset, "pending");
        assert_eq!(state.filters.search, "");
        assert_eq!(state.filters.categorical("region"), "EMEA");
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn clear_filters_keeps_preset() {
        let mut state = TableState::default();
        state.set_preset("pending");
        state.set_search("x");
        state.set_categorical("stage", "Qualified");
        state.clear_filters();
        assert!(!state.filters.has_active());
        assert_eq!(state.preset, "pending");
    }

    #[test]
    fn column_visibility() {
        let mut state = TableState::with_columns(COLUMNS);
        assert!(!state.is_column_visible("contactEmail"));
        assert_eq!(state.visible_columns(COLUMNS).len(), 3);

        state.toggle_column(COLUMNS, "contactEmail");
        assert!(state.is_column_visible("contactEmail"));
        state.toggle_column(COLUMNS, "value");
        assert!(!state.is_column_visible("value"));

        // закреплённые колонки не скрываются
        state.toggle_column(COLUMNS, "account");
        assert!(state.is_column_visible("account"));
        state.toggle_column(COLUMNS, "unknown");
        assert!(state.is_column_visible("unknown"));
    }

    #[test]
    fn page_math() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(12, 10), 2);
        assert_eq!(clamp_page_index(5, 12, 10), 1);
        assert_eq!(clamp_page_index(0, 0, 10), 0);

        let mut state = TableState::default();
        state.set_page(1);
        state.sync_page(3);
        assert_eq!(state.page_index, 0);
    }
}
