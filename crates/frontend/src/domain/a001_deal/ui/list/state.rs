use contracts::domain::a001_deal::table::COLUMNS;
use contracts::shared::table_view::{SortState, TableState};
use leptos::prelude::*;

/// Deals open sorted by expected close date, soonest first.
pub fn initial_state() -> TableState {
    TableState::with_columns(COLUMNS).with_sort(SortState::ascending("closeDate"))
}

pub fn create_state() -> RwSignal<TableState> {
    RwSignal::new(initial_state())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table_view::SortDirection;

    #[test]
    fn optional_columns_start_hidden() {
        let state = initial_state();
        assert!(!state.is_column_visible("lastActivity"));
        assert!(!state.is_column_visible("contactEmail"));
        assert!(state.is_column_visible("account"));
        assert_eq!(state.sort_direction("closeDate"), Some(SortDirection::Ascending));
    }
}
