use contracts::domain::a002_customer::table::COLUMNS;
use contracts::shared::table_view::{SortState, TableState};
use leptos::prelude::*;

/// Earliest renewal first.
pub fn create_state() -> RwSignal<TableState> {
    RwSignal::new(TableState::with_columns(COLUMNS).with_sort(SortState::ascending("contractEnd")))
}
