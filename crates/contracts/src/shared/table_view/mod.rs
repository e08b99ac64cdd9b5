//! Filterable tabular view: predicate set, derived view model, table state
//! and summary aggregation over in-memory record arrays.
//!
//! Everything here is pure: the frontend wraps [`TableState`] in a signal and
//! recomputes [`derive_view`] in a memo, the backend reuses the same
//! predicates for CSV export.

pub mod column;
pub mod dates;
pub mod filter;
pub mod record;
pub mod sort;
pub mod state;
pub mod summary;
pub mod view;

pub use column::{default_hidden_columns, Align, ColumnDef};
pub use filter::{
    distinct_values, find_preset, is_inactive, matches_categorical, matches_search, FilterValues,
    PresetDef, RowPredicates, ViewContext, ALL,
};
pub use record::{FieldValue, TableRecord};
pub use sort::{SortDirection, SortState};
pub use state::{clamp_page_index, page_count, TableState, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use view::{derive_view, filter_records, ViewPage};
