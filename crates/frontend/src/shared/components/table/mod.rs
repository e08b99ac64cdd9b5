pub mod column_toggle;
pub mod data_table;
pub mod empty_state;
pub mod filter_select;
pub mod preset_tabs;
pub mod sortable_header_cell;

pub use data_table::DataTable;
pub use filter_select::{FilterSelect, SegmentSelect};
pub use sortable_header_cell::SortableHeaderCell;
