pub mod actions;
pub mod format;
pub mod indicators;
pub mod table_view;
pub mod text;
