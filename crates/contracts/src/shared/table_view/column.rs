use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    Left,
    Right,
}

/// Static description of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// Field key passed to [`TableRecord::field`](super::TableRecord::field).
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub hideable: bool,
    pub visible_by_default: bool,
    pub align: Align,
}

impl ColumnDef {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: true,
            hideable: true,
            visible_by_default: true,
            align: Align::Left,
        }
    }

    /// Cannot be hidden from the column menu.
    pub const fn pinned(mut self) -> Self {
        self.hideable = false;
        self
    }

    pub const fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub const fn hidden(mut self) -> Self {
        self.visible_by_default = false;
        self
    }

    pub const fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }
}

/// Keys of columns that start hidden.
pub fn default_hidden_columns(columns: &[ColumnDef]) -> BTreeSet<String> {
    columns
        .iter()
        .filter(|c| !c.visible_by_default)
        .map(|c| c.key.to_string())
        .collect()
}

pub fn find_column<'a>(columns: &'a [ColumnDef], key: &str) -> Option<&'a ColumnDef> {
    columns.iter().find(|c| c.key == key)
}
