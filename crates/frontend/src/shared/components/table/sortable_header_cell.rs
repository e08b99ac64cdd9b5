//! Заголовок колонки таблицы с индикатором сортировки
//!
//! ```ignore
//! <SortableHeaderCell
//!     column=COLUMNS[0]
//!     direction=Signal::derive(move || state.with(|s| s.sort_direction("value")))
//!     on_sort=Callback::new(move |key: &'static str| state.update(|s| s.toggle_sort(COLUMNS, key)))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::table_view::{Align, ColumnDef, SortDirection};
use leptos::prelude::*;
use thaw::*;

/// Header cell driven by a [`ColumnDef`]. Unsortable columns render a
/// plain label and ignore clicks.
#[component]
pub fn SortableHeaderCell(
    column: ColumnDef,

    /// Направление сортировки этой колонки, None если сортировка по другой
    #[prop(into)]
    direction: Signal<Option<SortDirection>>,

    /// Receives the column key
    on_sort: Callback<&'static str>,

    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let header_style = match column.align {
        Align::Right => "justify-content: flex-end; padding-right: 12px;",
        Align::Left => "padding-right: 12px;",
    };

    if !column.sortable {
        return view! {
            <TableHeaderCell min_width=min_width>
                <div class="table__header" style=header_style>{column.label}</div>
            </TableHeaderCell>
        }
        .into_any();
    }

    let key = column.key;
    view! {
        <TableHeaderCell resizable=true min_width=min_width class="resizable">
            <div
                class="table__sortable-header"
                style=format!("cursor: pointer; {}", header_style)
                on:click=move |_| on_sort.run(key)
            >
                {column.label}
                <span class=move || get_sort_class(direction.get())>
                    {move || get_sort_indicator(direction.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
    .into_any()
}
