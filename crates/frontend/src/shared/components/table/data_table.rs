//! Generic filterable table: tabs, search, dropdown filters, column menu,
//! sortable headers and pagination over an in-memory record array.
//!
//! All row logic lives in `contracts::shared::table_view`; this component
//! only keeps a [`TableState`] signal and renders the memoized
//! [`derive_view`] result.

use super::column_toggle::ColumnToggle;
use super::empty_state::EmptyState;
use super::preset_tabs::PresetTabs;
use super::sortable_header_cell::SortableHeaderCell;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::shared::table_view::{
    derive_view, Align, ColumnDef, PresetDef, TableRecord, TableState, ViewContext,
};
use leptos::prelude::*;
use thaw::*;

/// Column key rendered as the row "View" button.
pub const ACTIONS_COLUMN: &str = "actions";

#[component]
pub fn DataTable<T>(
    /// Full record array as loaded from the API
    #[prop(into)]
    records: Signal<Vec<T>>,
    columns: &'static [ColumnDef],
    /// Tabs; an empty slice hides the strip
    presets: &'static [PresetDef<T>],
    /// Presets are chosen from a dropdown in the filter panel instead of tabs
    #[prop(optional)]
    hide_tabs: bool,
    state: RwSignal<TableState>,
    #[prop(into)]
    ctx: Signal<ViewContext>,
    /// Cell content for (row, column key)
    render_cell: fn(&T, &'static str) -> AnyView,
    #[prop(optional, into)]
    search_placeholder: String,
    /// Receives `record_id()` of the row whose "View" button was pressed
    #[prop(optional)]
    on_open: Option<Callback<String>>,
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    /// Dropdown filters placed in the filter panel
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView
where
    T: TableRecord + Clone + PartialEq + Send + Sync + 'static,
{
    let view_page = Memo::new(move |_| {
        records.with(|items| {
            state.with(|s| ctx.with(|ctx| derive_view(items, s, presets, ctx)))
        })
    });

    // Фильтр сократил выборку: возвращаем номер страницы в допустимый диапазон
    Effect::new(move |_| {
        let effective = view_page.with(|p| p.page_index);
        if state.with_untracked(|s| s.page_index) != effective {
            state.update(|s| s.page_index = effective);
        }
    });

    let visible_columns = Memo::new(move |_| {
        state.with(|s| {
            s.visible_columns(columns)
                .into_iter()
                .copied()
                .collect::<Vec<ColumnDef>>()
        })
    });

    let is_filter_expanded = RwSignal::new(false);
    let active_filters_count = Signal::derive(move || state.with(|s| s.filters.active_count()));
    let is_loading = move || loading.get().unwrap_or(false);

    let on_sort =
        Callback::new(move |key: &'static str| state.update(|s| s.toggle_sort(columns, key)));
    let clear_filters = Callback::new(move |_| state.update(|s| s.clear_filters()));

    let search_value = Signal::derive(move || state.with(|s| s.filters.search.clone()));
    let on_search = Callback::new(move |query: String| state.update(|s| s.set_search(query)));

    let filter_tags = move || {
        let filters = state.with(|s| s.filters.clone());
        let mut tags = Vec::new();
        if !filters.search.trim().is_empty() {
            tags.push(view! {
                <FilterTag
                    label=format!("Search: {}", filters.search.trim())
                    on_remove=Callback::new(move |_| state.update(|s| s.set_search("")))
                />
            }.into_any());
        }
        for (field, value) in filters.categorical {
            let label = columns
                .iter()
                .find(|c| c.key == field)
                .map(|c| c.label.to_string())
                .unwrap_or_else(|| field.clone());
            tags.push(view! {
                <FilterTag
                    label=format!("{}: {}", label, value)
                    on_remove=Callback::new(move |_| {
                        state.update(|s| s.set_categorical(&field, ""))
                    })
                />
            }.into_any());
        }
        tags
    };

    let render_row = move |row: T| {
        view! {
            <TableRow>
                {move || {
                    visible_columns
                        .get()
                        .into_iter()
                        .map(|column| body_cell(&row, &column, render_cell, on_open))
                        .collect_view()
                }}
            </TableRow>
        }
    };

    view! {
        <div class="data-table">
            {(!presets.is_empty() && !hide_tabs).then(|| view! {
                <PresetTabs records=records presets=presets state=state ctx=ctx />
            })}

            <FilterPanel
                is_expanded=is_filter_expanded
                active_filters_count=active_filters_count
                header_content=move || view! {
                    <SearchInput
                        value=search_value
                        on_change=on_search
                        placeholder=search_placeholder.clone()
                    />
                    <ColumnToggle columns=columns state=state />
                }
                filter_tags=filter_tags
            >
                <div class="filter-panel__fields">
                    {children.map(|c| c())}
                    <Show when={move || active_filters_count.get() > 0}>
                        <button
                            class="button button--ghost button--small"
                            on:click=move |_| clear_filters.run(())
                        >
                            {icon("x")}
                            "Clear filters"
                        </button>
                    </Show>
                </div>
            </FilterPanel>

            <div class="data-table__meta text-muted">
                {move || view_page.with(|p| {
                    if p.filtered_count == p.total_count {
                        format!("{} records", p.total_count)
                    } else {
                        format!("{} of {} records", p.filtered_count, p.total_count)
                    }
                })}
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {move || {
                                visible_columns
                                    .get()
                                    .into_iter()
                                    .map(|column| {
                                        let key = column.key;
                                        view! {
                                            <SortableHeaderCell
                                                column=column
                                                direction=Signal::derive(move || {
                                                    state.with(|s| s.sort_direction(key))
                                                })
                                                on_sort=on_sort
                                            />
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || view_page.with(|p| p.rows.clone())
                            key=|row: &T| row.record_id()
                            children=render_row
                        />
                    </TableBody>
                </Table>

                <Show when=move || is_loading()>
                    <div class="data-table__loading">"Loading..."</div>
                </Show>
                <Show when=move || !is_loading() && view_page.with(|p| p.is_empty())>
                    <EmptyState
                        message="No results match the current filters."
                        can_clear=Signal::derive(move || active_filters_count.get() > 0)
                        on_clear=clear_filters
                    />
                </Show>
            </div>

            <div class="data-table__footer">
                <PaginationControls
                    current_page=Signal::derive(move || view_page.with(|p| p.page_index))
                    total_pages=Signal::derive(move || view_page.with(|p| p.page_count))
                    total_count=Signal::derive(move || view_page.with(|p| p.filtered_count))
                    page_size=Signal::derive(move || view_page.with(|p| p.page_size))
                    on_page_change=Callback::new(move |page| state.update(|s| s.set_page(page)))
                    on_page_size_change=Callback::new(move |size| {
                        state.update(|s| {
                            s.set_page_size(size);
                        })
                    })
                />
            </div>
        </div>
    }
}

fn body_cell<T: TableRecord>(
    row: &T,
    column: &ColumnDef,
    render_cell: fn(&T, &'static str) -> AnyView,
    on_open: Option<Callback<String>>,
) -> AnyView {
    let class = match column.align {
        Align::Right => "table__cell table__cell--right",
        Align::Left => "table__cell",
    };

    let content = match (column.key, on_open) {
        (ACTIONS_COLUMN, Some(open)) => {
            let id = row.record_id();
            view! {
                <button
                    class="button button--ghost button--small"
                    title="View details"
                    on:click=move |_| open.run(id.clone())
                >
                    {icon("eye")}
                    "View"
                </button>
            }
            .into_any()
        }
        (key, _) => render_cell(row, key),
    };

    view! {
        <TableCell>
            <TableCellLayout truncate=true>
                <div class=class>{content}</div>
            </TableCellLayout>
        </TableCell>
    }
    .into_any()
}
