use crate::shared::icons::icon;
use contracts::shared::table_view::{ColumnDef, TableState};
use leptos::prelude::*;

/// "Columns" dropdown with one checkbox per hideable column.
#[component]
pub fn ColumnToggle(columns: &'static [ColumnDef], state: RwSignal<TableState>) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="column-toggle">
            <button
                class="button button--secondary button--small"
                on:click=move |_| open.update(|o| *o = !*o)
                title="Show or hide columns"
            >
                {icon("columns")}
                "Columns"
            </button>
            <Show when=move || open.get()>
                <div class="column-toggle__menu">
                    {columns
                        .iter()
                        .filter(|c| c.hideable)
                        .map(|c| {
                            let key = c.key;
                            view! {
                                <label class="column-toggle__item">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || state.with(|s| s.is_column_visible(key))
                                        on:change=move |_| {
                                            state.update(|s| s.toggle_column(columns, key))
                                        }
                                    />
                                    <span>{c.label}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
