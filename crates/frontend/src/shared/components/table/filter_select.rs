use contracts::shared::table_view::{TableState, ALL};
use leptos::prelude::*;

/// Labelled dropdown bound to one categorical filter of a table. The first
/// option ("All ...") clears the constraint.
#[component]
pub fn FilterSelect(
    #[prop(into)] label: String,
    /// Field key in [`TableState::filters`]
    field: &'static str,
    /// (value, label) pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    state: RwSignal<TableState>,
) -> impl IntoView {
    let all_label = format!("All {}", label.to_lowercase());
    let selected = move || state.with(|s| s.filters.categorical(field).to_string());

    view! {
        <div class="form__group filter-select">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                prop:value=selected
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.set_categorical(field, value));
                }
            >
                <option value=ALL selected=move || selected() == ALL>{all_label}</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(value, text)| {
                            let is_selected = value.clone();
                            view! {
                                <option value=value selected=move || selected() == is_selected>
                                    {text}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

/// Dropdown that drives the preset instead of a tab strip (ticket status,
/// where "Active" spans several statuses). Keeps the search text.
#[component]
pub fn SegmentSelect(
    #[prop(into)] label: String,
    /// (key, label) pairs; the first one is usually [`ALL`]
    options: Vec<(&'static str, &'static str)>,
    state: RwSignal<TableState>,
) -> impl IntoView {
    view! {
        <div class="form__group filter-select">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                prop:value=move || state.with(|s| s.preset.clone())
                on:change=move |ev| {
                    let key = event_target_value(&ev);
                    state.update(|s| s.set_segment(key));
                }
            >
                {options
                    .into_iter()
                    .map(|(key, text)| {
                        view! {
                            <option value=key selected=move || state.with(|s| s.preset == key)>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
