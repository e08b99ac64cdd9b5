use contracts::shared::table_view::summary::preset_counts;
use contracts::shared::table_view::{PresetDef, TableRecord, TableState, ViewContext};
use leptos::prelude::*;

/// Tab strip over the presets of a table. Counts are taken over the full
/// record array, not the filtered one.
#[component]
pub fn PresetTabs<T>(
    #[prop(into)] records: Signal<Vec<T>>,
    presets: &'static [PresetDef<T>],
    state: RwSignal<TableState>,
    #[prop(into)] ctx: Signal<ViewContext>,
) -> impl IntoView
where
    T: TableRecord + Clone + Send + Sync + 'static,
{
    let counts = Memo::new(move |_| {
        records.with(|items| ctx.with(|ctx| preset_counts(items, presets, ctx)))
    });

    view! {
        <div class="preset-tabs" role="tablist">
            {presets
                .iter()
                .map(|preset| {
                    let key = preset.key;
                    let is_active = move || state.with(|s| s.preset == key);
                    view! {
                        <button
                            role="tab"
                            class="preset-tabs__tab"
                            class:preset-tabs__tab--active=is_active
                            aria-selected=move || is_active().to_string()
                            on:click=move |_| state.update(|s| s.set_preset(key))
                        >
                            <span>{preset.label}</span>
                            <span class="preset-tabs__count">
                                {move || counts.with(|c| c.get(key).copied().unwrap_or(0))}
                            </span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
