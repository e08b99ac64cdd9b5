use crate::shared::icons::icon;
use leptos::prelude::*;

/// Placeholder shown instead of table rows when nothing matches.
#[component]
pub fn EmptyState(
    #[prop(into)] message: String,
    /// Shows the "Clear filters" button when there is something to clear
    #[prop(into)]
    can_clear: Signal<bool>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon("search")}</div>
            <div class="empty-state__message">{message}</div>
            <Show when=move || can_clear.get()>
                <button class="button button--secondary" on:click=move |_| on_clear.run(())>
                    "Clear filters"
                </button>
            </Show>
        </div>
    }
}
