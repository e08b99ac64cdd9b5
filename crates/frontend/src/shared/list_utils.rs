//! Общие утилиты для списков: индикатор сортировки и поле поиска с debounce.

use contracts::shared::table_view::SortDirection;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Задержка поиска, мс
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Индикатор сортировки для заголовка колонки
pub fn get_sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => " ⇅",
    }
}

/// CSS class of the indicator span
pub fn get_sort_class(direction: Option<SortDirection>) -> &'static str {
    if direction.is_some() {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние input (до debounce)
    let input_value = RwSignal::new(value.get_untracked());
    // Поколение ввода: срабатывает только последний таймер
    let generation = StoredValue::new(0u64);

    // Внешний сброс (смена вкладки, "Clear filters") отражается в поле
    Effect::new(move |_| {
        let external = value.get();
        if input_value.get_untracked() != external {
            input_value.set(external);
        }
    });

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();

        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.get_value() == current {
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        generation.update_value(|g| *g += 1);
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            {crate::shared::icons::icon("search")}
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_follows_direction() {
        assert_eq!(get_sort_indicator(Some(SortDirection::Ascending)), " ▲");
        assert_eq!(get_sort_indicator(Some(SortDirection::Descending)), " ▼");
        assert_eq!(get_sort_indicator(None), " ⇅");
        assert_eq!(get_sort_class(None), "table__sort-indicator");
    }
}
