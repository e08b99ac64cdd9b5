use crate::shared::icons::icon;
use contracts::shared::format::format_value;
use contracts::shared::indicators::{IndicatorStatus, MetricValue, ValueFormat};
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Primary numeric value (None = loading)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
    /// Visual status
    #[prop(into)]
    status: Signal<IndicatorStatus>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let status_class = move || match status.get() {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, &format),
        None => "—".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

/// Row of cards for a summary. `icon_for` maps a metric id to an icon name.
#[component]
pub fn SummaryCards(
    #[prop(into)] metrics: Signal<Vec<MetricValue>>,
    #[prop(optional)] icon_for: Option<fn(&str) -> &'static str>,
) -> impl IntoView {
    let icon_for = icon_for.unwrap_or(|_| "activity");

    view! {
        <div class="stat-cards">
            {move || metrics.get().into_iter().map(|m| {
                view! {
                    <StatCard
                        label=m.label
                        icon_name=icon_for(&m.id)
                        value=Signal::derive(move || Some(m.value))
                        format=m.format
                        status=Signal::derive(move || m.status)
                        subtitle=Signal::derive(move || m.hint.clone())
                    />
                }
            }).collect_view()}
        </div>
    }
}
