//! Deal pipeline trend: open pipeline and closed-won value per week.

use crate::shared::date_utils::format_short_date;
use crate::shared::icons::icon;
use contracts::domain::a001_deal::trend::{trend_heights, trend_window};
use contracts::domain::a001_deal::{PipelinePoint, TrendRange};
use contracts::shared::format::format_usd;
use leptos::prelude::*;

fn point_title(p: &PipelinePoint) -> String {
    format!(
        "{}: pipeline {}, closed {}",
        format_short_date(&p.date),
        format_usd(p.pipeline),
        format_usd(p.successful)
    )
}

#[component]
pub fn PipelineTrendCard(#[prop(into)] points: Signal<Vec<PipelinePoint>>) -> impl IntoView {
    let range = RwSignal::new(TrendRange::default());
    let window = Memo::new(move |_| points.with(|p| trend_window(p, range.get())));

    view! {
        <section class="card">
            <div class="card__header">
                {icon("trending-up")}
                <div>
                    <h2 class="card__title">"Deal Pipeline Trend"</h2>
                    <div class="text-muted">"Pipeline value and closed successful value over time"</div>
                </div>
                <div class="preset-tabs trend-chart__ranges" role="tablist">
                    {TrendRange::ALL
                        .into_iter()
                        .map(|r| view! {
                            <button
                                class="preset-tabs__tab"
                                class:preset-tabs__tab--active=move || range.get() == r
                                on:click=move |_| range.set(r)
                            >
                                {r.label()}
                            </button>
                        })
                        .collect_view()}
                </div>
            </div>
            {move || {
                let points = window.get();
                if points.is_empty() {
                    return view! { <div class="text-muted">"No trend data"</div> }.into_any();
                }
                let heights = trend_heights(&points);
                view! {
                    <div class="bar-chart trend-chart">
                        {points
                            .iter()
                            .zip(heights)
                            .map(|(p, (pipeline, successful))| view! {
                                <div class="bar-chart__column" title=point_title(p)>
                                    <div class="bar-chart__track">
                                        <div class="bar-chart__bar" style=format!("height: {:.1}%;", pipeline)></div>
                                        <div
                                            class="bar-chart__bar bar-chart__bar--secondary"
                                            style=format!("height: {:.1}%;", successful)
                                        ></div>
                                    </div>
                                    <div class="bar-chart__label">{format_short_date(&p.date)}</div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                    <div class="trend-chart__legend">
                        <span class="trend-chart__key">"Pipeline Value"</span>
                        <span class="trend-chart__key trend-chart__key--secondary">"Closed Successful"</span>
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_lists_both_series() {
        let p = PipelinePoint {
            date: "2024-12-31".to_string(),
            pipeline: 847_500.0,
            successful: 312_000.0,
        };
        let title = point_title(&p);
        assert!(title.starts_with("Dec 31: pipeline "));
        assert!(title.contains("closed "));
    }
}
