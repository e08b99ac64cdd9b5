use super::commission_status_variant;
use crate::shared::components::stat_card::SummaryCards;
use crate::shared::components::table::{DataTable, FilterSelect};
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_date, format_opt_date, now};
use crate::shared::icons::icon;
use contracts::domain::a004_commission::summary::commission_totals;
use contracts::domain::a004_commission::table::{status_options, COLUMNS, PRESETS, SEARCH_PLACEHOLDER};
use contracts::domain::a004_commission::Commission;
use contracts::shared::format::format_usd;
use contracts::shared::table_view::{TableRecord, TableState, ViewContext};
use leptos::prelude::*;

fn render_cell(c: &Commission, key: &'static str) -> AnyView {
    match key {
        "id" => view! { <span class="text-mono">{c.id.clone()}</span> }.into_any(),
        "customer" => view! {
            <div>
                <strong>{c.customer.clone()}</strong>
                <div class="text-muted text-mono">{c.deal_id.clone()}</div>
            </div>
        }
        .into_any(),
        "dealValue" => format_usd(c.deal_value).into_any(),
        "earnedAmount" => view! { <strong>{format_usd(c.earned_amount)}</strong> }.into_any(),
        "status" => {
            let label = c.status.display_label().to_string();
            view! {
                <Badge variant=commission_status_variant(&c.status).to_string()>
                    {label}
                </Badge>
            }
            .into_any()
        }
        "payoutDate" => format_opt_date(c.payout_date()).into_any(),
        "dealCloseDate" => format_date(&c.deal_close_date).into_any(),
        other => c
            .field(other)
            .as_text()
            .map(|t| t.into_owned())
            .unwrap_or_else(|| "—".to_string())
            .into_any(),
    }
}

#[component]
pub fn CommissionsTable(
    #[prop(into)] commissions: Signal<Vec<Commission>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let state = RwSignal::new(TableState::with_columns(COLUMNS));
    let ctx = Signal::derive(move || ViewContext::at(now()));
    let totals = Memo::new(move |_| commissions.with(|c| commission_totals(c)));

    view! {
        <section class="card">
            <div class="card__header">
                {icon("briefcase")}
                <h2 class="card__title">"Commissions"</h2>
            </div>
            <SummaryCards metrics=totals />
            <DataTable
                records=commissions
                columns=COLUMNS
                presets=PRESETS
                state=state
                ctx=ctx
                render_cell=render_cell
                search_placeholder=SEARCH_PLACEHOLDER
                loading=loading
            >
                <FilterSelect label="Status" field="status" options=status_options() state=state />
            </DataTable>
        </section>
    }
}
