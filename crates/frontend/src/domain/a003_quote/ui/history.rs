use super::quote_status_variant;
use crate::shared::components::table::{DataTable, FilterSelect};
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_date, format_opt_date, now};
use crate::shared::icons::icon;
use contracts::domain::a003_quote::table::{status_options, COLUMNS, PRESETS, SEARCH_PLACEHOLDER};
use contracts::domain::a003_quote::Quote;
use contracts::shared::format::{format_thousands, format_usd};
use contracts::shared::table_view::{TableRecord, TableState, ViewContext};
use leptos::prelude::*;

fn render_cell(quote: &Quote, key: &'static str) -> AnyView {
    match key {
        "id" => view! { <span class="text-mono">{quote.id.clone()}</span> }.into_any(),
        "customer" => view! { <strong>{quote.customer.clone()}</strong> }.into_any(),
        "seats" => format_thousands(quote.seats as i64).into_any(),
        "totalValue" => format_usd(quote.total_value).into_any(),
        "status" => {
            let label = quote.status.display_label().to_string();
            view! {
                <Badge variant=quote_status_variant(&quote.status).to_string()>
                    {label}
                </Badge>
            }
            .into_any()
        }
        "validUntil" => format_opt_date(quote.valid_until.as_deref()).into_any(),
        "createdDate" => format_date(&quote.created_date).into_any(),
        other => quote
            .field(other)
            .as_text()
            .map(|t| t.into_owned())
            .unwrap_or_else(|| "—".to_string())
            .into_any(),
    }
}

#[component]
pub fn QuoteHistory(
    #[prop(into)] quotes: Signal<Vec<Quote>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let state = RwSignal::new(TableState::with_columns(COLUMNS));
    let ctx = Signal::derive(move || ViewContext::at(now()));

    view! {
        <section class="card">
            <div class="card__header">
                {icon("clock")}
                <h2 class="card__title">"Quote History"</h2>
            </div>
            <DataTable
                records=quotes
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
