use super::{stage_variant, status_variant};
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_date, format_opt_date};
use crate::shared::icons::icon;
use contracts::domain::a001_deal::Deal;
use contracts::shared::format::format_usd;
use leptos::prelude::*;

/// Side card with every field of the deal picked via the row "View" action.
#[component]
pub fn DealDetailsPanel(deal: Deal, on_close: Callback<()>) -> impl IntoView {
    let rows: Vec<(&'static str, String)> = vec![
        ("Deal ID", deal.deal_id.clone()),
        ("Package", deal.package.clone()),
        ("Seats", deal.seats.clone()),
        ("Term", deal.term.clone()),
        ("Deal Value", format_usd(deal.value)),
        ("Expected Close", format_date(&deal.close_date)),
        ("Owner", deal.owner.clone()),
        ("Region", deal.region.clone()),
        ("Last Activity", format_opt_date(deal.last_activity.as_deref())),
        (
            "Contact",
            deal.contact_email.clone().unwrap_or_else(|| "—".to_string()),
        ),
    ];

    let stage_label = deal.stage.to_string();
    let status_label = deal.status.to_string();

    view! {
        <aside class="card details-panel">
            <div class="card__header">
                <div>
                    <h2 class="card__title">{deal.account.clone()}</h2>
                    <div class="details-panel__badges">
                        <Badge variant=stage_variant(&deal.stage).to_string()>{stage_label}</Badge>
                        <Badge variant=status_variant(&deal.status).to_string()>{status_label}</Badge>
                    </div>
                </div>
                <button class="modal__close" title="Close" on:click=move |_| on_close.run(())>
                    {icon("x")}
                </button>
            </div>
            <dl class="details-list">
                {rows
                    .into_iter()
                    .map(|(label, value)| view! {
                        <dt class="details-list__label">{label}</dt>
                        <dd class="details-list__value">{value}</dd>
                    })
                    .collect_view()}
            </dl>
            {deal.status.needs_attention().then(|| view! {
                <div class="warning-box warning-box--warning">
                    <span class="warning-box__icon">{icon("alert-triangle")}</span>
                    <span class="warning-box__text">
                        "This deal needs attention. Contact your channel manager to resolve the status."
                    </span>
                </div>
            })}
        </aside>
    }
}
