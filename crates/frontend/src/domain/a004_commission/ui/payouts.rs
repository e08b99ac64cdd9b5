use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_date, format_opt_date};
use crate::shared::icons::icon;
use contracts::domain::a004_commission::aggregate::{MonthlyEarning, Payout, PayoutSchedule, TaxDocument};
use contracts::domain::a004_commission::summary::bar_heights;
use contracts::shared::format::format_currency;
use leptos::prelude::*;

fn doc_status_variant(status: &str) -> &'static str {
    match status {
        "verified" | "active" | "completed" => "success",
        "pending" | "processing" => "warning",
        "expired" | "rejected" | "failed" => "error",
        _ => "neutral",
    }
}

/// Monthly earnings as CSS bars scaled to the best month.
#[component]
pub fn EarningsChart(months: Vec<MonthlyEarning>, currency: String) -> impl IntoView {
    let heights = bar_heights(&months);

    view! {
        <section class="card">
            <div class="card__header">
                {icon("trending-up")}
                <h2 class="card__title">"Monthly Earnings"</h2>
            </div>
            {if months.is_empty() {
                view! { <div class="text-muted">"No earnings yet"</div> }.into_any()
            } else {
                view! {
                    <div class="bar-chart">
                        {months.iter().zip(heights).map(|(m, h)| view! {
                            <div class="bar-chart__column" title=format_currency(m.amount, &currency)>
                                <div class="bar-chart__track">
                                    <div class="bar-chart__bar" style=format!("height: {:.1}%;", h)></div>
                                </div>
                                <div class="bar-chart__label">{m.month.clone()}</div>
                            </div>
                        }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}

#[component]
pub fn PayoutHistory(payouts: Vec<Payout>, currency: String) -> impl IntoView {
    view! {
        <section class="card">
            <div class="card__header">
                {icon("dollar-sign")}
                <h2 class="card__title">"Payout History"</h2>
            </div>
            <table class="simple-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th class="text-right">"Amount"</th>
                        <th>"Method"</th>
                        <th>"Reference"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {payouts.into_iter().map(|p| view! {
                        <tr title=format!("{} commission(s)", p.commissions_included.len())>
                            <td>{format_date(&p.date)}</td>
                            <td class="text-right">{format_currency(p.amount, &currency)}</td>
                            <td>{p.method}</td>
                            <td class="text-mono">{p.reference.unwrap_or_else(|| "—".to_string())}</td>
                            <td>
                                <Badge variant=doc_status_variant(&p.status).to_string()>{p.status.clone()}</Badge>
                            </td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[component]
pub fn PayoutScheduleCard(schedule: PayoutSchedule) -> impl IntoView {
    let rows: Vec<(&'static str, String)> = vec![
        ("Frequency", schedule.frequency),
        ("Payout day", schedule.payout_day),
        ("Minimum payout", format_currency(schedule.minimum_payout, &schedule.currency)),
        ("Method", schedule.method),
        ("Next payout", format_date(&schedule.next_payout_date)),
    ];

    view! {
        <section class="card">
            <div class="card__header">
                {icon("calendar")}
                <h2 class="card__title">"Payout Schedule"</h2>
            </div>
            <dl class="details-list">
                {rows.into_iter().map(|(label, value)| view! {
                    <dt class="details-list__label">{label}</dt>
                    <dd class="details-list__value">{value}</dd>
                }).collect_view()}
            </dl>
        </section>
    }
}

#[component]
pub fn TaxDocuments(documents: Vec<TaxDocument>) -> impl IntoView {
    view! {
        <section class="card">
            <div class="card__header">
                {icon("file-text")}
                <h2 class="card__title">"Tax Documents"</h2>
            </div>
            {if documents.is_empty() {
                view! { <div class="text-muted">"No tax documents on file"</div> }.into_any()
            } else {
                view! {
                    <table class="simple-table">
                        <thead>
                            <tr>
                                <th>"Document"</th>
                                <th>"Type"</th>
                                <th>"Uploaded"</th>
                                <th>"Expires"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {documents.into_iter().map(|d| view! {
                                <tr>
                                    <td>
                                        <strong>{d.name}</strong>
                                        {d.year.map(|y| view! { <span class="text-muted">{format!(" ({})", y)}</span> })}
                                    </td>
                                    <td>{d.doc_type}</td>
                                    <td>{format_date(&d.upload_date)}</td>
                                    <td>{format_opt_date(d.expiry_date.as_deref())}</td>
                                    <td>
                                        <Badge variant=doc_status_variant(&d.status).to_string()>{d.status.clone()}</Badge>
                                    </td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::doc_status_variant;

    #[test]
    fn document_status_badges() {
        assert_eq!(doc_status_variant("verified"), "success");
        assert_eq!(doc_status_variant("expired"), "error");
        assert_eq!(doc_status_variant("archived"), "neutral");
    }
}
