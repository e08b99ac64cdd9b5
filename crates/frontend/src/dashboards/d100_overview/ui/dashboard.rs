use super::trend::PipelineTrendCard;
use crate::dashboards::d100_overview::api;
use crate::domain::a001_deal::ui::status_variant;
use crate::shared::components::page_header::ErrorBox;
use crate::shared::components::stat_card::SummaryCards;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_opt_date, now};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::system::auth::context::{handle_api_error, use_auth};
use contracts::domain::a001_deal::summary::dashboard_summary;
use contracts::domain::a001_deal::{Deal, PipelinePoint};
use contracts::domain::a006_announcement::Announcement;
use contracts::shared::format::format_usd;
use contracts::shared::table_view::{derive_view, SortState, TableState, ViewContext};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

const RECENT_DEALS: usize = 5;

fn metric_icon(id: &str) -> &'static str {
    match id {
        "pipeline_value" => "trending-up",
        "avg_deal_size" => "dollar-sign",
        "avg_seats" => "customers",
        "win_rate" => "percent",
        _ => "activity",
    }
}

/// Latest activity first, deals without activity last.
fn recent_deals(deals: &[Deal], ctx: &ViewContext) -> Vec<Deal> {
    let state = TableState::default().with_sort(SortState::descending("lastActivity"));
    let mut page = derive_view(deals, &state, &[], ctx);
    page.rows.truncate(RECENT_DEALS);
    page.rows
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let (deals, set_deals) = signal(Vec::<Deal>::new());
    let (pinned, set_pinned) = signal(Vec::<Announcement>::new());
    let (trend, set_trend) = signal(Vec::<PipelinePoint>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_deals().await {
                Ok(items) => set_deals.set(items),
                Err(e) => {
                    handle_api_error(&e, set_auth_state);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
        spawn_local(async move {
            match api::get_pipeline_trend().await {
                Ok(points) => set_trend.set(points),
                Err(e) => log::warn!("Failed to load pipeline trend: {}", e),
            }
        });
        spawn_local(async move {
            match api::get_announcements().await {
                Ok(data) => set_pinned.set(data.pinned_announcements),
                Err(e) => log::warn!("Failed to load announcements: {}", e),
            }
        });
    });

    let metrics = Memo::new(move |_| deals.with(|d| dashboard_summary(d)));
    let recent = Memo::new(move |_| deals.with(|d| recent_deals(d, &ViewContext::at(now()))));

    view! {
        <PageFrame page_id="d100_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
                <div class="page__header-right">
                    <A href="/deals" attr:class="button button--primary">
                        {icon("plus")}
                        "Register Deal"
                    </A>
                </div>
            </div>

            <div class="page__content">
                <ErrorBox error=error />

                <SummaryCards metrics=metrics icon_for=metric_icon />

                <PipelineTrendCard points=trend />

                <Show when=move || !pinned.get().is_empty()>
                    <div class="card">
                        <div class="card__header">
                            {icon("pin")}
                            <h2 class="card__title">"Pinned notices"</h2>
                        </div>
                        <ul class="notice-list">
                            {move || pinned.get().into_iter().map(|a| view! {
                                <li class="notice-list__item">
                                    <A href="/announcements">{a.title}</A>
                                    <span class="text-muted">{a.summary}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                </Show>

                <div class="card">
                    <div class="card__header">
                        <h2 class="card__title">"Recent deals"</h2>
                        <A href="/deals" attr:class="card__link">"View all"</A>
                    </div>
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <div class="text-muted">"Loading..."</div> }
                    >
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Account"</TableHeaderCell>
                                    <TableHeaderCell>"Stage"</TableHeaderCell>
                                    <TableHeaderCell>"Value"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                    <TableHeaderCell>"Last Activity"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || recent.get()
                                    key=|deal| deal.deal_id.clone()
                                    children=|deal| view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <strong>{deal.account.clone()}</strong>
                                                    <div class="text-muted">{deal.deal_id.clone()}</div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>{deal.stage.to_string()}</TableCell>
                                            <TableCell>{format_usd(deal.value)}</TableCell>
                                            <TableCell>
                                                <Badge variant=status_variant(&deal.status).to_string()>
                                                    {deal.status.to_string()}
                                                </Badge>
                                            </TableCell>
                                            <TableCell>{format_opt_date(deal.last_activity.as_deref())}</TableCell>
                                        </TableRow>
                                    }
                                />
                            </TableBody>
                        </Table>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_deal::{DealStage, DealStatus};

    fn deal(id: &str, last_activity: Option<&str>) -> Deal {
        Deal {
            id: 0,
            deal_id: id.to_string(),
            account: id.to_string(),
            stage: DealStage::Qualified,
            value: 1000.0,
            close_date: "2025-06-01".to_string(),
            owner: "John Smith".to_string(),
            region: "EMEA".to_string(),
            status: DealStatus::Approved,
            package: "Business".to_string(),
            seats: "10".to_string(),
            term: "Yearly".to_string(),
            last_activity: last_activity.map(str::to_string),
            contact_email: None,
        }
    }

    #[test]
    fn recent_deals_newest_first_and_capped() {
        let mut deals: Vec<Deal> = (1..=7)
            .map(|d| deal(&format!("D-{}", d), Some(&format!("2025-01-0{}", d))))
            .collect();
        deals.push(deal("D-none", None));
        let recent = recent_deals(&deals, &ViewContext::at(chrono::Utc::now()));
        assert_eq!(recent.len(), RECENT_DEALS);
        assert_eq!(recent[0].deal_id, "D-7");
        assert!(recent.iter().all(|d| d.deal_id != "D-none"));
    }
}
