pub mod state;

use self::state::create_state;
use super::details::DealDetailsPanel;
use super::register::DealRegistrationForm;
use super::{stage_variant, status_variant};
use crate::domain::a001_deal::api;
use crate::shared::components::page_header::{ErrorBox, NoticeBox};
use crate::shared::components::stat_card::SummaryCards;
use crate::shared::components::table::{DataTable, FilterSelect};
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_date, format_opt_date, now};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::{current_user_name, handle_api_error, use_auth};
use contracts::domain::a001_deal::summary::summary;
use contracts::domain::a001_deal::table::{
    filter_options, COLUMNS, FILTER_FIELDS, PRESETS, SEARCH_PLACEHOLDER,
};
use contracts::domain::a001_deal::Deal;
use contracts::shared::format::format_usd;
use contracts::shared::table_view::{TableRecord, ViewContext};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn metric_icon(id: &str) -> &'static str {
    match id {
        "active_deals" => "briefcase",
        "pipeline_value" => "dollar-sign",
        "awaiting_approval" => "clock",
        "at_risk" => "alert-triangle",
        _ => "activity",
    }
}

fn render_cell(deal: &Deal, key: &'static str) -> AnyView {
    match key {
        "dealId" => view! { <span class="text-muted text-mono">{deal.deal_id.clone()}</span> }.into_any(),
        "account" => view! { <strong>{deal.account.clone()}</strong> }.into_any(),
        "stage" => {
            let label = deal.stage.to_string();
            view! {
                <Badge variant=stage_variant(&deal.stage).to_string()>{label}</Badge>
            }
            .into_any()
        }
        "status" => {
            let label = deal.status.to_string();
            view! {
                <Badge variant=status_variant(&deal.status).to_string()>{label}</Badge>
            }
            .into_any()
        }
        "value" => format_usd(deal.value).into_any(),
        "closeDate" => format_date(&deal.close_date).into_any(),
        "lastActivity" => format_opt_date(deal.last_activity.as_deref()).into_any(),
        "contactEmail" => deal.contact_email.clone().unwrap_or_else(|| "—".to_string()).into_any(),
        other => deal
            .field(other)
            .as_text()
            .map(|t| t.into_owned())
            .unwrap_or_else(|| "—".to_string())
            .into_any(),
    }
}

#[component]
pub fn DealList() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let state = create_state();
    let (deals, set_deals) = signal(Vec::<Deal>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);
    let (selected_id, set_selected_id) = signal(None::<String>);
    let show_register = RwSignal::new(false);

    let load_deals = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::get_deals().await {
                Ok(items) => {
                    set_deals.set(items);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load deals: {}", e);
                    handle_api_error(&e, set_auth_state);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_deals());

    let owner = current_user_name(auth_state);
    let ctx = Signal::derive(move || {
        let ctx = ViewContext::at(now());
        match owner.get() {
            Some(name) => ctx.with_owner(name),
            None => ctx,
        }
    });

    // Карточки считаются по всему массиву, фильтры на них не влияют
    let metrics = Memo::new(move |_| deals.with(|d| summary(d)));

    let selected_deal = Signal::derive(move || {
        let id = selected_id.get()?;
        deals.with(|d| d.iter().find(|deal| deal.record_id() == id).cloned())
    });

    let filter_selects = move || {
        FILTER_FIELDS
            .iter()
            .map(|&(field, label)| {
                let options = Signal::derive(move || {
                    deals.with(|d| {
                        filter_options(d, field)
                            .into_iter()
                            .map(|v| (v.clone(), v))
                            .collect::<Vec<_>>()
                    })
                });
                view! { <FilterSelect label=label field=field options=options state=state /> }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="a001_deal--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Deals"</h1>
                    <Badge variant="primary".to_string()>
                        {move || deals.with(|d| d.len()).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <a class="button button--secondary" href=api::export_csv_url() download="deals.csv">
                        {icon("download")}
                        " Export CSV"
                    </a>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_deals()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| show_register.set(true)
                    >
                        {icon("plus")}
                        " Register Deal"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBox error=error />
                <NoticeBox message=notice />

                <SummaryCards metrics=metrics icon_for=metric_icon />

                <div class="page__split">
                    <DataTable
                        records=deals
                        columns=COLUMNS
                        presets=PRESETS
                        state=state
                        ctx=ctx
                        render_cell=render_cell
                        search_placeholder=SEARCH_PLACEHOLDER
                        on_open=Callback::new(move |id: String| set_selected_id.set(Some(id)))
                        loading=loading
                    >
                        {filter_selects()}
                    </DataTable>

                    {move || selected_deal.get().map(|deal| view! {
                        <DealDetailsPanel
                            deal=deal
                            on_close=Callback::new(move |_| set_selected_id.set(None))
                        />
                    })}
                </div>
            </div>

            <Show when=move || show_register.get()>
                <DealRegistrationForm
                    on_close=Callback::new(move |_| show_register.set(false))
                    on_submitted=Callback::new(move |message: String| {
                        show_register.set(false);
                        set_notice.set(Some(message));
                    })
                />
            </Show>
        </PageFrame>
    }
}
