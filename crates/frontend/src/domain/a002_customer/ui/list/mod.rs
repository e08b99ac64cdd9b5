pub mod state;

use self::state::create_state;
use super::health_variant;
use crate::domain::a002_customer::api;
use crate::shared::components::page_header::ErrorBox;
use crate::shared::components::stat_card::SummaryCards;
use crate::shared::components::table::{DataTable, FilterSelect};
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_date, format_opt_date, now};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::{handle_api_error, use_auth};
use contracts::domain::a002_customer::detail::RenewalUrgency;
use contracts::domain::a002_customer::summary::summary;
use contracts::domain::a002_customer::table::{
    filter_options, COLUMNS, FILTER_FIELDS, PRESETS, SEARCH_PLACEHOLDER,
};
use contracts::domain::a002_customer::Customer;
use contracts::shared::format::format_thousands;
use contracts::shared::table_view::{TableRecord, ViewContext};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

fn metric_icon(id: &str) -> &'static str {
    match id {
        "total_customers" => "customers",
        "upcoming_renewals" => "calendar",
        "at_risk" => "alert-triangle",
        "healthy" => "check-circle",
        _ => "activity",
    }
}

fn render_cell(customer: &Customer, key: &'static str) -> AnyView {
    match key {
        "name" => view! {
            <div>
                <strong>{customer.name.clone()}</strong>
                <div class="text-muted">{customer.customer_id.clone()}</div>
            </div>
        }
        .into_any(),
        "seats" => format!(
            "{} / {}",
            format_thousands(customer.seats_used as i64),
            format_thousands(customer.seats as i64)
        )
        .into_any(),
        "contractEnd" => {
            let class = customer
                .days_until_renewal(now())
                .map(|d| RenewalUrgency::from_days(d).css_class())
                .unwrap_or("");
            view! { <span class=class>{format_date(&customer.contract_end)}</span> }.into_any()
        }
        "adoptionHealth" => {
            let label = customer.adoption_health.display_label().to_string();
            view! {
                <Badge variant=health_variant(&customer.adoption_health).to_string()>
                    {label}
                </Badge>
            }
            .into_any()
        }
        "openIssues" => {
            let issues = customer.open_issues;
            view! {
                <span class:text-danger={move || issues > 0}>{issues}</span>
            }
            .into_any()
        }
        "lastActivity" => format_opt_date(customer.last_activity.as_deref()).into_any(),
        other => customer
            .field(other)
            .as_text()
            .map(|t| t.into_owned())
            .unwrap_or_else(|| "—".to_string())
            .into_any(),
    }
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();
    let state = create_state();
    let (customers, set_customers) = signal(Vec::<Customer>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_customers().await {
                Ok(items) => set_customers.set(items),
                Err(e) => {
                    log::error!("Failed to load customers: {}", e);
                    handle_api_error(&e, set_auth_state);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let ctx = Signal::derive(move || ViewContext::at(now()));
    let metrics = Memo::new(move |_| customers.with(|c| summary(c, now())));

    // Таблица отдаёт только идентификатор, переход делает страница
    let (open_id, set_open_id) = signal(None::<String>);
    Effect::new(move |_| {
        if let Some(customer_id) = open_id.get() {
            navigate(
                &format!("/customers/{}", urlencoding::encode(&customer_id)),
                Default::default(),
            );
        }
    });
    let open_customer = Callback::new(move |customer_id: String| set_open_id.set(Some(customer_id)));

    let filter_selects = FILTER_FIELDS
        .iter()
        .map(|&(field, label)| {
            let options = Signal::derive(move || customers.with(|c| filter_options(c, field)));
            view! { <FilterSelect label=label field=field options=options state=state /> }
        })
        .collect_view();

    view! {
        <PageFrame page_id="a002_customer--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Customers"</h1>
                    <Badge variant="primary".to_string()>
                        {move || customers.with(|c| c.len()).to_string()}
                    </Badge>
                </div>
            </div>

            <div class="page__content">
                <ErrorBox error=error />
                <SummaryCards metrics=metrics icon_for=metric_icon />

                <DataTable
                    records=customers
                    columns=COLUMNS
                    presets=PRESETS
                    state=state
                    ctx=ctx
                    render_cell=render_cell
                    search_placeholder=SEARCH_PLACEHOLDER
                    on_open=open_customer
                    loading=loading
                >
                    {filter_selects}
                </DataTable>
            </div>
        </PageFrame>
    }
}
