use super::super::{health_variant, trend_icon};
use crate::domain::a002_customer::api;
use crate::shared::components::page_header::ErrorBox;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_date, format_opt_date, now};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::system::auth::context::{handle_api_error, use_auth};
use contracts::domain::a002_customer::detail::{RenewalUrgency, FEATURES};
use contracts::domain::a002_customer::{Contact, Customer};
use contracts::shared::format::format_thousands;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

/// "in N days", "today" or "N days ago".
fn renewal_countdown(days: i64) -> String {
    match days {
        0 => "Renews today".to_string(),
        1 => "1 day until renewal".to_string(),
        d if d > 1 => format!("{} days until renewal", d),
        -1 => "Expired 1 day ago".to_string(),
        d => format!("Expired {} days ago", -d),
    }
}

#[component]
fn ContactCard(title: &'static str, contact: Option<Contact>) -> impl IntoView {
    view! {
        <div class="contact-card">
            <div class="contact-card__title">{title}</div>
            {match contact {
                Some(c) => view! {
                    <div class="contact-card__name">{icon("user")}{c.name}</div>
                    {c.role.map(|r| view! { <div class="text-muted">{r}</div> })}
                    <a class="contact-card__line" href=format!("mailto:{}", c.email)>
                        {icon("mail")}{c.email.clone()}
                    </a>
                    {c.phone.map(|p| view! {
                        <div class="contact-card__line">{icon("phone")}{p}</div>
                    })}
                }
                .into_any(),
                None => view! { <div class="text-muted">"Not assigned"</div> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProgressBar(percent: u32, #[prop(optional)] class: &'static str) -> impl IntoView {
    let width = percent.min(100);
    view! {
        <div class=format!("progress {}", class)>
            <div class="progress__bar" style=format!("width: {}%;", width)></div>
        </div>
    }
}

#[component]
fn CustomerBody(customer: Customer) -> impl IntoView {
    let now = now();
    let days = customer.days_until_renewal(now);
    let urgency_class = days
        .map(|d| RenewalUrgency::from_days(d).css_class())
        .unwrap_or("text-muted");
    let countdown = days
        .map(renewal_countdown)
        .unwrap_or_else(|| "Renewal date unknown".to_string());
    let utilization = customer.seat_utilization();
    let progress = customer.contract_progress(now);
    let reminder = customer.renewal_reminder_due(now);

    let info: Vec<(&'static str, String)> = vec![
        ("Customer ID", customer.customer_id.clone()),
        ("Domain", customer.domain.clone()),
        ("Industry", customer.industry.clone()),
        ("Region", customer.region.clone()),
        ("Owner", customer.owner.clone()),
        ("Renewal type", customer.renewal_type.clone()),
        ("Contract start", format_date(&customer.contract_start)),
        ("Contract end", format_date(&customer.contract_end)),
        ("Last activity", format_opt_date(customer.last_activity.as_deref())),
    ];

    let features = FEATURES
        .iter()
        .map(|f| (*f, customer.has_feature(f)))
        .collect::<Vec<_>>();

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <A href="/customers" attr:class="button button--ghost button--small">
                    {icon("chevron-left")}
                    "Customers"
                </A>
                <h1 class="page__title">{customer.name.clone()}</h1>
                <Badge variant=health_variant(&customer.adoption_health).to_string()>
                    {customer.adoption_health.display_label().to_string()}
                </Badge>
                <Badge variant="primary".to_string()>{customer.plan.clone()}</Badge>
            </div>
        </div>

        <div class="page__content">
            {reminder.then(|| view! {
                <div class="warning-box warning-box--warning">
                    <span class="warning-box__icon">{icon("clock")}</span>
                    <span class="warning-box__text">
                        "Renewal is coming up. Reach out to the customer to confirm the renewal plan."
                    </span>
                </div>
            })}

            <div class="detail-grid">
                <div class="card">
                    <div class="card__header">
                        {icon("calendar")}
                        <h2 class="card__title">"Renewal"</h2>
                    </div>
                    <div class=format!("detail-metric {}", urgency_class)>{countdown}</div>
                    <div class="text-muted">{format!("Contract ends {}", format_date(&customer.contract_end))}</div>
                    {progress.map(|p| view! {
                        <div class="detail-metric__label">{format!("Contract term {}% elapsed", p)}</div>
                        <ProgressBar percent=p />
                    })}
                </div>

                <div class="card">
                    <div class="card__header">
                        {icon("customers")}
                        <h2 class="card__title">"Seats"</h2>
                    </div>
                    <div class="detail-metric">
                        {format!(
                            "{} of {} seats used",
                            format_thousands(customer.seats_used as i64),
                            format_thousands(customer.seats as i64)
                        )}
                    </div>
                    {match utilization {
                        Some(u) => view! {
                            <div class="detail-metric__label">{format!("{}% utilization", u)}</div>
                            <ProgressBar percent=u class={if u >= 90 { "progress--warning" } else { "" }} />
                        }
                        .into_any(),
                        None => view! { <div class="text-muted">"No seats under contract"</div> }.into_any(),
                    }}
                    <div class="detail-metric__label">
                        {icon(trend_icon(&customer.active_users_trend))}
                        {format!("Active users trend: {}", customer.active_users_trend)}
                    </div>
                </div>

                <div class="card">
                    <div class="card__header">
                        {icon("activity")}
                        <h2 class="card__title">"Adoption"</h2>
                    </div>
                    <ul class="feature-list">
                        {features.into_iter().map(|(feature, enabled)| view! {
                            <li class="feature-list__item" class:feature-list__item--off={!enabled}>
                                {icon(if enabled { "check-circle" } else { "x" })}
                                {feature}
                            </li>
                        }).collect_view()}
                    </ul>
                    <div class="detail-metric__label">
                        {format!("{} open issue(s)", customer.open_issues)}
                    </div>
                </div>
            </div>

            <div class="detail-grid">
                <div class="card">
                    <div class="card__header">
                        {icon("building")}
                        <h2 class="card__title">"Account"</h2>
                    </div>
                    <dl class="details-list">
                        {info.into_iter().map(|(label, value)| view! {
                            <dt class="details-list__label">{label}</dt>
                            <dd class="details-list__value">{value}</dd>
                        }).collect_view()}
                    </dl>
                </div>

                <div class="card">
                    <div class="card__header">
                        {icon("user")}
                        <h2 class="card__title">"Contacts"</h2>
                    </div>
                    <ContactCard title="Admin" contact=customer.admin_contact.clone() />
                    <ContactCard title="Billing" contact=customer.billing_contact.clone() />
                    <ContactCard title="Champion" contact=customer.champion.clone() />
                </div>

                <div class="card">
                    <div class="card__header">
                        {icon("alert-triangle")}
                        <h2 class="card__title">"Risks & opportunities"</h2>
                    </div>
                    <h3 class="card__subtitle">"Risk flags"</h3>
                    {if customer.risk_flags.is_empty() {
                        view! { <div class="text-muted">"No risk flags"</div> }.into_any()
                    } else {
                        view! {
                            <ul class="flag-list flag-list--risk">
                                {customer.risk_flags.iter().map(|f| view! { <li>{f.clone()}</li> }).collect_view()}
                            </ul>
                        }
                        .into_any()
                    }}
                    <h3 class="card__subtitle">"Expansion opportunities"</h3>
                    {if customer.expansion_opportunities.is_empty() {
                        view! { <div class="text-muted">"None identified"</div> }.into_any()
                    } else {
                        view! {
                            <ul class="flag-list flag-list--opportunity">
                                {customer
                                    .expansion_opportunities
                                    .iter()
                                    .map(|f| view! { <li>{f.clone()}</li> })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any()
                    }}
                </div>
            </div>
        </div>
    }
}

/// /customers/:customer_id
#[component]
pub fn CustomerDetails() -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let params = use_params_map();
    let customer_id = move || params.with(|p| p.get("customer_id").unwrap_or_default());

    let (customer, set_customer) = signal(None::<Customer>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let id = customer_id();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::get_customer(&id).await {
                Ok(c) => set_customer.set(Some(c)),
                Err(e) => {
                    handle_api_error(&e, set_auth_state);
                    set_customer.set(None);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <PageFrame page_id="a002_customer--detail" category=PAGE_CAT_DETAIL>
            <ErrorBox error=error />
            {move || {
                if loading.get() {
                    view! { <div class="page-loading">"Loading..."</div> }.into_any()
                } else {
                    match customer.get() {
                        Some(c) => view! { <CustomerBody customer=c /> }.into_any(),
                        None => view! {
                            <div class="empty-state">
                                <div class="empty-state__message">"Customer not found."</div>
                                <A href="/customers">"Back to customers"</A>
                            </div>
                        }
                        .into_any(),
                    }
                }
            }}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::renewal_countdown;

    #[test]
    fn countdown_wording() {
        assert_eq!(renewal_countdown(0), "Renews today");
        assert_eq!(renewal_countdown(45), "45 days until renewal");
        assert_eq!(renewal_countdown(-3), "Expired 3 days ago");
    }
}
