mod commissions;
mod payouts;

use self::commissions::CommissionsTable;
use self::payouts::{EarningsChart, PayoutHistory, PayoutScheduleCard, TaxDocuments};
use crate::domain::a004_commission::api;
use crate::shared::components::page_header::ErrorBox;
use crate::shared::components::stat_card::SummaryCards;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_CUSTOM};
use crate::system::auth::context::{handle_api_error, use_auth};
use contracts::domain::a004_commission::summary::summary;
use contracts::domain::a004_commission::{CommissionStatus, RevenueData};
use leptos::prelude::*;
use leptos::task::spawn_local;

pub fn commission_status_variant(status: &CommissionStatus) -> &'static str {
    match status {
        CommissionStatus::Paid => "success",
        CommissionStatus::Approved | CommissionStatus::Scheduled => "primary",
        CommissionStatus::Pending => "warning",
        CommissionStatus::Other(_) => "neutral",
    }
}

fn metric_icon(id: &str) -> &'static str {
    match id {
        "earned_this_month" => "dollar-sign",
        "pending_commissions" => "clock",
        "paid_to_date" => "check-circle",
        "forecasted" => "trending-up",
        _ => "activity",
    }
}

#[component]
pub fn RevenuePage() -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let (data, set_data) = signal(None::<RevenueData>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_revenue().await {
                Ok(d) => set_data.set(Some(d)),
                Err(e) => {
                    log::error!("Failed to load revenue: {}", e);
                    handle_api_error(&e, set_auth_state);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let metrics = Memo::new(move |_| data.with(|d| d.as_ref().map(summary).unwrap_or_default()));
    let commissions = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| d.commissions.clone()).unwrap_or_default())
    });

    view! {
        <PageFrame page_id="a004_commission--page" category=PAGE_CAT_CUSTOM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Revenue & Commissions"</h1>
                </div>
            </div>

            <div class="page__content">
                <ErrorBox error=error />
                <SummaryCards metrics=metrics icon_for=metric_icon />

                {move || data.get().map(|d| view! {
                    <EarningsChart months=d.monthly_earnings.clone() currency=d.summary.currency.clone() />
                })}

                <CommissionsTable commissions=commissions loading=loading />

                {move || data.get().map(|d| view! {
                    <div class="detail-grid">
                        <PayoutHistory payouts=d.payouts.clone() currency=d.summary.currency.clone() />
                        <PayoutScheduleCard schedule=d.payout_schedule.clone() />
                    </div>
                    <TaxDocuments documents=d.tax_documents.clone() />
                })}
            </div>
        </PageFrame>
    }
}
