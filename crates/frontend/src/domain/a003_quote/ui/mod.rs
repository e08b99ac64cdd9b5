mod history;
mod pricing;
mod request;

use self::history::QuoteHistory;
use self::pricing::{DiscountRulesSection, PricingSection};
use self::request::QuoteRequestForm;
use crate::domain::a003_quote::api;
use crate::shared::components::page_header::{ErrorBox, NoticeBox};
use crate::shared::components::stat_card::SummaryCards;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_CUSTOM};
use crate::system::auth::context::{handle_api_error, use_auth};
use contracts::domain::a003_quote::summary::summary;
use contracts::domain::a003_quote::{QuoteStatus, QuotesData};
use leptos::prelude::*;
use leptos::task::spawn_local;

pub fn quote_status_variant(status: &QuoteStatus) -> &'static str {
    match status {
        QuoteStatus::Approved | QuoteStatus::Accepted => "success",
        QuoteStatus::PendingApproval => "warning",
        QuoteStatus::Sent => "primary",
        QuoteStatus::Rejected | QuoteStatus::Expired => "error",
        _ => "neutral",
    }
}

fn metric_icon(id: &str) -> &'static str {
    match id {
        "total" => "file-text",
        "pending" => "clock",
        "approved" => "check-circle",
        "sent" => "mail",
        _ => "activity",
    }
}

/// Quotes & Pricing: pricing overview, discount rules, request form and
/// quote history on one page.
#[component]
pub fn QuotesPage() -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let (data, set_data) = signal(None::<QuotesData>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_quotes().await {
                Ok(d) => set_data.set(Some(d)),
                Err(e) => {
                    log::error!("Failed to load quotes: {}", e);
                    handle_api_error(&e, set_auth_state);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let quotes = Signal::derive(move || data.with(|d| d.as_ref().map(|d| d.quotes.clone()).unwrap_or_default()));
    let metrics = Memo::new(move |_| quotes.with(|q| summary(q)));

    view! {
        <PageFrame page_id="a003_quote--page" category=PAGE_CAT_CUSTOM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Quotes & Pricing"</h1>
                </div>
            </div>

            <div class="page__content">
                <ErrorBox error=error />
                <NoticeBox message=notice />

                <SummaryCards metrics=metrics icon_for=metric_icon />

                {move || data.get().map(|d| view! {
                    <PricingSection pricing=d.pricing.clone() />
                    <DiscountRulesSection rules=d.discount_rules.clone() />
                })}

                <QuoteRequestForm on_submitted=Callback::new(move |message: String| set_notice.set(Some(message))) />

                <QuoteHistory quotes=quotes loading=loading />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_is_neutral() {
        assert_eq!(quote_status_variant(&QuoteStatus::PendingApproval), "warning");
        assert_eq!(quote_status_variant(&QuoteStatus::Other("on_hold".into())), "neutral");
    }
}
