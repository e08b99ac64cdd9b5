mod knowledge_base;
mod new_ticket;
mod sla;
mod tickets;

use self::knowledge_base::KnowledgeBase;
use self::new_ticket::NewTicketForm;
use self::sla::SlaSection;
use self::tickets::TicketsTable;
use crate::domain::a005_ticket::api;
use crate::shared::components::page_header::{ErrorBox, NoticeBox};
use crate::shared::components::stat_card::SummaryCards;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_CUSTOM};
use crate::system::auth::context::{handle_api_error, use_auth};
use contracts::domain::a005_ticket::summary::summary;
use contracts::domain::a005_ticket::SupportData;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn metric_icon(id: &str) -> &'static str {
    match id {
        "open" => "life-buoy",
        "active" => "clock",
        "resolved" => "check-circle",
        _ => "activity",
    }
}

#[component]
pub fn SupportPage() -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let (data, set_data) = signal(None::<SupportData>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);
    let show_new_ticket = RwSignal::new(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_support().await {
                Ok(d) => set_data.set(Some(d)),
                Err(e) => {
                    log::error!("Failed to load support data: {}", e);
                    handle_api_error(&e, set_auth_state);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let tickets = Signal::derive(move || data.with(|d| d.as_ref().map(|d| d.tickets.clone()).unwrap_or_default()));
    let articles = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| d.knowledge_base.clone()).unwrap_or_default())
    });
    let categories = Signal::derive(move || {
        data.with(|d| {
            d.as_ref()
                .map(|d| d.categories.iter().map(|c| (c.id.clone(), c.name.clone())).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });
    let metrics = Memo::new(move |_| tickets.with(|t| summary(t)));

    view! {
        <PageFrame page_id="a005_ticket--page" category=PAGE_CAT_CUSTOM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Support"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| show_new_ticket.set(true)>
                        {icon("plus")}
                        " New Ticket"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBox error=error />
                <NoticeBox message=notice />

                <SummaryCards metrics=metrics icon_for=metric_icon />

                <TicketsTable tickets=tickets loading=loading />

                {move || data.get().map(|d| view! { <SlaSection sla=d.sla.clone() /> })}

                <KnowledgeBase articles=articles />
            </div>

            <Show when=move || show_new_ticket.get()>
                <NewTicketForm
                    categories=categories
                    on_close=Callback::new(move |_| show_new_ticket.set(false))
                    on_submitted=Callback::new(move |message: String| {
                        show_new_ticket.set(false);
                        set_notice.set(Some(message));
                    })
                />
            </Show>
        </PageFrame>
    }
}
