use crate::shared::components::table::{DataTable, SegmentSelect};
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_date, format_datetime, now};
use crate::shared::icons::icon;
use contracts::domain::a005_ticket::table::{COLUMNS, PRESETS, SEARCH_PLACEHOLDER};
use contracts::domain::a005_ticket::{Ticket, TicketStatus};
use contracts::shared::table_view::{TableRecord, TableState, ViewContext};
use leptos::prelude::*;

pub fn ticket_status_variant(status: &TicketStatus) -> &'static str {
    match status {
        TicketStatus::Open => "primary",
        TicketStatus::InProgress => "warning",
        TicketStatus::Waiting => "neutral",
        TicketStatus::Resolved => "success",
        TicketStatus::Other(_) => "neutral",
    }
}

fn render_cell(t: &Ticket, key: &'static str) -> AnyView {
    match key {
        "id" => view! { <span class="text-mono">{t.id.clone()}</span> }.into_any(),
        "subject" => view! { <strong>{t.subject.clone()}</strong> }.into_any(),
        "priority" => {
            let variant = if t.priority == "high" { "error" } else { "neutral" };
            let priority = t.priority.clone();
            view! { <Badge variant=variant.to_string()>{priority}</Badge> }.into_any()
        }
        "status" => {
            let label = t.status.display_label().to_string();
            view! {
                <Badge variant=ticket_status_variant(&t.status).to_string()>
                    {label}
                </Badge>
            }
            .into_any()
        }
        "lastUpdated" => format_date(&t.last_updated).into_any(),
        "createdDate" => format_date(&t.created_date).into_any(),
        other => t
            .field(other)
            .as_text()
            .map(|v| v.into_owned())
            .unwrap_or_else(|| "—".to_string())
            .into_any(),
    }
}

/// History of one ticket, shown under the table after "View".
#[component]
fn TicketUpdates(ticket: Ticket, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="ticket-updates">
            <div class="ticket-updates__header">
                <h3 class="card__subtitle">{format!("{} · {}", ticket.id, ticket.subject)}</h3>
                <button class="button button--ghost button--small" on:click=move |_| on_close.run(())>
                    {icon("x")}
                </button>
            </div>
            <p>{ticket.description.clone()}</p>
            {ticket.assigned_to.clone().map(|a| view! {
                <div class="text-muted">{format!("Assigned to {}", a)}</div>
            })}
            {if ticket.updates.is_empty() {
                view! { <div class="text-muted">"No updates yet"</div> }.into_any()
            } else {
                view! {
                    <ol class="timeline">
                        {ticket.updates.into_iter().map(|u| view! {
                            <li class="timeline__item">
                                <div class="timeline__meta">
                                    <strong>{u.author}</strong>
                                    " · "
                                    {format_datetime(&u.date)}
                                </div>
                                <div class="timeline__text">{u.message}</div>
                            </li>
                        }).collect_view()}
                    </ol>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
pub fn TicketsTable(
    #[prop(into)] tickets: Signal<Vec<Ticket>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let state = RwSignal::new(TableState::with_columns(COLUMNS));
    let ctx = Signal::derive(move || ViewContext::at(now()));
    let (expanded_id, set_expanded_id) = signal(None::<String>);

    // повторный клик по той же строке сворачивает историю
    let toggle = Callback::new(move |id: String| {
        set_expanded_id.update(|current| {
            *current = if current.as_deref() == Some(id.as_str()) { None } else { Some(id) };
        })
    });

    let status_options: Vec<(&'static str, &'static str)> =
        PRESETS.iter().map(|p| (p.key, p.label)).collect();

    let expanded = Signal::derive(move || {
        let id = expanded_id.get()?;
        tickets.with(|t| t.iter().find(|ticket| ticket.record_id() == id).cloned())
    });

    view! {
        <section class="card">
            <div class="card__header">
                {icon("life-buoy")}
                <h2 class="card__title">"Tickets"</h2>
            </div>
            <DataTable
                records=tickets
                columns=COLUMNS
                presets=PRESETS
                hide_tabs=true
                state=state
                ctx=ctx
                render_cell=render_cell
                search_placeholder=SEARCH_PLACEHOLDER
                on_open=toggle
                loading=loading
            >
                <SegmentSelect label="Status" options=status_options state=state />
            </DataTable>
            {move || expanded.get().map(|ticket| view! {
                <TicketUpdates ticket=ticket on_close=Callback::new(move |_| set_expanded_id.set(None)) />
            })}
        </section>
    }
}
