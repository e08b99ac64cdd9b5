//! Ticket list: the status selector is a preset set, so "active" can span
//! several statuses.

use crate::shared::table_view::filter::any_record;
use crate::shared::table_view::{ColumnDef, PresetDef, ViewContext, ALL};

use super::aggregate::{Ticket, TicketStatus};

pub const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "Ticket").pinned(),
    ColumnDef::new("subject", "Subject").pinned(),
    ColumnDef::new("category", "Category"),
    ColumnDef::new("priority", "Priority"),
    ColumnDef::new("status", "Status"),
    ColumnDef::new("relatedCustomer", "Customer"),
    ColumnDef::new("lastUpdated", "Last Updated"),
    ColumnDef::new("createdDate", "Created").hidden(),
    ColumnDef::new("assignedTo", "Assigned To").hidden(),
    ColumnDef::new("actions", "Actions").pinned().unsortable().right(),
];

pub const SEARCH_PLACEHOLDER: &str = "Search tickets...";

fn active(t: &Ticket, _: &ViewContext) -> bool {
    t.status.is_active()
}

fn open(t: &Ticket, _: &ViewContext) -> bool {
    t.status == TicketStatus::Open
}

fn in_progress(t: &Ticket, _: &ViewContext) -> bool {
    t.status == TicketStatus::InProgress
}

fn waiting(t: &Ticket, _: &ViewContext) -> bool {
    t.status == TicketStatus::Waiting
}

fn resolved(t: &Ticket, _: &ViewContext) -> bool {
    t.status == TicketStatus::Resolved
}

pub static PRESETS: &[PresetDef<Ticket>] = &[
    PresetDef { key: ALL, label: "All Tickets", predicate: any_record },
    PresetDef { key: "active", label: "Active", predicate: active },
    PresetDef { key: "open", label: "Open", predicate: open },
    PresetDef { key: "in_progress", label: "In Progress", predicate: in_progress },
    PresetDef { key: "waiting", label: "Waiting", predicate: waiting },
    PresetDef { key: "resolved", label: "Resolved", predicate: resolved },
];

#[cfg(test)]
mod tests {
    use super::super::aggregate::fixtures::ticket;
    use super::*;
    use crate::shared::table_view::summary::preset_counts;
    use crate::shared::table_view::{derive_view, TableState};
    use chrono::{TimeZone, Utc};

    fn tickets() -> Vec<Ticket> {
        vec![
            ticket("T-1", "SSO login fails", TicketStatus::Open, Some("Acme Corp")),
            ticket("T-2", "Invoice copy", TicketStatus::Resolved, None),
            ticket("T-3", "API limits", TicketStatus::Waiting, Some("Beta Inc")),
            ticket("T-4", "Seat transfer", TicketStatus::InProgress, None),
        ]
    }

    #[test]
    fn rows_expose_an_open_action() {
        let actions = COLUMNS.iter().find(|c| c.key == "actions");
        assert!(actions.is_some_and(|c| !c.sortable && !c.hideable && c.visible_by_default));
    }

    #[test]
    fn status_segments() {
        let ctx = ViewContext::at(Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap());
        let counts = preset_counts(&tickets(), PRESETS, &ctx);
        assert_eq!(counts["active"], 3);
        assert_eq!(counts["resolved"], 1);
        assert_eq!(counts["waiting"], 1);
    }

    #[test]
    fn segment_keeps_search_and_customer_is_optional() {
        let ctx = ViewContext::at(Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap());
        let tickets = tickets();
        let mut state = TableState::with_columns(COLUMNS);
        state.set_search("beta");
        state.set_segment("active");
        assert_eq!(state.filters.search, "beta");

        let page = derive_view(&tickets, &state, PRESETS, &ctx);
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].id, "T-3");

        // тикет без клиента не совпадает с фильтром по клиенту
        state.set_search("");
        state.set_categorical("relatedCustomer", "Acme Corp");
        let page = derive_view(&tickets, &state, PRESETS, &ctx);
        assert_eq!(page.filtered_count, 1);
    }
}
