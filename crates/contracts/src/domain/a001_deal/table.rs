//! Deals table: columns, tabs and dropdown filters.

use crate::shared::table_view::dates::within_rest_of_month;
use crate::shared::table_view::filter::any_record;
use crate::shared::table_view::{ColumnDef, PresetDef, ViewContext, ALL};

use super::aggregate::{Deal, DealStage, DealStatus};

pub const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("dealId", "Deal ID").pinned(),
    ColumnDef::new("account", "Account").pinned(),
    ColumnDef::new("stage", "Stage"),
    ColumnDef::new("package", "Package"),
    ColumnDef::new("seats", "Seats").right(),
    ColumnDef::new("term", "Term"),
    ColumnDef::new("value", "Deal Value").right(),
    ColumnDef::new("closeDate", "Expected Close"),
    ColumnDef::new("status", "Approval Status"),
    ColumnDef::new("owner", "Owner"),
    ColumnDef::new("lastActivity", "Last Activity").hidden(),
    ColumnDef::new("region", "Region"),
    ColumnDef::new("contactEmail", "Contact").hidden(),
    ColumnDef::new("actions", "Actions").pinned().unsortable().right(),
];

/// Dropdown filters, in toolbar order: (field, label).
pub const FILTER_FIELDS: &[(&str, &str)] = &[
    ("stage", "Stage"),
    ("status", "Status"),
    ("owner", "Owner"),
    ("region", "Region"),
];

pub const SEARCH_PLACEHOLDER: &str = "Search by account, deal ID, or email...";

fn owned_by_current_user(deal: &Deal, ctx: &ViewContext) -> bool {
    ctx.current_owner
        .as_deref()
        .is_some_and(|owner| deal.owner == owner)
}

fn pending_approval(deal: &Deal, _: &ViewContext) -> bool {
    deal.status == DealStatus::PendingApproval
}

fn closing_this_month(deal: &Deal, ctx: &ViewContext) -> bool {
    within_rest_of_month(&deal.close_date, ctx.now)
}

fn closed(deal: &Deal, _: &ViewContext) -> bool {
    deal.stage.is_closed()
}

pub static PRESETS: &[PresetDef<Deal>] = &[
    PresetDef { key: ALL, label: "All Deals", predicate: any_record },
    PresetDef { key: "my-deals", label: "My Deals", predicate: owned_by_current_user },
    PresetDef { key: "pending", label: "Pending Approval", predicate: pending_approval },
    PresetDef { key: "closing-month", label: "Closing This Month", predicate: closing_this_month },
    PresetDef { key: "successful-unsuccessful", label: "Successful / Unsuccessful", predicate: closed },
];

/// Options for a dropdown: fixed enum labels for stage/status, observed
/// values for owner/region.
pub fn filter_options(records: &[Deal], field: &str) -> Vec<String> {
    match field {
        "stage" => DealStage::LABELS.iter().map(|s| s.to_string()).collect(),
        "status" => DealStatus::LABELS.iter().map(|s| s.to_string()).collect(),
        other => crate::shared::table_view::distinct_values(records, other),
    }
}

#[cfg(test)]
mod tests {
    use super::super::aggregate::fixtures::deal;
    use super::*;
    use crate::shared::table_view::summary::preset_counts;
    use crate::shared::table_view::{derive_view, TableState};
    use chrono::{TimeZone, Utc};

    fn ctx() -> ViewContext {
        ViewContext::at(Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap()).with_owner("John Smith")
    }

    fn records() -> Vec<Deal> {
        let mut a = deal(1, "Acme Corp", DealStage::Negotiation, DealStatus::PendingApproval, 50_000.0);
        a.close_date = "2025-01-31".to_string();
        let mut b = deal(2, "beta inc", DealStage::Qualified, DealStatus::Approved, 10_000.0);
        b.owner = "Maria Garcia".to_string();
        b.region = "EMEA".to_string();
        b.close_date = "2025-02-10".to_string();
        let c = deal(3, "Cobalt", DealStage::ClosedSuccessful, DealStatus::Approved, 80_000.0);
        let d = deal(4, "Delta", DealStage::ClosedUnsuccessful, DealStatus::AtRisk, 5_000.0);
        vec![a, b, c, d]
    }

    #[test]
    fn tab_predicates() {
        let counts = preset_counts(&records(), PRESETS, &ctx());
        assert_eq!(counts["all"], 4);
        assert_eq!(counts["my-deals"], 3);
        assert_eq!(counts["pending"], 1);
        // deals 3 and 4 close on 2025-01-25, deal 1 on the 31st
        assert_eq!(counts["closing-month"], 3);
        assert_eq!(counts["successful-unsuccessful"], 2);
    }

    #[test]
    fn my_deals_without_signed_in_owner_is_empty() {
        let ctx = ViewContext::at(Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap());
        let counts = preset_counts(&records(), PRESETS, &ctx);
        assert_eq!(counts["my-deals"], 0);
    }

    #[test]
    fn search_acme_any_case() {
        let records = records();
        for query in ["acme", "ACME", "Acme"] {
            let mut state = TableState::with_columns(COLUMNS);
            state.set_search(query);
            let page = derive_view(&records, &state, PRESETS, &ctx());
            let names: Vec<&str> = page.rows.iter().map(|d| d.account.as_str()).collect();
            assert_eq!(names, vec!["Acme Corp"]);
        }
    }

    #[test]
    fn hidden_columns_do_not_change_rows() {
        let records = records();
        let mut state = TableState::with_columns(COLUMNS);
        state.set_search("buyer2@");
        let before = derive_view(&records, &state, PRESETS, &ctx());
        // поиск по email работает, даже когда колонка скрыта
        assert_eq!(before.filtered_count, 1);

        state.toggle_column(COLUMNS, "contactEmail");
        state.toggle_column(COLUMNS, "owner");
        let after = derive_view(&records, &state, PRESETS, &ctx());
        assert_eq!(before.rows, after.rows);
    }

    #[test]
    fn dropdown_options() {
        let records = records();
        assert_eq!(filter_options(&records, "stage").len(), 8);
        assert_eq!(filter_options(&records, "owner"), vec!["John Smith", "Maria Garcia"]);
        assert_eq!(filter_options(&records, "region"), vec!["North America", "EMEA"]);
    }
}
