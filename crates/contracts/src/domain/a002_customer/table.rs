//! Customers table: columns, renewal tabs and dropdown filters.

use crate::shared::table_view::dates::within_next_days;
use crate::shared::table_view::filter::any_record;
use crate::shared::table_view::{distinct_values, ColumnDef, PresetDef, ViewContext, ALL};

use super::aggregate::{AdoptionHealth, Customer};

pub const INDUSTRIES: &[&str] = &[
    "Technology",
    "Finance",
    "Healthcare",
    "Education",
    "Retail",
    "Manufacturing",
    "Legal",
    "Energy",
    "Transportation",
];

pub const PLANS: &[&str] = &["Starter", "Professional", "Business", "Enterprise"];

pub const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("name", "Customer").pinned(),
    ColumnDef::new("industry", "Industry"),
    ColumnDef::new("plan", "Plan"),
    ColumnDef::new("seats", "Seats").right(),
    ColumnDef::new("contractEnd", "Renewal Date"),
    ColumnDef::new("adoptionHealth", "Health"),
    ColumnDef::new("openIssues", "Issues").right(),
    ColumnDef::new("owner", "Owner"),
    ColumnDef::new("domain", "Domain").hidden(),
    ColumnDef::new("region", "Region").hidden(),
    ColumnDef::new("lastActivity", "Last Activity").hidden(),
    ColumnDef::new("actions", "Actions").pinned().unsortable().right(),
];

pub const FILTER_FIELDS: &[(&str, &str)] = &[
    ("adoptionHealth", "Health"),
    ("industry", "Industry"),
    ("plan", "Plan"),
    ("owner", "Owner"),
];

pub const SEARCH_PLACEHOLDER: &str = "Search by name, ID, or domain...";

fn renewing_in(customer: &Customer, ctx: &ViewContext, days: i64) -> bool {
    within_next_days(&customer.contract_end, ctx.now, days)
}

fn renewing_30(customer: &Customer, ctx: &ViewContext) -> bool {
    renewing_in(customer, ctx, 30)
}

fn renewing_60(customer: &Customer, ctx: &ViewContext) -> bool {
    renewing_in(customer, ctx, 60)
}

fn renewing_90(customer: &Customer, ctx: &ViewContext) -> bool {
    renewing_in(customer, ctx, 90)
}

fn at_risk(customer: &Customer, _: &ViewContext) -> bool {
    customer.adoption_health == AdoptionHealth::Risk
}

pub static PRESETS: &[PresetDef<Customer>] = &[
    PresetDef { key: ALL, label: "All Customers", predicate: any_record },
    PresetDef { key: "renewing-30", label: "Renewing in 30 days", predicate: renewing_30 },
    PresetDef { key: "renewing-60", label: "Renewing in 60 days", predicate: renewing_60 },
    PresetDef { key: "renewing-90", label: "Renewing in 90 days", predicate: renewing_90 },
    PresetDef { key: "at-risk", label: "At Risk", predicate: at_risk },
];

/// (value, label) pairs for a dropdown.
pub fn filter_options(records: &[Customer], field: &str) -> Vec<(String, String)> {
    match field {
        "adoptionHealth" => AdoptionHealth::LABELS
            .iter()
            .map(|v| (v.to_string(), AdoptionHealth::parse(v).display_label().to_string()))
            .collect(),
        "industry" => INDUSTRIES.iter().map(|v| (v.to_string(), v.to_string())).collect(),
        "plan" => PLANS.iter().map(|v| (v.to_string(), v.to_string())).collect(),
        other => distinct_values(records, other)
            .into_iter()
            .map(|v| (v.clone(), v))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::aggregate::fixtures::customer;
    use super::*;
    use crate::shared::table_view::summary::preset_counts;
    use crate::shared::table_view::{derive_view, TableState};
    use chrono::{TimeZone, Utc};

    fn ctx() -> ViewContext {
        ViewContext::at(Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap())
    }

    fn records() -> Vec<Customer> {
        vec![
            customer(1, "Acme Corp", "2025-02-01", AdoptionHealth::Good),
            customer(2, "Beta Inc", "2025-03-10", AdoptionHealth::Risk),
            // ровно now + 90 дней
            customer(3, "Cobalt", "2025-04-15", AdoptionHealth::Medium),
            customer(4, "Delta", "2024-12-31", AdoptionHealth::Risk),
            customer(5, "Echo", "not a date", AdoptionHealth::Good),
        ]
    }

    #[test]
    fn renewal_windows() {
        let counts = preset_counts(&records(), PRESETS, &ctx());
        assert_eq!(counts["renewing-30"], 1);
        assert_eq!(counts["renewing-60"], 2);
        assert_eq!(counts["renewing-90"], 3);
        assert_eq!(counts["at-risk"], 2);
    }

    #[test]
    fn tab_change_keeps_health_filter() {
        let records = records();
        let mut state = TableState::with_columns(COLUMNS);
        state.set_categorical("adoptionHealth", "Risk");
        state.set_search("beta");
        state.set_preset("renewing-90");

        let page = derive_view(&records, &state, PRESETS, &ctx());
        let ids: Vec<u32> = page.rows.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(state.filters.search, "");
    }

    #[test]
    fn health_options_use_display_labels() {
        let options = filter_options(&records(), "adoptionHealth");
        assert_eq!(options[2], ("Risk".to_string(), "At Risk".to_string()));
        assert_eq!(filter_options(&records(), "owner").len(), 1);
    }
}
