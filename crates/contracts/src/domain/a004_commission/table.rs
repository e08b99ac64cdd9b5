use crate::shared::table_view::{ColumnDef, PresetDef};

use super::aggregate::{Commission, CommissionStatus};

pub const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "Commission ID").pinned(),
    ColumnDef::new("customer", "Customer").pinned(),
    ColumnDef::new("dealValue", "Deal Value").right(),
    ColumnDef::new("commissionRate", "Rate"),
    ColumnDef::new("earnedAmount", "Earned").right(),
    ColumnDef::new("status", "Status"),
    ColumnDef::new("payoutDate", "Payout Date"),
    ColumnDef::new("dealCloseDate", "Deal Closed").hidden(),
    ColumnDef::new("dealId", "Deal").hidden(),
];

pub const SEARCH_PLACEHOLDER: &str = "Search commissions...";

pub static PRESETS: &[PresetDef<Commission>] = &[];

pub fn status_options() -> Vec<(String, String)> {
    CommissionStatus::LABELS
        .iter()
        .map(|s| (s.to_string(), CommissionStatus::parse(s).display_label().to_string()))
        .collect()
}
