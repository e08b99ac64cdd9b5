use crate::shared::table_view::{ColumnDef, PresetDef};

use super::aggregate::{Quote, QuoteStatus};

pub const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "Quote ID").pinned(),
    ColumnDef::new("customer", "Customer").pinned(),
    ColumnDef::new("plan", "Plan"),
    ColumnDef::new("seats", "Seats").right(),
    ColumnDef::new("totalValue", "Value").right(),
    ColumnDef::new("discountApplied", "Discount"),
    ColumnDef::new("status", "Status"),
    ColumnDef::new("validUntil", "Valid Until"),
    ColumnDef::new("createdDate", "Created").hidden(),
    ColumnDef::new("dealId", "Deal").hidden(),
];

pub const SEARCH_PLACEHOLDER: &str = "Search quotes...";

/// История котировок без вкладок: только поиск и фильтр статуса
pub static PRESETS: &[PresetDef<Quote>] = &[];

/// Statuses offered in the history dropdown.
pub const STATUS_FILTER: &[&str] = &["draft", "pending_approval", "approved", "sent", "expired"];

/// (value, label) pairs for the status dropdown.
pub fn status_options() -> Vec<(String, String)> {
    STATUS_FILTER
        .iter()
        .map(|s| (s.to_string(), QuoteStatus::parse(s).display_label().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::aggregate::fixtures::quote;
    use super::*;
    use crate::shared::table_view::{derive_view, TableState, ViewContext};
    use chrono::{TimeZone, Utc};

    #[test]
    fn history_search_and_status() {
        let quotes = vec![
            quote("Q-1001", "Acme Corp", QuoteStatus::Approved),
            quote("Q-1002", "Beta Inc", QuoteStatus::Sent),
            quote("Q-1003", "Acme Labs", QuoteStatus::Draft),
        ];
        let ctx = ViewContext::at(Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap());

        let mut state = TableState::with_columns(COLUMNS);
        state.set_search("acme");
        assert_eq!(derive_view(&quotes, &state, PRESETS, &ctx).filtered_count, 2);

        state.set_categorical("status", "draft");
        let page = derive_view(&quotes, &state, PRESETS, &ctx);
        assert_eq!(page.rows[0].id, "Q-1003");

        // поиск по номеру сделки
        state.clear_filters();
        state.set_search("d-q-1002");
        assert_eq!(derive_view(&quotes, &state, PRESETS, &ctx).filtered_count, 1);
    }
}
