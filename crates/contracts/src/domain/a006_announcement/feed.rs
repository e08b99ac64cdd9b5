//! Announcement feed: newest first, recent vs archive, relative date labels.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};

use crate::shared::table_view::dates::{days_since, older_than_days, parse_timestamp, within_last_days};
use crate::shared::table_view::sort::sort_rows;
use crate::shared::table_view::{filter_records, PresetDef, SortState, TableState, ViewContext};

use super::aggregate::{Announcement, AnnouncementCategory};

/// Граница архива в днях
pub const ARCHIVE_AFTER_DAYS: i64 = 30;

fn recent(a: &Announcement, ctx: &ViewContext) -> bool {
    within_last_days(&a.date, ctx.now, ARCHIVE_AFTER_DAYS)
}

fn archived(a: &Announcement, ctx: &ViewContext) -> bool {
    older_than_days(&a.date, ctx.now, ARCHIVE_AFTER_DAYS)
}

pub static PRESETS: &[PresetDef<Announcement>] = &[
    PresetDef { key: "recent", label: "Recent", predicate: recent },
    PresetDef { key: "archive", label: "Archive", predicate: archived },
];

/// Feed state: "Recent" tab, newest first.
pub fn initial_state() -> TableState {
    let mut state = TableState::default().with_sort(SortState::descending("date"));
    state.preset = "recent".to_string();
    state
}

/// The feed is not paginated: every matching announcement, sorted.
pub fn feed_items<'a>(
    items: &'a [Announcement],
    state: &TableState,
    ctx: &ViewContext,
) -> Vec<&'a Announcement> {
    let mut rows = filter_records(items, state, PRESETS, ctx);
    if let Some(sort) = &state.sort {
        sort_rows(&mut rows, sort);
    }
    rows
}

/// Count per category id, zero for categories without announcements.
pub fn category_counts(
    announcements: &[Announcement],
    categories: &[AnnouncementCategory],
) -> BTreeMap<String, usize> {
    categories
        .iter()
        .map(|c| {
            let n = announcements.iter().filter(|a| a.category == c.id).count();
            (c.id.clone(), n)
        })
        .collect()
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// "Today", "Yesterday", "N days ago" within a week, then "Mon D"
/// (with the year when it differs from `now`).
pub fn relative_date_label(date: &str, now: DateTime<Utc>) -> String {
    let (Some(ts), Some(days)) = (parse_timestamp(date), days_since(date, now)) else {
        return date.to_string();
    };
    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        _ => {
            let month = MONTHS[ts.month0() as usize];
            if ts.year() == now.year() {
                format!("{} {}", month, ts.day())
            } else {
                format!("{} {}, {}", month, ts.day(), ts.year())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::summary::preset_counts;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap()
    }

    fn ann(id: &str, date: &str, category: &str, tags: &[&str]) -> Announcement {
        Announcement {
            id: id.to_string(),
            title: format!("Announcement {}", id),
            category: category.to_string(),
            date: date.to_string(),
            is_pinned: false,
            summary: String::new(),
            content: "Details inside".to_string(),
            what_changed: None,
            why_it_matters: None,
            what_to_say: None,
            applies_to: Vec::new(),
            action_required: false,
            action_text: None,
            author: "Partner Team".to_string(),
            effective_date: None,
            event_date: None,
            event_time: None,
            event_location: None,
            registration_link: None,
            resource_link: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn feed() -> Vec<Announcement> {
        vec![
            ann("A-1", "2025-01-02", "product", &["pricing"]),
            ann("A-2", "2025-01-14", "events", &[]),
            ann("A-3", "2024-11-20", "product", &["ai", "summaries"]),
        ]
    }

    #[test]
    fn recent_feed_newest_first() {
        let items = feed();
        let rows = feed_items(&items, &initial_state(), &ViewContext::at(now()));
        let ids: Vec<&str> = rows.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["A-2", "A-1"]);

        let counts = preset_counts(&items, PRESETS, &ViewContext::at(now()));
        assert_eq!(counts["archive"], 1);
    }

    #[test]
    fn tags_are_searchable() {
        let items = feed();
        let mut state = initial_state();
        state.set_preset("archive");
        state.set_search("SUMMARIES");
        let rows = feed_items(&items, &state, &ViewContext::at(now()));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "A-3");
    }

    #[test]
    fn category_counts_include_empty() {
        let categories: Vec<AnnouncementCategory> = ["product", "events", "policy"]
            .iter()
            .map(|id| AnnouncementCategory {
                id: id.to_string(),
                name: id.to_string(),
                description: String::new(),
                icon: String::new(),
                color: String::new(),
            })
            .collect();
        let counts = category_counts(&feed(), &categories);
        assert_eq!(counts["product"], 2);
        assert_eq!(counts["policy"], 0);
    }

    #[test]
    fn relative_labels() {
        assert_eq!(relative_date_label("2025-01-15", now()), "Today");
        assert_eq!(relative_date_label("2025-01-14", now()), "Yesterday");
        assert_eq!(relative_date_label("2025-01-10", now()), "5 days ago");
        assert_eq!(relative_date_label("2025-01-02", now()), "Jan 2");
        assert_eq!(relative_date_label("2024-11-20", now()), "Nov 20, 2024");
        assert_eq!(relative_date_label("someday", now()), "someday");
    }
}
