use serde::{Deserialize, Serialize};

use crate::shared::table_view::{FieldValue, TableRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnouncementCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

/// Объявление вендора для партнёров
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub is_pinned: bool,
    pub summary: String,
    pub content: String,
    #[serde(default)]
    pub what_changed: Option<String>,
    #[serde(default)]
    pub why_it_matters: Option<String>,
    #[serde(default)]
    pub what_to_say: Option<String>,
    #[serde(default)]
    pub applies_to: Vec<String>,
    #[serde(default)]
    pub action_required: bool,
    #[serde(default)]
    pub action_text: Option<String>,
    pub author: String,
    #[serde(default)]
    pub effective_date: Option<String>,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub event_time: Option<String>,
    #[serde(default)]
    pub event_location: Option<String>,
    #[serde(default)]
    pub registration_link: Option<String>,
    #[serde(default)]
    pub resource_link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TableRecord for Announcement {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.summary.as_str(), self.content.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "title" => FieldValue::text(&self.title),
            "category" => FieldValue::text(&self.category),
            "date" => FieldValue::Date(&self.date),
            "author" => FieldValue::text(&self.author),
            _ => FieldValue::Missing,
        }
    }
}

/// Payload of the announcements page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementsData {
    #[serde(default)]
    pub pinned_announcements: Vec<Announcement>,
    pub announcements: Vec<Announcement>,
    #[serde(default)]
    pub categories: Vec<AnnouncementCategory>,
}

impl AnnouncementsData {
    pub fn category(&self, id: &str) -> Option<&AnnouncementCategory> {
        self.categories.iter().find(|c| c.id == id)
    }
}
