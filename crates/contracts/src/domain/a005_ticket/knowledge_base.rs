use serde::{Deserialize, Serialize};

use crate::shared::table_view::{FieldValue, TableRecord};

/// Статья базы знаний
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KbArticle {
    pub id: String,
    pub title: String,
    pub category: String,
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub related_links: Vec<String>,
}

impl TableRecord for KbArticle {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.summary.as_str()]
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "title" => FieldValue::text(&self.title),
            "category" => FieldValue::text(&self.category),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::{distinct_values, filter_records, TableState, ViewContext};
    use chrono::{TimeZone, Utc};

    fn article(id: &str, title: &str, category: &str, summary: &str) -> KbArticle {
        KbArticle {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            summary: summary.to_string(),
            content: "body mentions sso".to_string(),
            related_links: Vec::new(),
        }
    }

    #[test]
    fn search_title_and_summary_with_category() {
        let articles = vec![
            article("KB-1", "Configure SSO", "Setup", "SAML and OIDC"),
            article("KB-2", "Billing cycles", "Billing", "When invoices are issued"),
            article("KB-3", "Invoice disputes", "Billing", "Raise a dispute"),
        ];
        let ctx = ViewContext::at(Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap());
        let mut state = TableState::default();

        state.set_search("invoice");
        assert_eq!(filter_records(&articles, &state, &[], &ctx).len(), 2);

        // content is not searched
        state.set_search("sso");
        assert_eq!(filter_records(&articles, &state, &[], &ctx).len(), 1);

        state.set_search("");
        state.set_categorical("category", "Billing");
        assert_eq!(filter_records(&articles, &state, &[], &ctx).len(), 2);
        assert_eq!(distinct_values(&articles, "category"), vec!["Setup", "Billing"]);
    }
}
