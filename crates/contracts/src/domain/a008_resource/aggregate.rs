use serde::{Deserialize, Serialize};

use crate::shared::table_view::{matches_search, FieldValue, TableRecord};

/// Материал для партнёров (презентация, видео, документ)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    pub download_url: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl TableRecord for Resource {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.resource_type.as_str()]
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "title" => FieldValue::text(&self.title),
            "type" => FieldValue::text(&self.resource_type),
            "format" => FieldValue::opt_text(self.format.as_deref()),
            "updatedAt" => FieldValue::opt_date(self.updated_at.as_deref().or(self.date.as_deref())),
            _ => FieldValue::Missing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceCategory {
    Sales,
    Competitive,
    Demo,
    Pricing,
    Technical,
    Marketing,
    Updates,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 7] = [
        ResourceCategory::Sales,
        ResourceCategory::Competitive,
        ResourceCategory::Demo,
        ResourceCategory::Pricing,
        ResourceCategory::Technical,
        ResourceCategory::Marketing,
        ResourceCategory::Updates,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ResourceCategory::Sales => "sales",
            ResourceCategory::Competitive => "competitive",
            ResourceCategory::Demo => "demo",
            ResourceCategory::Pricing => "pricing",
            ResourceCategory::Technical => "technical",
            ResourceCategory::Marketing => "marketing",
            ResourceCategory::Updates => "updates",
        }
    }

    pub fn tab_label(&self) -> &'static str {
        match self {
            ResourceCategory::Sales => "Sales",
            ResourceCategory::Competitive => "Competitive",
            ResourceCategory::Demo => "Demo",
            ResourceCategory::Pricing => "Pricing",
            ResourceCategory::Technical => "Technical",
            ResourceCategory::Marketing => "Marketing",
            ResourceCategory::Updates => "Updates",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ResourceCategory::Sales => "Sales Resources",
            ResourceCategory::Competitive => "Competitive Resources",
            ResourceCategory::Demo => "Demo & Product",
            ResourceCategory::Pricing => "Pricing & Packaging",
            ResourceCategory::Technical => "Technical & Implementation",
            ResourceCategory::Marketing => "Marketing Resources",
            ResourceCategory::Updates => "Release & Updates",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ResourceCategory::Sales => "Pitch decks, one-pagers, discovery guides, and email templates",
            ResourceCategory::Competitive => "Battle cards, objection handling, and talk tracks",
            ResourceCategory::Demo => "Demo scripts, videos, and product walkthroughs",
            ResourceCategory::Pricing => "Plans overview, discount rules, and quote process",
            ResourceCategory::Technical => "Security docs, SSO guides, and implementation checklists",
            ResourceCategory::Marketing => "Case studies, logos, and co-branding materials",
            ResourceCategory::Updates => "What's new, what to pitch, and pricing changes",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// Payload of the enablement page: one array per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourcesData {
    #[serde(default)]
    pub sales: Vec<Resource>,
    #[serde(default)]
    pub competitive: Vec<Resource>,
    #[serde(default)]
    pub demo: Vec<Resource>,
    #[serde(default)]
    pub pricing: Vec<Resource>,
    #[serde(default)]
    pub technical: Vec<Resource>,
    #[serde(default)]
    pub marketing: Vec<Resource>,
    #[serde(default)]
    pub updates: Vec<Resource>,
}

impl ResourcesData {
    pub fn category(&self, category: ResourceCategory) -> &[Resource] {
        match category {
            ResourceCategory::Sales => &self.sales,
            ResourceCategory::Competitive => &self.competitive,
            ResourceCategory::Demo => &self.demo,
            ResourceCategory::Pricing => &self.pricing,
            ResourceCategory::Technical => &self.technical,
            ResourceCategory::Marketing => &self.marketing,
            ResourceCategory::Updates => &self.updates,
        }
    }

    pub fn total(&self) -> usize {
        ResourceCategory::ALL
            .iter()
            .map(|c| self.category(*c).len())
            .sum()
    }

    /// Resources of one category matching the search text.
    pub fn search(&self, category: ResourceCategory, query: &str) -> Vec<&Resource> {
        self.category(category)
            .iter()
            .filter(|r| matches_search(*r, query))
            .collect()
    }

    /// Sections for a tab key: every non-empty category for `"all"`, else the
    /// one selected. Unknown keys behave like `"all"`.
    pub fn sections(&self, tab: &str, query: &str) -> Vec<(ResourceCategory, Vec<&Resource>)> {
        let selected: Vec<ResourceCategory> = match ResourceCategory::from_key(tab) {
            Some(c) => vec![c],
            None => ResourceCategory::ALL.to_vec(),
        };
        selected
            .into_iter()
            .map(|c| (c, self.search(c, query)))
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn res(id: &str, title: &str, kind: &str) -> Resource {
        Resource {
            id: id.to_string(),
            title: title.to_string(),
            description: "Use in discovery calls".to_string(),
            resource_type: kind.to_string(),
            format: None,
            updated_at: None,
            date: None,
            download_url: "#".to_string(),
            duration: None,
            highlights: Vec::new(),
        }
    }

    fn data() -> ResourcesData {
        ResourcesData {
            sales: vec![res("S-1", "Pitch Deck", "Presentation"), res("S-2", "One Pager", "PDF")],
            demo: vec![res("D-1", "Demo Video", "Video")],
            ..Default::default()
        }
    }

    #[test]
    fn search_across_title_description_type() {
        let d = data();
        assert_eq!(d.total(), 3);
        assert_eq!(d.search(ResourceCategory::Sales, "pdf").len(), 1);
        assert_eq!(d.search(ResourceCategory::Sales, "DISCOVERY").len(), 2);
    }

    #[test]
    fn sections_per_tab() {
        let d = data();
        let all = d.sections("all", "");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].0, ResourceCategory::Sales);

        let demo = d.sections("demo", "video");
        assert_eq!(demo.len(), 1);
        assert!(d.sections("all", "nothing").is_empty());
        assert_eq!(ResourceCategory::from_key("pricing"), Some(ResourceCategory::Pricing));
    }
}
