use anyhow::Context;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;

use contracts::domain::a001_deal::{Deal, PipelinePoint};
use contracts::domain::a002_customer::Customer;
use contracts::domain::a003_quote::QuotesData;
use contracts::domain::a004_commission::RevenueData;
use contracts::domain::a005_ticket::SupportData;
use contracts::domain::a006_announcement::AnnouncementsData;
use contracts::domain::a007_training::TrainingData;
use contracts::domain::a008_resource::ResourcesData;
use contracts::domain::a009_settings::SettingsData;

/// Неизменяемые демо-данные портала. Разбираются один раз, затем
/// обработчики только читают их.
#[derive(Debug)]
pub struct MockStore {
    pub deals: Vec<Deal>,
    /// Недельные срезы воронки для графика на главной
    pub pipeline_trend: Vec<PipelinePoint>,
    pub customers: Vec<Customer>,
    pub quotes: QuotesData,
    pub revenue: RevenueData,
    pub support: SupportData,
    pub training: TrainingData,
    pub resources: ResourcesData,
    pub announcements: AnnouncementsData,
    pub settings: SettingsData,
}

static STORE: OnceCell<MockStore> = OnceCell::new();

const DEALS_JSON: &str = include_str!("../../../data/deals.json");
const PIPELINE_TREND_JSON: &str = include_str!("../../../data/pipeline_trend.json");
const CUSTOMERS_JSON: &str = include_str!("../../../data/customers.json");
const QUOTES_JSON: &str = include_str!("../../../data/quotes.json");
const REVENUE_JSON: &str = include_str!("../../../data/revenue.json");
const SUPPORT_JSON: &str = include_str!("../../../data/support.json");
const TRAINING_JSON: &str = include_str!("../../../data/training.json");
const RESOURCES_JSON: &str = include_str!("../../../data/resources.json");
const ANNOUNCEMENTS_JSON: &str = include_str!("../../../data/announcements.json");
const SETTINGS_JSON: &str = include_str!("../../../data/settings.json");

fn parse<T: DeserializeOwned>(name: &str, json: &str) -> anyhow::Result<T> {
    serde_json::from_str(json).with_context(|| format!("failed to parse {}.json", name))
}

impl MockStore {
    pub fn load() -> anyhow::Result<Self> {
        let store = Self {
            deals: parse("deals", DEALS_JSON)?,
            pipeline_trend: parse("pipeline_trend", PIPELINE_TREND_JSON)?,
            customers: parse("customers", CUSTOMERS_JSON)?,
            quotes: parse("quotes", QUOTES_JSON)?,
            revenue: parse("revenue", REVENUE_JSON)?,
            support: parse("support", SUPPORT_JSON)?,
            training: parse("training", TRAINING_JSON)?,
            resources: parse("resources", RESOURCES_JSON)?,
            announcements: parse("announcements", ANNOUNCEMENTS_JSON)?,
            settings: parse("settings", SETTINGS_JSON)?,
        };
        tracing::info!(
            "Mock data loaded: {} deals, {} customers, {} quotes, {} tickets",
            store.deals.len(),
            store.customers.len(),
            store.quotes.quotes.len(),
            store.support.tickets.len()
        );
        Ok(store)
    }

    pub fn customer(&self, customer_id: &str) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|c| c.customer_id == customer_id)
    }
}

/// Хранилище загружается при первом обращении.
pub fn store() -> anyhow::Result<&'static MockStore> {
    STORE.get_or_try_init(MockStore::load)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique<'a>(ids: impl Iterator<Item = &'a str>, what: &str) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate {} id {}", what, id);
        }
    }

    #[test]
    fn mock_data_parses() {
        let store = MockStore::load().unwrap();
        assert!(store.deals.len() > 10, "deal table needs more than one page");
        assert!(!store.customers.is_empty());
        assert!(!store.pipeline_trend.is_empty());
        assert!(store.deals.iter().all(|d| d.stage.is_known() && d.status.is_known()));
        assert!(store.quotes.quotes.iter().all(|q| q.status.is_known()));
    }

    #[test]
    fn record_ids_are_unique() {
        let store = MockStore::load().unwrap();
        assert_unique(store.deals.iter().map(|d| d.deal_id.as_str()), "deal");
        assert_unique(store.customers.iter().map(|c| c.customer_id.as_str()), "customer");
        assert_unique(store.quotes.quotes.iter().map(|q| q.id.as_str()), "quote");
        assert_unique(store.revenue.commissions.iter().map(|c| c.id.as_str()), "commission");
        assert_unique(store.support.tickets.iter().map(|t| t.id.as_str()), "ticket");

        let mut announcements = store.announcements.pinned_announcements.iter().collect::<Vec<_>>();
        announcements.extend(store.announcements.announcements.iter());
        assert_unique(announcements.into_iter().map(|a| a.id.as_str()), "announcement");
    }

    #[test]
    fn customer_lookup() {
        let store = store().unwrap();
        let first = &store.customers[0];
        assert_eq!(
            store.customer(&first.customer_id).map(|c| c.name.as_str()),
            Some(first.name.as_str())
        );
        assert!(store.customer("C-0000").is_none());
    }
}
