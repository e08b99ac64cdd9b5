use serde::{Deserialize, Serialize};

use crate::shared::table_view::{FieldValue, TableRecord};

use super::knowledge_base::KbArticle;

crate::string_enum! {
    pub enum TicketStatus {
        Open => "open",
        InProgress => "in_progress",
        Waiting => "waiting",
        Resolved => "resolved",
    }
}

impl TicketStatus {
    pub fn display_label(&self) -> &str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Waiting => "Waiting",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Other(s) => s.as_str(),
        }
    }

    pub fn is_active(&self) -> bool {
        *self != TicketStatus::Resolved
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketUpdate {
    pub date: String,
    pub author: String,
    pub message: String,
}

/// Обращение партнёра в поддержку
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub category: String,
    pub subject: String,
    pub description: String,
    pub priority: String,
    pub status: TicketStatus,
    #[serde(default)]
    pub related_deal_id: Option<String>,
    #[serde(default)]
    pub related_customer: Option<String>,
    pub created_date: String,
    pub last_updated: String,
    #[serde(default)]
    pub resolved_date: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub updates: Vec<TicketUpdate>,
}

impl TableRecord for Ticket {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.subject.as_str(), self.id.as_str()];
        if let Some(customer) = &self.related_customer {
            fields.push(customer.as_str());
        }
        fields
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "id" => FieldValue::text(&self.id),
            "subject" => FieldValue::text(&self.subject),
            "category" => FieldValue::text(&self.category),
            "priority" => FieldValue::text(&self.priority),
            "status" => FieldValue::text(self.status.as_str()),
            "relatedCustomer" => FieldValue::opt_text(self.related_customer.as_deref()),
            "relatedDealId" => FieldValue::opt_text(self.related_deal_id.as_deref()),
            "assignedTo" => FieldValue::opt_text(self.assigned_to.as_deref()),
            "createdDate" => FieldValue::Date(&self.created_date),
            "lastUpdated" => FieldValue::Date(&self.last_updated),
            "resolvedDate" => FieldValue::opt_date(self.resolved_date.as_deref()),
            _ => FieldValue::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaResponseTime {
    pub category: String,
    pub priority: String,
    pub response_time: String,
    pub resolution_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sla {
    pub business_hours: String,
    pub response_times_by_category: Vec<SlaResponseTime>,
    pub escalation: String,
}

impl Sla {
    /// Rows grouped by category, categories in first-seen order.
    pub fn grouped(&self) -> Vec<(&str, Vec<&SlaResponseTime>)> {
        let mut groups: Vec<(&str, Vec<&SlaResponseTime>)> = Vec::new();
        for row in &self.response_times_by_category {
            match groups.iter_mut().find(|(c, _)| *c == row.category) {
                Some((_, rows)) => rows.push(row),
                None => groups.push((row.category.as_str(), vec![row])),
            }
        }
        groups
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

/// Payload of the support page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportData {
    pub sla: Sla,
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub knowledge_base: Vec<KbArticle>,
    #[serde(default)]
    pub categories: Vec<SupportCategory>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn ticket(id: &str, subject: &str, status: TicketStatus, customer: Option<&str>) -> Ticket {
        Ticket {
            id: id.to_string(),
            category: "technical".to_string(),
            subject: subject.to_string(),
            description: String::new(),
            priority: "Normal".to_string(),
            status,
            related_deal_id: None,
            related_customer: customer.map(str::to_string),
            created_date: "2025-01-05".to_string(),
            last_updated: "2025-01-10".to_string(),
            resolved_date: None,
            assigned_to: None,
            updates: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: &str, priority: &str) -> SlaResponseTime {
        SlaResponseTime {
            category: category.to_string(),
            priority: priority.to_string(),
            response_time: "4h".to_string(),
            resolution_time: "2d".to_string(),
        }
    }

    #[test]
    fn sla_grouping_keeps_order() {
        let sla = Sla {
            business_hours: "Mon-Fri".to_string(),
            response_times_by_category: vec![
                row("Technical", "High"),
                row("Billing", "Normal"),
                row("Technical", "Normal"),
            ],
            escalation: String::new(),
        };
        let groups = sla.grouped();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Technical");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Billing");
    }
}
