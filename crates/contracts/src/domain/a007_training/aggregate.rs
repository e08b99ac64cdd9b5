use serde::{Deserialize, Serialize};

crate::string_enum! {
    pub enum TrackStatus {
        Completed => "completed",
        InProgress => "in_progress",
        NotStarted => "not_started",
    }
}

impl TrackStatus {
    pub fn display_label(&self) -> &str {
        match self {
            TrackStatus::Completed => "Completed",
            TrackStatus::InProgress => "In Progress",
            TrackStatus::NotStarted => "Not Started",
            TrackStatus::Other(s) => s.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingModule {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub module_type: String,
    pub duration: String,
    pub status: TrackStatus,
    #[serde(default)]
    pub required_for_tier: bool,
    #[serde(default)]
    pub objectives: Vec<String>,
}

/// Учебный трек сертификации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingTrack {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub required_for_tier: bool,
    pub status: TrackStatus,
    #[serde(default)]
    pub completed_date: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    pub badge: String,
    #[serde(default)]
    pub modules: Vec<TrainingModule>,
}

impl TrainingTrack {
    pub fn completed_modules(&self) -> usize {
        self.modules
            .iter()
            .filter(|m| m.status == TrackStatus::Completed)
            .count()
    }

    /// Completed share of modules, 0 for a track without modules.
    pub fn progress_percent(&self) -> f64 {
        if self.modules.is_empty() {
            return 0.0;
        }
        self.completed_modules() as f64 * 100.0 / self.modules.len() as f64
    }

    /// Tracks in progress start expanded.
    pub fn starts_open(&self) -> bool {
        self.status == TrackStatus::InProgress
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnedBadge {
    pub id: String,
    pub name: String,
    pub earned_date: String,
    #[serde(default)]
    pub expiry_date: Option<String>,
    pub track: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerProgress {
    pub completed_certifications: u32,
    pub in_progress_certifications: u32,
    pub total_certifications: u32,
    pub next_tier_requirement: String,
}

/// Payload of the training page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingData {
    pub partner_progress: PartnerProgress,
    pub tracks: Vec<TrainingTrack>,
    #[serde(default)]
    pub earned_badges: Vec<EarnedBadge>,
}
