use crate::shared::indicators::{IndicatorStatus, MetricValue};

use super::aggregate::{TrackStatus, TrainingData};

pub fn summary(data: &TrainingData) -> Vec<MetricValue> {
    let progress = &data.partner_progress;
    let total_modules: usize = data.tracks.iter().map(|t| t.modules.len()).sum();
    let completed_modules: usize = data.tracks.iter().map(|t| t.completed_modules()).sum();
    let required: Vec<_> = data.tracks.iter().filter(|t| t.required_for_tier).collect();
    let required_done = required
        .iter()
        .filter(|t| t.status == TrackStatus::Completed)
        .count();

    vec![
        MetricValue::integer(
            "certifications",
            "Certifications Earned",
            progress.completed_certifications as usize,
        )
        .with_status(IndicatorStatus::Good)
        .with_hint(format!("of {} available", progress.total_certifications)),
        MetricValue::integer(
            "in_progress",
            "In Progress",
            progress.in_progress_certifications as usize,
        ),
        MetricValue::integer("modules_completed", "Modules Completed", completed_modules)
            .with_hint(format!("{} / {} modules", completed_modules, total_modules)),
        MetricValue::integer("required_tracks", "Required Tracks", required_done)
            .with_status(if required_done == required.len() {
                IndicatorStatus::Good
            } else {
                IndicatorStatus::Warning
            })
            .with_hint(format!("{}/{} completed", required_done, required.len())),
    ]
}

#[cfg(test)]
mod tests {
    use super::super::aggregate::{PartnerProgress, TrainingModule, TrainingTrack};
    use super::*;
    use crate::shared::indicators::metric;

    fn module(status: TrackStatus) -> TrainingModule {
        TrainingModule {
            id: "m".to_string(),
            title: "Module".to_string(),
            description: String::new(),
            module_type: "video".to_string(),
            duration: "15 min".to_string(),
            status,
            required_for_tier: true,
            objectives: Vec::new(),
        }
    }

    fn track(required: bool, status: TrackStatus, modules: Vec<TrainingModule>) -> TrainingTrack {
        TrainingTrack {
            id: "t".to_string(),
            title: "Track".to_string(),
            description: String::new(),
            required_for_tier: required,
            status,
            completed_date: None,
            expiry_date: None,
            badge: "Badge".to_string(),
            modules,
        }
    }

    #[test]
    fn module_and_track_completion() {
        let data = TrainingData {
            partner_progress: PartnerProgress {
                completed_certifications: 1,
                in_progress_certifications: 1,
                total_certifications: 4,
                next_tier_requirement: "Complete Sales Pro".to_string(),
            },
            tracks: vec![
                track(true, TrackStatus::Completed, vec![module(TrackStatus::Completed), module(TrackStatus::Completed)]),
                track(true, TrackStatus::InProgress, vec![module(TrackStatus::Completed), module(TrackStatus::NotStarted)]),
                track(false, TrackStatus::NotStarted, Vec::new()),
            ],
            earned_badges: Vec::new(),
        };

        let m = summary(&data);
        assert_eq!(metric(&m, "modules_completed").unwrap().value, 3.0);
        assert_eq!(metric(&m, "modules_completed").unwrap().hint.as_deref(), Some("3 / 4 modules"));
        assert_eq!(metric(&m, "required_tracks").unwrap().hint.as_deref(), Some("1/2 completed"));
        assert_eq!(data.tracks[1].progress_percent(), 50.0);
        assert_eq!(data.tracks[2].progress_percent(), 0.0);
        assert!(data.tracks[1].starts_open());
    }
}
