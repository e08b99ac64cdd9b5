//! Weekly pipeline snapshots for the dashboard trend chart.

use serde::{Deserialize, Serialize};

use crate::shared::table_view::dates::{parse_timestamp, within_last_days};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelinePoint {
    pub date: String,
    /// Open pipeline value on that date
    pub pipeline: f64,
    /// Closed-won value to date
    pub successful: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendRange {
    #[default]
    Quarter,
    Month,
    Week,
}

impl TrendRange {
    pub const ALL: [TrendRange; 3] = [TrendRange::Quarter, TrendRange::Month, TrendRange::Week];

    pub fn days(self) -> i64 {
        match self {
            TrendRange::Quarter => 90,
            TrendRange::Month => 30,
            TrendRange::Week => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrendRange::Quarter => "Quarter",
            TrendRange::Month => "30 days",
            TrendRange::Week => "7 days",
        }
    }
}

/// Points no older than `range` counted back from the latest snapshot
/// (not from today: the series ends where the data ends). Points with an
/// unparseable date are dropped.
pub fn trend_window(points: &[PipelinePoint], range: TrendRange) -> Vec<PipelinePoint> {
    let Some(latest) = points.iter().filter_map(|p| parse_timestamp(&p.date)).max() else {
        return Vec::new();
    };
    points
        .iter()
        .filter(|p| within_last_days(&p.date, latest, range.days()))
        .cloned()
        .collect()
}

/// `(pipeline, successful)` bar heights in percent. Both series share the
/// largest value in the window so they stay comparable.
pub fn trend_heights(points: &[PipelinePoint]) -> Vec<(f64, f64)> {
    let max = points
        .iter()
        .map(|p| p.pipeline.max(p.successful))
        .fold(0.0_f64, f64::max);
    let pct = |v: f64| if max > 0.0 { v / max * 100.0 } else { 0.0 };
    points
        .iter()
        .map(|p| (pct(p.pipeline), pct(p.successful)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, pipeline: f64, successful: f64) -> PipelinePoint {
        PipelinePoint {
            date: date.to_string(),
            pipeline,
            successful,
        }
    }

    fn weekly() -> Vec<PipelinePoint> {
        [
            "2024-10-01", "2024-10-08", "2024-10-15", "2024-10-22", "2024-10-29",
            "2024-11-05", "2024-11-12", "2024-11-19", "2024-11-26", "2024-12-03",
            "2024-12-10", "2024-12-17", "2024-12-24", "2024-12-31",
        ]
        .iter()
        .enumerate()
        .map(|(i, d)| point(d, 400_000.0 + i as f64 * 30_000.0, 80_000.0 + i as f64 * 15_000.0))
        .collect()
    }

    #[test]
    fn windows_count_back_from_latest_snapshot() {
        let points = weekly();
        // 90 дней назад от 31.12 это 2.10: первая точка уже не входит
        assert_eq!(trend_window(&points, TrendRange::Quarter).len(), 13);
        assert_eq!(trend_window(&points, TrendRange::Month).len(), 5);

        let week = trend_window(&points, TrendRange::Week);
        let dates: Vec<&str> = week.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-12-24", "2024-12-31"]);
    }

    #[test]
    fn bad_dates_and_empty_series() {
        assert!(trend_window(&[], TrendRange::Quarter).is_empty());
        let points = vec![point("soon", 1.0, 1.0), point("2024-12-31", 2.0, 1.0)];
        assert_eq!(trend_window(&points, TrendRange::Week).len(), 1);
    }

    #[test]
    fn heights_share_one_scale() {
        let heights = trend_heights(&[
            point("2024-12-24", 100.0, 50.0),
            point("2024-12-31", 200.0, 50.0),
        ]);
        assert_eq!(heights, vec![(50.0, 25.0), (100.0, 25.0)]);
        assert_eq!(trend_heights(&[point("2024-12-31", 0.0, 0.0)]), vec![(0.0, 0.0)]);
    }
}
