use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Display metadata
// ---------------------------------------------------------------------------

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

impl ValueFormat {
    pub fn usd() -> Self {
        ValueFormat::Money {
            currency: "USD".to_string(),
        }
    }
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// One summary card: a scalar computed over the full, unfiltered record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    /// Stable key, used as `For` key and in tests.
    pub id: String,
    pub label: String,
    pub value: f64,
    pub format: ValueFormat,
    pub status: IndicatorStatus,
    /// Optional secondary text displayed below the value.
    pub hint: Option<String>,
}

impl MetricValue {
    pub fn integer(id: &str, label: &str, value: usize) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            value: value as f64,
            format: ValueFormat::Integer,
            status: IndicatorStatus::Neutral,
            hint: None,
        }
    }

    pub fn money(id: &str, label: &str, value: f64) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            value,
            format: ValueFormat::usd(),
            status: IndicatorStatus::Neutral,
            hint: None,
        }
    }

    pub fn percent(id: &str, label: &str, value: f64) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            value,
            format: ValueFormat::Percent { decimals: 0 },
            status: IndicatorStatus::Neutral,
            hint: None,
        }
    }

    pub fn with_status(mut self, status: IndicatorStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Find a metric by id in a summary list.
pub fn metric<'a>(metrics: &'a [MetricValue], id: &str) -> Option<&'a MetricValue> {
    metrics.iter().find(|m| m.id == id)
}
