use serde::{Deserialize, Serialize};

/// Severity band of a confidence bar. Displays lower-case so it can be used
/// directly as a style class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn for_percent(percent: i64) -> Self {
        if percent > 70 {
            ConfidenceTier::High
        } else if percent > 40 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceBar {
    pub percent: i64,
    pub tier: ConfidenceTier,
}

impl ConfidenceBar {
    /// Rounds half-up, so `0.125` becomes 13.
    /// Values outside `[0, 1]` are passed through unclamped.
    pub fn from_confidence(confidence: f64) -> Self {
        let percent = (confidence * 100.0 + 0.5).floor() as i64;
        Self {
            percent,
            tier: ConfidenceTier::for_percent(percent),
        }
    }

    /// Width of the filled part of the bar, in percent.
    pub fn fill_width(&self) -> i64 {
        self.percent.clamp(0, 100)
    }
}
