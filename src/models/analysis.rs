//! Trend analysis results

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative direction of PM2.5 against the recent average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Stable,
    Rising,
    Falling,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Stable => write!(f, "stable"),
            Trend::Rising => write!(f, "rising"),
            Trend::Falling => write!(f, "falling"),
        }
    }
}

/// Successful trend classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub trend: Trend,
    /// Set when today's value jumps well above the recent average
    pub anomaly: bool,
    /// Confidence (0.0-1.0)
    pub confidence: f64,
}

impl Default for TrendAnalysis {
    fn default() -> Self {
        Self {
            trend: Trend::Stable,
            anomaly: false,
            confidence: 0.8,
        }
    }
}

/// Result of the analysis step; failures travel downstream as values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Analysis {
    Assessed(TrendAnalysis),
    Failed { error: String },
}

impl Analysis {
    pub const ERROR_CODE: &'static str = "analysis_error";

    /// The `{"error": "analysis_error"}` value
    #[must_use]
    pub fn failed() -> Self {
        Analysis::Failed {
            error: Self::ERROR_CODE.to_string(),
        }
    }

    #[must_use]
    pub fn trend(&self) -> Option<Trend> {
        match self {
            Analysis::Assessed(a) => Some(a.trend),
            Analysis::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn confidence(&self) -> Option<f64> {
        match self {
            Analysis::Assessed(a) => Some(a.confidence),
            Analysis::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Analysis::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assessed_json_shape() {
        let value = serde_json::to_value(Analysis::Assessed(TrendAnalysis::default())).unwrap();
        assert_eq!(
            value,
            json!({"trend": "stable", "anomaly": false, "confidence": 0.8})
        );
    }

    #[test]
    fn test_failed_json_shape() {
        let value = serde_json::to_value(Analysis::failed()).unwrap();
        assert_eq!(value, json!({"error": "analysis_error"}));
        assert!(Analysis::failed().is_error());
        assert_eq!(Analysis::failed().trend(), None);
    }

    #[test]
    fn test_round_trip_picks_variant() {
        let parsed: Analysis =
            serde_json::from_value(json!({"trend": "rising", "anomaly": true, "confidence": 0.9}))
                .unwrap();
        assert_eq!(parsed.trend(), Some(Trend::Rising));

        let parsed: Analysis = serde_json::from_value(json!({"error": "analysis_error"})).unwrap();
        assert!(parsed.is_error());
    }
}
