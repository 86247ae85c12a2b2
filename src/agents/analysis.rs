//! Trend classification against recent history
//!
//! Today's PM2.5 is compared with the mean of the historical PM2.5 values:
//! above 1.3x the mean is a rising anomaly, below 0.8x is falling.

use tracing::{debug, warn};

use crate::models::{Analysis, Reading, SampleRow, Trend, TrendAnalysis};

const RISING_FACTOR: f64 = 1.3;
const FALLING_FACTOR: f64 = 0.8;
const HISTORY_CONFIDENCE: f64 = 0.9;

#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisAgent;

impl AnalysisAgent {
    pub const NAME: &'static str = "analysis_agent";

    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Classify the reading. A non-numeric historical value fails the whole
    /// analysis; blank values are skipped.
    #[must_use]
    pub fn analyze(&self, reading: &Reading, history: Option<&[SampleRow]>) -> Analysis {
        let mut result = TrendAnalysis::default();

        let Some(history) = history.filter(|rows| !rows.is_empty()) else {
            return Analysis::Assessed(result);
        };

        let past_values = match history
            .iter()
            .filter_map(SampleRow::historical_pm25)
            .collect::<Result<Vec<f64>, _>>()
        {
            Ok(values) => values,
            Err(e) => {
                warn!(agent = Self::NAME, error = %e, "analysis failed");
                return Analysis::failed();
            }
        };

        if past_values.is_empty() {
            return Analysis::Assessed(result);
        }

        let past_avg = past_values.iter().sum::<f64>() / past_values.len() as f64;
        if past_avg > 0.0 {
            let today = reading.pm25;
            if today > past_avg * RISING_FACTOR {
                result.trend = Trend::Rising;
                result.anomaly = true;
            } else if today < past_avg * FALLING_FACTOR {
                result.trend = Trend::Falling;
            } else {
                result.trend = Trend::Stable;
            }
            result.confidence = HISTORY_CONFIDENCE;
        }

        debug!(agent = Self::NAME, past_avg, trend = %result.trend, "classified trend");
        Analysis::Assessed(result)
    }
}
