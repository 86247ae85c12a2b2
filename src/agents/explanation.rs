use crate::models::{Analysis, Explanation, Reading};

const POOR_THRESHOLD: f64 = 100.0;
const DEFAULT_CONFIDENCE: f64 = 0.7;

const POOR_TEXT: &str = "Air quality is poor — avoid strenuous outdoor activity. If you have respiratory issues, use a mask.";
const MODERATE_TEXT: &str = "Air quality is moderate; normal activities are OK.";
const UNASSESSED_TEXT: &str = "Unable to fully assess air quality.";

/// Renders a reading and its analysis as a sentence
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplanationAgent;

impl ExplanationAgent {
    pub const NAME: &'static str = "explain_agent";

    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn explain(&self, reading: &Reading, analysis: &Analysis) -> Explanation {
        let trend = analysis
            .trend()
            .map_or_else(|| "unknown".to_string(), |t| t.to_string());

        let mut summary = format!(
            "Current PM2.5 is {} µg/m3. Trend: {trend}. ",
            display_value(reading.pm25)
        );

        if !reading.pm25.is_finite() {
            summary.push_str(UNASSESSED_TEXT);
        } else if reading.pm25 > POOR_THRESHOLD {
            summary.push_str(POOR_TEXT);
        } else {
            summary.push_str(MODERATE_TEXT);
        }

        Explanation {
            summary,
            confidence: analysis.confidence().unwrap_or(DEFAULT_CONFIDENCE),
        }
    }
}

/// Whole numbers keep one decimal place (`86.0`), others print as-is
fn display_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
