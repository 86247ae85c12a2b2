use crate::models::{Advisory, Explanation, UserPreferences};

const WARNING_KEYWORDS: [&str; 2] = ["poor", "avoid"];

/// Turns an explanation and user preferences into advice lines
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvisoryAgent;

impl AdvisoryAgent {
    pub const NAME: &'static str = "advisory_agent";

    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// General advice first, then preference-specific lines
    #[must_use]
    pub fn advise(&self, explanation: &Explanation, prefs: Option<&UserPreferences>) -> Advisory {
        let mut advice = Vec::new();
        let summary = explanation.summary.to_lowercase();

        if WARNING_KEYWORDS.iter().any(|w| summary.contains(w)) {
            advice.push("Avoid outdoor exercise today.".to_string());
            advice.push("Use N95 mask if you must go out.".to_string());
        } else {
            advice.push("Good day for outdoor activities.".to_string());
        }

        if prefs.is_some_and(|p| p.asthma) {
            advice.push("Carry inhaler and avoid crowded roads.".to_string());
        }

        Advisory { advice }
    }
}
