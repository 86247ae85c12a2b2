//! Explanation and advisory output models

use serde::{Deserialize, Serialize};

/// Human-readable summary of a reading and its trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub summary: String,
    pub confidence: f64,
}

/// Ordered recommendations, general messages first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub advice: Vec<String>,
}
