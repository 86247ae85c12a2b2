//! Search stub standing in for a real web search

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Tool;
use crate::{AdvisorError, Result};

/// Shape of a search tool response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub result_snippet: String,
    #[serde(default)]
    pub raw_html: String,
}

/// Returns a fixed snippet built around the first word of the query.
/// No network access happens here.
#[derive(Debug, Clone, Default)]
pub struct SearchStub;

impl SearchStub {
    pub const NAME: &'static str = "google_search";

    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Build the stubbed search response for a query
    pub fn search(&self, query: &str) -> Result<SearchResult> {
        let place = query
            .split_whitespace()
            .next()
            .ok_or_else(|| AdvisorError::tool_output("search query is empty"))?;

        Ok(SearchResult {
            query: query.to_string(),
            timestamp: Some(Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()),
            result_snippet: format!(
                "AQI {place}: 128 (Unhealthy for sensitive groups). PM2.5: 86 µg/m3. Source: example.com"
            ),
            raw_html: "<html>...</html>".to_string(),
        })
    }
}

impl Tool for SearchStub {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Search the web for current air quality figures (stubbed)"
    }

    fn run(&self, input: &str) -> Result<Value> {
        Ok(serde_json::to_value(self.search(input)?)?)
    }
}
