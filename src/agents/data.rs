//! Fetch-with-fallback data agent
//!
//! The search tool is tried first. Any failure on that path (unknown tool,
//! malformed output, a snippet the parser rejects) falls back to the sample
//! data tool. A failure to call the sample data tool itself is fatal.

use chrono::Utc;
use tracing::{debug, error, warn};

use crate::models::{DataSource, Reading, SampleRow};
use crate::snippet::parse_search_snippet;
use crate::tools::{CsvLoader, SearchResult, SearchStub, Toolbox};
use crate::{AdvisorError, Result};

/// Produces a reading for a location
pub struct DataAgent {
    toolbox: Toolbox,
}

impl DataAgent {
    pub const NAME: &'static str = "data_agent";

    #[must_use]
    pub fn new(toolbox: Toolbox) -> Self {
        Self { toolbox }
    }

    /// Fetch the current reading, returning `DataUnavailable` when neither
    /// source has one
    #[tracing::instrument(name = "fetch", skip(self), fields(agent = "data_agent"))]
    pub fn fetch(&self, location: &str) -> Result<Reading> {
        match self.fetch_from_search(location) {
            Ok(reading) => return Ok(reading),
            Err(e) => warn!(error = %e, "search failed or parsing failed, using sample data"),
        }
        self.fetch_from_sample_data(location)
    }

    fn fetch_from_search(&self, location: &str) -> Result<Reading> {
        let query = format!("{location} AQI today");
        let value = self.toolbox.call(SearchStub::NAME, &query)?;
        let result: SearchResult = serde_json::from_value(value)?;

        let values = parse_search_snippet(&result.result_snippet)
            .ok_or_else(|| AdvisorError::tool_output("parsing failed"))?;
        let timestamp = result
            .timestamp
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string());

        debug!(pm25 = values.pm25, "parsed search snippet");
        Ok(Reading::from_values(values, timestamp, DataSource::GoogleSearch))
    }

    fn fetch_from_sample_data(&self, location: &str) -> Result<Reading> {
        let value = self.toolbox.call(CsvLoader::NAME, location)?;

        if let Some(reason) = value.get("error") {
            error!(%reason, "sample data lookup failed");
            return Err(AdvisorError::DataUnavailable);
        }

        let row: SampleRow = serde_json::from_value(value).map_err(|e| {
            warn!(error = %e, "sample data row has an unexpected shape");
            AdvisorError::DataUnavailable
        })?;

        Reading::try_from(&row).map_err(|e| {
            warn!(error = %e, "sample data row could not be coerced");
            AdvisorError::DataUnavailable
        })
    }
}
