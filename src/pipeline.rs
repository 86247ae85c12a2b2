//! Request pipeline: plan, fetch, analyze, explain, advise
//!
//! Every step runs to completion before the next one starts. The only state
//! kept between requests is the in-memory query log.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::Result;
use crate::agents::{AdvisoryAgent, AnalysisAgent, DataAgent, ExplanationAgent, PlannerAgent};
use crate::config::AdvisorConfig;
use crate::memory::{MemoryBank, QueryLogEntry};
use crate::models::{Advisory, Analysis, Explanation, Reading, SampleRow, UserContext};
use crate::tools::{CsvLoader, SearchStub, Toolbox};

/// Everything the advisor has to say about one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorResponse {
    pub location: String,
    pub data: Reading,
    pub analysis: Analysis,
    pub explanation: Explanation,
    pub advice: Advisory,
}

pub struct AdvisorPipeline {
    planner: PlannerAgent,
    data_agent: DataAgent,
    analysis_agent: AnalysisAgent,
    explain_agent: ExplanationAgent,
    advisory_agent: AdvisoryAgent,
    history: CsvLoader,
    history_window: usize,
    memory: MemoryBank,
}

impl AdvisorPipeline {
    /// Build the pipeline with the tools the configuration asks for
    #[must_use]
    pub fn new(config: &AdvisorConfig) -> Self {
        let sample_data = CsvLoader::new(config.sample_csv_path());

        let mut toolbox = Toolbox::new();
        if config.search.enabled {
            toolbox.register(SearchStub::new());
        }
        toolbox.register(sample_data.clone());

        Self::with_toolbox(
            toolbox,
            sample_data,
            &config.defaults.location,
            config.data.history_window as usize,
        )
    }

    /// Build the pipeline around an explicit toolbox
    #[must_use]
    pub fn with_toolbox(
        toolbox: Toolbox,
        history: CsvLoader,
        default_location: &str,
        history_window: usize,
    ) -> Self {
        debug!(tools = ?toolbox.names().collect::<Vec<_>>(), "building pipeline");
        Self {
            planner: PlannerAgent::new(default_location),
            data_agent: DataAgent::new(toolbox),
            analysis_agent: AnalysisAgent::new(),
            explain_agent: ExplanationAgent::new(),
            advisory_agent: AdvisoryAgent::new(),
            history,
            history_window,
            memory: MemoryBank::new(),
        }
    }

    #[must_use]
    pub fn memory(&self) -> &MemoryBank {
        &self.memory
    }

    /// Answer one request. Fails with `DataUnavailable` when no reading
    /// can be found and with `ToolNotFound` when a required tool is missing.
    #[tracing::instrument(name = "advisor_request", skip(self, context))]
    pub fn run(&mut self, user_text: &str, context: &UserContext) -> Result<AdvisorResponse> {
        let plan = self.planner.handle(user_text, context);
        self.memory
            .save_query(QueryLogEntry::request(user_text, plan.location.as_str()));
        self.memory.set_pref("asthma", context.preferences.asthma);
        if let Some(user_id) = &context.user_id {
            self.memory.set_pref("user_id", user_id.as_str());
        }

        let data = self.data_agent.fetch(&plan.location).inspect_err(|e| {
            error!(location = %plan.location, error = %e, "data fetch error");
        })?;

        let history = self.load_history(&plan.location);
        let analysis = self.analysis_agent.analyze(&data, history.as_deref());
        let explanation = self.explain_agent.explain(&data, &analysis);
        let advice = self
            .advisory_agent
            .advise(&explanation, Some(&context.preferences));

        self.memory.save_query(QueryLogEntry::outcome(
            plan.location.as_str(),
            data.clone(),
            analysis.clone(),
        ));

        info!(
            location = %plan.location,
            source = ?data.source,
            advice = advice.advice.len(),
            "request complete"
        );

        Ok(AdvisorResponse {
            location: plan.location,
            data,
            analysis,
            explanation,
            advice,
        })
    }

    /// Recent rows for trend detection; unreadable data means no history
    fn load_history(&self, location: &str) -> Option<Vec<SampleRow>> {
        match self.history.recent_for(location, self.history_window) {
            Ok(rows) => {
                debug!(location, rows = rows.len(), "loaded history");
                Some(rows)
            }
            Err(e) => {
                warn!(location, error = %e, "history unavailable");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdvisorError;
    use crate::models::{DataSource, Trend};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn config_for(file: &NamedTempFile, search: bool) -> AdvisorConfig {
        let mut config = AdvisorConfig::default();
        config.data.sample_csv = file.path().display().to_string();
        config.search.enabled = search;
        config
    }

    #[test]
    fn test_default_scenario_uses_search() {
        let file = sample_file("location,pm25,pm10,aqi,date\nDelhi,120,180,170,2025-11-01\n");
        let mut pipeline = AdvisorPipeline::new(&config_for(&file, true));

        let response = pipeline
            .run("What's Chennai AQI right now?", &UserContext::for_location("Chennai"))
            .unwrap();

        assert_eq!(response.location, "Chennai");
        assert_eq!(response.data.source, DataSource::GoogleSearch);
        assert_eq!(response.analysis.trend(), Some(Trend::Stable));
        assert_eq!(response.analysis.confidence(), Some(0.8));
        assert!(response.explanation.summary.contains("poor"));
        assert_eq!(response.advice.advice.len(), 2);
    }

    #[test]
    fn test_history_drives_trend() {
        // Latest Delhi row (300) is compared against a window that includes it
        let file = sample_file(
            "location,pm25,pm10,aqi,date\n\
             Delhi,100,150,150,2025-11-01\n\
             Delhi,100,150,150,2025-11-02\n\
             Delhi,300,400,400,2025-11-03\n",
        );
        let mut config = config_for(&file, false);
        config.data.history_window = 2;
        let mut pipeline = AdvisorPipeline::new(&config);

        let response = pipeline.run("AQI?", &UserContext::for_location("Delhi")).unwrap();
        assert_eq!(response.data.source, DataSource::SampleCsv);
        assert_eq!(response.data.pm25, 300.0);
        // mean of the last two rows is 200, 300 > 260
        assert_eq!(response.analysis.trend(), Some(Trend::Rising));
        assert_eq!(response.analysis.confidence(), Some(0.9));
    }

    #[test]
    fn test_no_data_is_reported_and_logged() {
        let file = sample_file("location,pm25,pm10,aqi,date\nDelhi,120,180,170,2025-11-01\n");
        let mut pipeline = AdvisorPipeline::new(&config_for(&file, false));

        let err = pipeline
            .run("AQI?", &UserContext::for_location("Chennai"))
            .unwrap_err();
        assert!(matches!(err, AdvisorError::DataUnavailable));
        // The request itself is still logged
        assert_eq!(pipeline.memory().queries().len(), 1);
    }

    #[test]
    fn test_memory_records_request_and_outcome() {
        let file = sample_file("location,pm25,pm10,aqi,date\n");
        let mut pipeline = AdvisorPipeline::new(&config_for(&file, true));
        let context = UserContext {
            user_id: Some("dharshaa".to_string()),
            ..UserContext::for_location("Chennai").with_asthma(true)
        };

        let response = pipeline.run("Can I run?", &context).unwrap();
        assert_eq!(response.advice.advice.len(), 3);

        let queries = pipeline.memory().queries();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].user_text.as_deref(), Some("Can I run?"));
        assert_eq!(queries[1].data.as_ref(), Some(&response.data));
        assert_eq!(
            pipeline.memory().get_pref("user_id"),
            Some(&serde_json::json!("dharshaa"))
        );
    }
}
