//! `aqi-advisor` - Air quality questions answered by a small agent pipeline
//!
//! A request is planned, a reading is fetched (search stub first, sample
//! CSV data as fallback), compared against recent history, explained in
//! plain language and turned into advice.

pub mod agents;
pub mod config;
pub mod error;
pub mod logging;
pub mod memory;
pub mod models;
pub mod pipeline;
pub mod snippet;
pub mod tools;

// Re-export core types for public API
pub use agents::{AdvisoryAgent, AnalysisAgent, DataAgent, ExplanationAgent, PlannerAgent};
pub use config::AdvisorConfig;
pub use error::AdvisorError;
pub use memory::{MemoryBank, QueryLogEntry};
pub use models::{
    Advisory, Analysis, DataSource, Explanation, Plan, Reading, SampleRow, Trend, UserContext,
    UserPreferences,
};
pub use pipeline::{AdvisorPipeline, AdvisorResponse};
pub use snippet::parse_search_snippet;
pub use tools::{CsvLoader, SearchStub, Tool, Toolbox};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AdvisorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
