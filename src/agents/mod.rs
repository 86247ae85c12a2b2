//! Pipeline agents
//!
//! Each agent owns one step of the request pipeline:
//! - Planner: picks the action and location from the user context
//! - Data: fetches a reading, search first with sample data as fallback
//! - Analysis: classifies the trend against recent history
//! - Explanation: renders a human-readable summary
//! - Advisory: turns the summary and preferences into advice

pub mod advisory;
pub mod analysis;
pub mod data;
pub mod explanation;
pub mod planner;

pub use advisory::AdvisoryAgent;
pub use analysis::AnalysisAgent;
pub use data::DataAgent;
pub use explanation::ExplanationAgent;
pub use planner::PlannerAgent;
