//! Data models for the air quality advisor
//!
//! This module contains the core domain models organized by concern:
//! - Reading: Pollutant measurements and the sample data rows they come from
//! - Analysis: Trend classification results
//! - Explanation: Human-readable summaries and advice lists
//! - Context: User context, preferences and the planner's decision

pub mod analysis;
pub mod context;
pub mod explanation;
pub mod reading;

// Re-export all public types for convenient access
pub use analysis::{Analysis, Trend, TrendAnalysis};
pub use context::{Plan, PlanAction, UserContext, UserPreferences};
pub use explanation::{Advisory, Explanation};
pub use reading::{DataSource, PollutantValues, Reading, SampleRow};
