//! Sample data lookup over a flat CSV file
//!
//! The file needs `location`, `pm25`, `pm10` and `date` columns, `aqi` is
//! optional. Row order defines recency: the last matching row is the latest.

use serde_json::{Value, json};
use std::fs::File;
use std::path::PathBuf;
use tracing::{debug, warn};

use super::Tool;
use crate::Result;
use crate::models::SampleRow;

/// CSV-backed location lookup
#[derive(Debug, Clone)]
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub const NAME: &'static str = "csv_loader";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every row of the file in order
    pub fn load_rows(&self) -> Result<Vec<SampleRow>> {
        let file = File::open(&self.path)?;
        let mut reader = csv::Reader::from_reader(file);

        let mut rows = Vec::new();
        for result in reader.deserialize() {
            let row: SampleRow = result?;
            rows.push(row);
        }
        debug!(path = %self.path.display(), rows = rows.len(), "loaded sample data");
        Ok(rows)
    }

    /// Latest row for a location, matched case-insensitively
    pub fn latest_for(&self, location: &str) -> Result<Option<SampleRow>> {
        Ok(self
            .load_rows()?
            .into_iter()
            .filter(|row| row.matches_location(location))
            .last())
    }

    /// Up to `window` most recent rows for a location, oldest first
    pub fn recent_for(&self, location: &str, window: usize) -> Result<Vec<SampleRow>> {
        let mut matching: Vec<SampleRow> = self
            .load_rows()?
            .into_iter()
            .filter(|row| row.matches_location(location))
            .collect();
        let skip = matching.len().saturating_sub(window);
        Ok(matching.split_off(skip))
    }
}

impl Tool for CsvLoader {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Load the latest sample reading for a location"
    }

    /// Missing or unreadable files become error records instead of errors
    fn run(&self, input: &str) -> Result<Value> {
        if !self.path.exists() {
            return Ok(json!({
                "error": "sample data missing",
                "path": self.path.display().to_string(),
            }));
        }

        match self.latest_for(input) {
            Ok(Some(row)) => Ok(serde_json::to_value(row)?),
            Ok(None) => Ok(json!({ "error": "no data for location" })),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "sample data unreadable");
                Ok(json!({
                    "error": "sample data unreadable",
                    "path": self.path.display().to_string(),
                }))
            }
        }
    }
}
