//! Pollutant reading model and sample data rows

use serde::{Deserialize, Serialize};

use crate::AdvisorError;

/// Where a reading came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Parsed from a search result snippet
    GoogleSearch,
    /// Looked up in the sample CSV file
    SampleCsv,
}

/// Pollutant values without provenance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PollutantValues {
    pub pm25: f64,
    pub pm10: f64,
    pub aqi: i64,
}

/// A single location's pollutant measurement with its provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// PM2.5 concentration in µg/m3
    pub pm25: f64,
    /// PM10 concentration in µg/m3
    pub pm10: f64,
    /// Air quality index, -1 when the source has none
    pub aqi: i64,
    /// Source-provided timestamp (ISO 8601 for search, the row date for CSV)
    pub timestamp: Option<String>,
    /// Provenance tag
    pub source: DataSource,
}

impl Reading {
    /// Build a reading from parsed snippet values
    #[must_use]
    pub fn from_values(values: PollutantValues, timestamp: String, source: DataSource) -> Self {
        Self {
            pm25: values.pm25,
            pm10: values.pm10,
            aqi: values.aqi,
            timestamp: Some(timestamp),
            source,
        }
    }
}

/// One row of the sample data file, fields kept as raw text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleRow {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub pm25: String,
    #[serde(default)]
    pub pm10: String,
    #[serde(default)]
    pub aqi: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl SampleRow {
    /// Case-insensitive location match
    #[must_use]
    pub fn matches_location(&self, location: &str) -> bool {
        self.location.to_lowercase() == location.to_lowercase()
    }

    /// PM2.5 value for trend history; `None` when the cell is blank
    pub fn historical_pm25(&self) -> Option<Result<f64, std::num::ParseFloatError>> {
        let raw = self.pm25.trim();
        if raw.is_empty() {
            None
        } else {
            Some(raw.parse::<f64>())
        }
    }
}

impl TryFrom<&SampleRow> for Reading {
    type Error = AdvisorError;

    fn try_from(row: &SampleRow) -> Result<Self, Self::Error> {
        let pm25 = parse_concentration("pm25", &row.pm25)?;
        let pm10 = parse_concentration("pm10", &row.pm10)?;
        let aqi = match row.aqi.as_deref().map(str::trim) {
            None | Some("") => -1,
            Some(raw) => parse_field::<i64>("aqi", raw)?,
        };

        Ok(Self {
            pm25,
            pm10,
            aqi,
            timestamp: row.date.clone().filter(|d| !d.is_empty()),
            source: DataSource::SampleCsv,
        })
    }
}

/// Concentrations must be finite and non-negative
fn parse_concentration(name: &str, raw: &str) -> Result<f64, AdvisorError> {
    let value = parse_field::<f64>(name, raw)?;
    if !value.is_finite() || value < 0.0 {
        return Err(AdvisorError::tool_output(format!(
            "sample row field '{name}' is out of range: {raw:?}"
        )));
    }
    Ok(value)
}

fn parse_field<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, AdvisorError> {
    raw.trim().parse::<T>().map_err(|_| {
        AdvisorError::tool_output(format!("sample row field '{name}' is not numeric: {raw:?}"))
    })
}
