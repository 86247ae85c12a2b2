//! Error types and handling for the air quality advisor

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// Main error type for the advisor pipeline
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// A tool was requested by name but never registered
    #[error("Tool {name} not found")]
    ToolNotFound { name: String },

    /// Neither the search snippet nor the sample data produced a reading
    #[error("no data available")]
    DataUnavailable,

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Tool output that does not have the expected shape
    #[error("Tool output error: {message}")]
    ToolOutput { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// CSV decoding errors
    #[error("CSV error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// JSON encoding errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl AdvisorError {
    /// Create a new tool-not-found error
    pub fn tool_not_found<S: Into<String>>(name: S) -> Self {
        Self::ToolNotFound { name: name.into() }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new tool output error
    pub fn tool_output<S: Into<String>>(message: S) -> Self {
        Self::ToolOutput {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AdvisorError::ToolNotFound { name } => {
                format!("Internal error: the '{name}' data source is not available.")
            }
            AdvisorError::DataUnavailable => {
                "No air quality data is available for this location right now.".to_string()
            }
            AdvisorError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            AdvisorError::ToolOutput { .. } => {
                "A data source returned an unexpected response.".to_string()
            }
            AdvisorError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            AdvisorError::Csv { .. } => {
                "The sample data file could not be read. Please check its format.".to_string()
            }
            AdvisorError::Json { .. } => "Failed to render the response.".to_string(),
        }
    }
}

/// Errors render as `{"error": "<message>"}` in JSON output
impl Serialize for AdvisorError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("error", &self.to_string())?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let tool_err = AdvisorError::tool_not_found("google_search");
        assert!(matches!(tool_err, AdvisorError::ToolNotFound { .. }));
        assert_eq!(tool_err.to_string(), "Tool google_search not found");

        let config_err = AdvisorError::config("bad level");
        assert!(matches!(config_err, AdvisorError::Config { .. }));
    }

    #[test]
    fn test_data_unavailable_json_shape() {
        let value = serde_json::to_value(AdvisorError::DataUnavailable).unwrap();
        assert_eq!(value, serde_json::json!({"error": "no data available"}));
    }

    #[test]
    fn test_user_messages() {
        let err = AdvisorError::DataUnavailable;
        assert!(err.user_message().contains("No air quality data"));

        let err = AdvisorError::tool_output("parsing failed");
        assert_eq!(
            err.user_message(),
            "A data source returned an unexpected response."
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let advisor_err: AdvisorError = io_err.into();
        assert!(matches!(advisor_err, AdvisorError::Io { .. }));
    }
}
