//! In-memory query log and preference store
//!
//! Lives for the duration of the process; nothing is persisted or evicted.

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::models::{Analysis, Reading};

/// One logged interaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryLogEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_text: Option<String>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    /// Unix time in seconds
    pub time: f64,
}

impl QueryLogEntry {
    /// Entry recorded when a request arrives
    pub fn request(user_text: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            user_text: Some(user_text.into()),
            location: location.into(),
            data: None,
            analysis: None,
            time: unix_now(),
        }
    }

    /// Entry recorded once a reading has been analyzed
    pub fn outcome(location: impl Into<String>, data: Reading, analysis: Analysis) -> Self {
        Self {
            user_text: None,
            location: location.into(),
            data: Some(data),
            analysis: Some(analysis),
            time: unix_now(),
        }
    }
}

fn unix_now() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

#[derive(Debug, Default)]
pub struct MemoryBank {
    queries: Vec<QueryLogEntry>,
    preferences: HashMap<String, Value>,
}

impl MemoryBank {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_query(&mut self, entry: QueryLogEntry) {
        self.queries.push(entry);
    }

    #[must_use]
    pub fn queries(&self) -> &[QueryLogEntry] {
        &self.queries
    }

    pub fn set_pref(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.preferences.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get_pref(&self, key: &str) -> Option<&Value> {
        self.preferences.get(key)
    }
}
