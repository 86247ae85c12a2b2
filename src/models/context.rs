//! User context and planning models

use serde::{Deserialize, Serialize};

/// Health preferences that add advice lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub asthma: bool,
}

/// Who is asking and from where
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub preferences: UserPreferences,
}

impl UserContext {
    #[must_use]
    pub fn for_location<S: Into<String>>(location: S) -> Self {
        Self {
            location: Some(location.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_asthma(mut self, asthma: bool) -> Self {
        self.preferences.asthma = asthma;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanAction {
    FetchData,
}

/// What the planner decided to do
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub action: PlanAction,
    pub location: String,
}
