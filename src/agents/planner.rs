use tracing::info;

use crate::models::{Plan, PlanAction, UserContext};

/// Decides what the pipeline should do for a request
#[derive(Debug, Clone)]
pub struct PlannerAgent {
    default_location: String,
}

impl PlannerAgent {
    pub const NAME: &'static str = "planner";

    pub fn new(default_location: impl Into<String>) -> Self {
        Self {
            default_location: default_location.into(),
        }
    }

    /// Only one action exists today, so the plan is always a data fetch
    #[must_use]
    pub fn handle(&self, user_text: &str, context: &UserContext) -> Plan {
        info!(agent = Self::NAME, user_text, "planner received request");

        let location = context
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(self.default_location.as_str())
            .to_string();

        Plan {
            action: PlanAction::FetchData,
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_context_location() {
        let planner = PlannerAgent::new("Chennai");
        let plan = planner.handle("Is it safe to run?", &UserContext::for_location("Delhi"));
        assert_eq!(plan.action, PlanAction::FetchData);
        assert_eq!(plan.location, "Delhi");
    }

    #[test]
    fn test_falls_back_to_default_location() {
        let planner = PlannerAgent::new("Chennai");
        assert_eq!(planner.handle("AQI?", &UserContext::default()).location, "Chennai");
        assert_eq!(
            planner.handle("AQI?", &UserContext::for_location(" ")).location,
            "Chennai"
        );
    }

    #[test]
    fn test_context_location_is_trimmed() {
        let planner = PlannerAgent::new("Chennai");
        let plan = planner.handle("AQI?", &UserContext::for_location("  Delhi \t"));
        assert_eq!(plan.location, "Delhi");
    }
}
