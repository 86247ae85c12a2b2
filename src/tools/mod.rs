//! Data source tools
//!
//! Tools are looked up by name at call time. Each returns a JSON value so
//! callers can tell a structured error record apart from a real result:
//! - `google_search`: local search stub producing a fixed snippet
//! - `csv_loader`: latest sample row for a location

pub mod csv_loader;
pub mod search;

use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

use crate::{AdvisorError, Result};

pub use csv_loader::CsvLoader;
pub use search::{SearchResult, SearchStub};

/// A named data source callable with a single text argument
pub trait Tool {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn run(&self, input: &str) -> Result<Value>;
}

/// Registry of tools keyed by name
#[derive(Default)]
pub struct Toolbox {
    tools: BTreeMap<String, Box<dyn Tool>>,
}

impl Toolbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    #[must_use]
    pub fn with_tool<T: Tool + 'static>(mut self, tool: T) -> Self {
        self.register(tool);
        self
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Registered tool names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    /// Run the tool registered under `name`; unknown names are fatal
    #[tracing::instrument(name = "call_tool", level = "debug", skip(self))]
    pub fn call(&self, name: &str, input: &str) -> Result<Value> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| AdvisorError::tool_not_found(name))?;
        debug!(tool = tool.name(), description = tool.description(), "calling tool");
        tool.run(input)
    }
}
