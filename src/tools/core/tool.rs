use super::render::Render;
use super::result::ToolResult;
use super::spec::ToolSpec;
use crate::llm::TextGenerator;
use crate::store::EmployeeStore;
use crate::weather::ForecastClient;
use anyhow::Result;
use serde::de::DeserializeOwned;

/// Context provided to tools during execution. Handlers share the remote
/// clients; there is no other cross-invocation state.
pub struct ToolContext<'a> {
    /// Remote employee table
    pub store: &'a dyn EmployeeStore,
    /// Text generation backend for availability conversion
    pub generator: &'a dyn TextGenerator,
    /// Public forecast API
    pub forecast: &'a ForecastClient,
}

/// Core trait for tools, defining the execution interface
#[async_trait::async_trait]
pub trait Tool: Send + Sync + 'static {
    /// Input type for this tool, must be deserializable from JSON
    type Input: DeserializeOwned + Send;

    /// Output type for this tool, must implement Render and ToolResult
    type Output: Render + ToolResult + Send + Sync;

    /// Get the metadata for this tool
    fn spec(&self) -> ToolSpec;

    /// Execute the tool with the given context and input
    async fn execute<'a>(
        &self,
        context: &mut ToolContext<'a>,
        input: Self::Input,
    ) -> Result<Self::Output>;
}
