use super::render::Render;
use super::result::ToolResult;
use super::spec::ToolSpec;
use super::tool::{Tool, ToolContext};
use crate::types::ToolError;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

/// Type-erased tool output that can be rendered and serialized
pub trait AnyOutput: Send + Sync {
    /// Get a reference to the output as a Render trait object
    fn as_render(&self) -> &dyn Render;

    /// Determine if the tool execution was successful
    fn is_success(&self) -> bool;

    /// Serialize this output to the response envelope's data object
    fn to_json(&self) -> Result<Value>;
}

/// Automatically implemented for all types that implement Render, ToolResult
/// and Serialize
impl<T: Render + ToolResult + Serialize + Send + Sync + 'static> AnyOutput for T {
    fn as_render(&self) -> &dyn Render {
        self
    }

    fn is_success(&self) -> bool {
        ToolResult::is_success(self)
    }

    fn to_json(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| anyhow::anyhow!("Failed to serialize output: {}", e))
    }
}

/// Type-erased tool interface for storing heterogeneous tools in collections
#[async_trait::async_trait]
pub trait DynTool: Send + Sync + 'static {
    /// Get the static metadata for this tool
    fn spec(&self) -> ToolSpec;

    /// Invoke the tool with JSON parameters and get a type-erased output
    async fn invoke<'a>(
        &self,
        context: &mut ToolContext<'a>,
        params: Value,
    ) -> Result<Box<dyn AnyOutput>>;
}

/// Automatic implementation of DynTool for any type that implements Tool
#[async_trait::async_trait]
impl<T> DynTool for T
where
    T: Tool,
    T::Output: Serialize,
{
    fn spec(&self) -> ToolSpec {
        Tool::spec(self)
    }

    async fn invoke<'a>(
        &self,
        context: &mut ToolContext<'a>,
        params: Value,
    ) -> Result<Box<dyn AnyOutput>> {
        let input: T::Input = serde_json::from_value(params)
            .map_err(|e| ToolError::ParseError(format!("Failed to parse parameters: {e}")))?;

        let output = self.execute(context, input).await?;

        Ok(Box::new(output) as Box<dyn AnyOutput>)
    }
}
