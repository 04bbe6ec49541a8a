/// Specification for a tool, including metadata
#[derive(Clone)]
pub struct ToolSpec {
    /// Unique name of the tool
    pub name: &'static str,
    /// Detailed description of what the tool does
    pub description: &'static str,
    /// JSON Schema for the tool's parameters
    pub input_schema: serde_json::Value,
    /// JSON Schema for the data object the tool returns
    pub output_schema: serde_json::Value,
}
