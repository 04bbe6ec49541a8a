use serde::{Deserialize, Serialize};

/// A single row in the remote employee table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub availability: String,
}

/// Insert payload for the employee table. When `id` is absent the store
/// assigns one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewEmployee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub availability: String,
}

/// Tool description advertised to the host
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
    pub output_schema: serde_json::Value,
}

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Failed to parse tool parameters: {0}")]
    ParseError(String),
}
