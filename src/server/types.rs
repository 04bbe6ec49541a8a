use crate::types::ToolDefinition;
use crate::ui::UiElement;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RequestId {
    Number(i64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JSONRPCMessage {
    Request {
        #[allow(dead_code)]
        jsonrpc: String,
        id: RequestId,
        method: String,
        #[serde(default)]
        params: Option<Value>,
    },
    Notification {
        #[allow(dead_code)]
        jsonrpc: String,
        method: String,
        #[serde(default)]
        params: Option<Value>,
    },
}

#[derive(Debug, Serialize)]
pub struct JSONRPCResponse<T> {
    pub jsonrpc: String,
    pub id: RequestId,
    pub result: T,
}

#[derive(Debug, Serialize)]
pub struct JSONRPCError {
    pub jsonrpc: String,
    pub id: RequestId,
    pub error: ErrorObject,
}

#[derive(Debug, Serialize)]
pub struct ErrorObject {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

// Initialize request/response types
#[derive(Debug, Default, Deserialize)]
pub struct InitializeParams {
    #[serde(rename = "protocolVersion", default)]
    pub protocol_version: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {
    #[serde(rename = "listChanged")]
    pub list_changed: bool,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: ToolsCapability,
}

/// Static service metadata presented to the host on initialize.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceMetadata {
    pub title: String,
    pub description: String,
    pub version: String,
    pub author: String,
    pub tags: Vec<String>,
    pub logo: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExampleQuerySet {
    pub category: String,
    pub queries: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub capabilities: ServerCapabilities,
    pub protocol_version: String,
    pub service_info: ServiceMetadata,
    pub example_queries: Vec<ExampleQuerySet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListToolsResult {
    pub tools: Vec<ToolDefinition>,
}

#[derive(Debug, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Option<Value>,
}

/// Response envelope common to every tool.
#[derive(Debug, Serialize)]
pub struct ToolCallResult {
    pub text: String,
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui: Option<UiElement>,
}
