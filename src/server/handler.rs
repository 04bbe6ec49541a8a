use super::types::*;
use crate::llm::TextGenerator;
use crate::store::EmployeeStore;
use crate::tools::core::{ToolContext, ToolRegistry};
use crate::types::ToolError;
use crate::weather::ForecastClient;
use serde_json::{json, Value};
use tracing::{debug, error, warn};

/// Protocol version echoed back when the client does not send one.
const PROTOCOL_VERSION_DEFAULT: &str = "2024-11-05";

pub struct MessageHandler {
    registry: ToolRegistry,
    store: Box<dyn EmployeeStore>,
    generator: Box<dyn TextGenerator>,
    forecast: ForecastClient,
}

impl MessageHandler {
    pub fn new(
        registry: ToolRegistry,
        store: Box<dyn EmployeeStore>,
        generator: Box<dyn TextGenerator>,
        forecast: ForecastClient,
    ) -> Self {
        Self {
            registry,
            store,
            generator,
            forecast,
        }
    }

    fn response<T: serde::Serialize>(&self, id: RequestId, result: T) -> Value {
        serde_json::to_value(JSONRPCResponse {
            jsonrpc: "2.0".to_string(),
            id,
            result,
        })
        .unwrap_or_else(|e| {
            error!("Failed to serialize response: {}", e);
            json!(null)
        })
    }

    fn error(&self, id: RequestId, code: i32, message: String) -> Value {
        serde_json::to_value(JSONRPCError {
            jsonrpc: "2.0".to_string(),
            id,
            error: ErrorObject {
                code,
                message,
                data: None,
            },
        })
        .unwrap_or_else(|e| {
            error!("Failed to serialize error response: {}", e);
            json!(null)
        })
    }

    fn service_metadata(&self) -> ServiceMetadata {
        ServiceMetadata {
            title: "Onboard Scheduler Service".to_string(),
            description: "A service for onboarding employees and managing their schedules."
                .to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            author: "Aaron C. and Dylan L.".to_string(),
            tags: vec![
                "schedule".to_string(),
                "onboarding".to_string(),
                "employees".to_string(),
                "management".to_string(),
                "HR".to_string(),
            ],
            logo: "https://icons.veryicon.com/png/o/miscellaneous/unicons/schedule-19.png"
                .to_string(),
        }
    }

    fn example_queries(&self) -> Vec<ExampleQuerySet> {
        vec![ExampleQuerySet {
            category: "Management".to_string(),
            queries: vec![
                "Good morning!".to_string(),
                "Add a new employee.".to_string(),
                "Remove an employee.".to_string(),
            ],
        }]
    }

    fn handle_initialize(&self, id: RequestId, params: InitializeParams) -> Value {
        debug!("Initialize params: {:?}", params);

        self.response(
            id,
            InitializeResult {
                capabilities: ServerCapabilities {
                    tools: ToolsCapability {
                        list_changed: false,
                    },
                },
                protocol_version: params
                    .protocol_version
                    .unwrap_or_else(|| PROTOCOL_VERSION_DEFAULT.to_string()),
                service_info: self.service_metadata(),
                example_queries: self.example_queries(),
                instructions: Some(
                    "Onboard Scheduler manages the employee roster and their weekly availability."
                        .to_string(),
                ),
            },
        )
    }

    fn handle_tools_list(&self, id: RequestId) -> Value {
        debug!("Handling tools/list request");

        self.response(
            id,
            ListToolsResult {
                tools: self.registry.tool_definitions(),
            },
        )
    }

    async fn handle_tool_call(&self, id: RequestId, params: ToolCallParams) -> Value {
        debug!("Handling tool call for {}", params.name);

        let tool = match self.registry.get(&params.name) {
            Some(tool) => tool,
            None => {
                return self.error(
                    id,
                    -32602,
                    ToolError::UnknownTool(params.name).to_string(),
                );
            }
        };

        let mut context = ToolContext {
            store: self.store.as_ref(),
            generator: self.generator.as_ref(),
            forecast: &self.forecast,
        };

        let arguments = params.arguments.unwrap_or_else(|| json!({}));
        match tool.invoke(&mut context, arguments).await {
            Ok(output) => {
                debug!("{}", output.as_render().status());
                let data = match output.to_json() {
                    Ok(data) => data,
                    Err(e) => return self.error(id, -32603, e.to_string()),
                };
                self.response(
                    id,
                    ToolCallResult {
                        text: output.as_render().render(),
                        data,
                        ui: output.as_render().ui(),
                    },
                )
            }
            Err(e) => {
                warn!(tool = %params.name, error = %e, "Tool invocation failed");
                let code = if e.downcast_ref::<ToolError>().is_some() {
                    -32602
                } else {
                    -32000
                };
                self.error(id, code, e.to_string())
            }
        }
    }

    /// Main message handling entry point. Returns the JSON response to
    /// write, or None for notifications and unparseable input.
    pub async fn handle_message(&self, message: &str) -> Option<Value> {
        let message: JSONRPCMessage = match serde_json::from_str(message) {
            Ok(message) => message,
            Err(e) => {
                error!("Invalid JSON-RPC message: {}", e);
                return None;
            }
        };

        match message {
            JSONRPCMessage::Request {
                id, method, params, ..
            } => {
                debug!("Processing request: method={}, id={:?}", method, id);
                match method.as_str() {
                    "initialize" => {
                        let params: InitializeParams = match serde_json::from_value(
                            params.unwrap_or_else(|| json!({})),
                        ) {
                            Ok(params) => params,
                            Err(e) => {
                                return Some(self.error(
                                    id,
                                    -32602,
                                    format!("Invalid initialize parameters: {e}"),
                                ));
                            }
                        };
                        Some(self.handle_initialize(id, params))
                    }

                    "tools/list" => Some(self.handle_tools_list(id)),

                    "tools/call" => {
                        match serde_json::from_value::<ToolCallParams>(
                            params.unwrap_or_else(|| json!({})),
                        ) {
                            Ok(params) => Some(self.handle_tool_call(id, params).await),
                            Err(e) => Some(self.error(
                                id,
                                -32602,
                                format!("Invalid tool parameters: {e}"),
                            )),
                        }
                    }

                    method => {
                        Some(self.error(id, -32601, format!("Method not found: {method}")))
                    }
                }
            }

            JSONRPCMessage::Notification { method, params, .. } => {
                if let Some(params) = params {
                    debug!("Notification {} with params: {:?}", method, params);
                } else {
                    debug!("Notification {}", method);
                }
                None
            }
        }
    }
}
