use super::{router, MessageHandler, ServerState};
use crate::tests::mocks::{MockGenerator, MockStore};
use crate::tools::core::ToolRegistry;
use crate::weather::ForecastClient;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

fn handler_with(store: MockStore, generator: MockGenerator) -> MessageHandler {
    MessageHandler::new(
        ToolRegistry::with_default_tools(),
        Box::new(store),
        Box::new(generator),
        ForecastClient::new(),
    )
}

fn default_handler() -> MessageHandler {
    handler_with(MockStore::new(), MockGenerator::new("{}"))
}

#[tokio::test]
async fn test_initialize_reports_service_metadata() {
    let handler = default_handler();

    let message =
        r#"{"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {"protocolVersion": "2024-11-05"}}"#;
    let response = handler.handle_message(message).await.unwrap();

    assert_eq!(response["jsonrpc"], "2.0");
    assert_eq!(response["id"], 1);
    assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(
        response["result"]["serviceInfo"]["title"],
        "Onboard Scheduler Service"
    );
    assert_eq!(
        response["result"]["exampleQueries"][0]["category"],
        "Management"
    );
}

#[tokio::test]
async fn test_tools_list_exposes_all_tools() {
    let handler = default_handler();

    let message = r#"{"jsonrpc": "2.0", "id": 2, "method": "tools/list"}"#;
    let response = handler.handle_message(message).await.unwrap();

    let tools = response["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 9);

    let create = tools
        .iter()
        .find(|tool| tool["name"] == "create-employee")
        .expect("create-employee is not listed");
    assert_eq!(create["inputSchema"]["required"][0], "name");
    assert_eq!(
        create["outputSchema"]["properties"]["availability"]["type"],
        "string"
    );
}

#[tokio::test]
async fn test_unknown_method_is_rejected() {
    let handler = default_handler();

    let message = r#"{"jsonrpc": "2.0", "id": 3, "method": "prompts/list"}"#;
    let response = handler.handle_message(message).await.unwrap();

    assert_eq!(response["error"]["code"], -32601);
}

#[tokio::test]
async fn test_invalid_json_yields_no_response() {
    let handler = default_handler();

    assert!(handler.handle_message("{not json").await.is_none());
}

#[tokio::test]
async fn test_notifications_yield_no_response() {
    let handler = default_handler();

    let message = r#"{"jsonrpc": "2.0", "method": "notifications/initialized"}"#;
    assert!(handler.handle_message(message).await.is_none());
}

#[tokio::test]
async fn test_unknown_tool_is_rejected() {
    let handler = default_handler();

    let message = r#"{"jsonrpc": "2.0", "id": 4, "method": "tools/call", "params": {"name": "frobnicate", "arguments": {}}}"#;
    let response = handler.handle_message(message).await.unwrap();

    assert_eq!(response["error"]["code"], -32602);
    assert!(response["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Unknown tool"));
}

#[tokio::test]
async fn test_missing_required_parameter_is_rejected() {
    let handler = default_handler();

    let message = r#"{"jsonrpc": "2.0", "id": 5, "method": "tools/call", "params": {"name": "create-employee", "arguments": {"id": 3}}}"#;
    let response = handler.handle_message(message).await.unwrap();

    assert_eq!(response["error"]["code"], -32602);
    assert!(response["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Failed to parse parameters"));
}

#[tokio::test]
async fn test_store_errors_fail_the_call() {
    let handler = handler_with(
        MockStore::failing("connection reset by peer"),
        MockGenerator::new("{}"),
    );

    let message = r#"{"jsonrpc": "2.0", "id": 6, "method": "tools/call", "params": {"name": "view-employee-userbase", "arguments": {}}}"#;
    let response = handler.handle_message(message).await.unwrap();

    assert_eq!(response["error"]["code"], -32000);
    assert!(response["error"]["message"]
        .as_str()
        .unwrap()
        .contains("connection reset by peer"));
}

async fn spawn_server(api_key: Option<String>) -> String {
    let state = Arc::new(ServerState {
        handler: default_handler(),
        api_key,
    });
    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    let listener = TcpListener::bind(addr).await.unwrap();
    let server_addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", server_addr)
}

#[tokio::test]
async fn test_requests_require_the_service_api_key() {
    let base_url = spawn_server(Some("sekrit".to_string())).await;
    let client = reqwest::Client::new();
    let body = json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"});

    let response = client.post(&base_url).json(&body).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 401);

    let response = client
        .post(&base_url)
        .header("Authorization", "Bearer sekrit")
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let response: serde_json::Value = response.json().await.unwrap();
    assert_eq!(response["result"]["tools"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn test_requests_pass_without_configured_key() {
    let base_url = spawn_server(None).await;
    let client = reqwest::Client::new();
    let body = json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"});

    let response = client.post(&base_url).json(&body).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
}
