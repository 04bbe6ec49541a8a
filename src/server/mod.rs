mod handler;
#[cfg(test)]
mod tests;
pub mod types;

pub use handler::MessageHandler;

use anyhow::Result;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

struct ServerState {
    handler: MessageHandler,
    /// When set, requests must present this key as a bearer token.
    api_key: Option<String>,
}

/// Serve the tool handler over HTTP on the given port until the process is
/// stopped.
pub async fn serve(handler: MessageHandler, port: u16, api_key: Option<String>) -> Result<()> {
    let state = Arc::new(ServerState { handler, api_key });
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("Scheduler service is running at {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: Arc<ServerState>) -> Router {
    Router::new().route("/", post(rpc_endpoint)).with_state(state)
}

fn authorized(state: &ServerState, headers: &HeaderMap) -> bool {
    let Some(expected) = &state.api_key else {
        return true;
    };
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value == format!("Bearer {expected}"))
        .unwrap_or(false)
}

async fn rpc_endpoint(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    if !authorized(&state, &headers) {
        warn!("Rejected request with invalid or missing service API key");
        let error = json!({
            "jsonrpc": "2.0",
            "id": null,
            "error": {"code": -32001, "message": "Invalid or missing service API key"}
        });
        return (StatusCode::UNAUTHORIZED, Json(error)).into_response();
    }

    match state.handler.handle_message(&body).await {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
