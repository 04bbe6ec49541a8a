mod availability;
mod gemini;

pub use availability::{convert_availability, strip_code_fences};
pub use gemini::GeminiClient;

use anyhow::Result;
use async_trait::async_trait;

/// Errors returned by generative API backends.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Single-turn prompt-completion interface for text generation backends.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends a prompt and returns the model's raw text response.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
