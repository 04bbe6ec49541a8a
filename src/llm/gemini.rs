use super::{ApiError, TextGenerator};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiMessage>,
}

#[derive(Debug, Serialize)]
struct GeminiMessage {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiError,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    // For testing: allows pointing the client at a mock server
    #[cfg(test)]
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url,
        }
    }

    fn get_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    async fn handle_error_response(&self, response: Response) -> anyhow::Error {
        let status = response.status();
        let response_text = response.text().await.unwrap_or_default();

        let error = if let Ok(error_response) =
            serde_json::from_str::<GeminiErrorResponse>(&response_text)
        {
            match status {
                StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimit(error_response.error.message),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    ApiError::Authentication(error_response.error.message)
                }
                StatusCode::BAD_REQUEST => ApiError::InvalidRequest(error_response.error.message),
                status if status.is_server_error() => {
                    ApiError::ServiceError(error_response.error.message)
                }
                _ => ApiError::Unknown(error_response.error.message),
            }
        } else {
            ApiError::Unknown(format!("Status {}: {}", status, response_text))
        };

        error.into()
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GeminiRequest {
            contents: vec![GeminiMessage {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        trace!("Sending request to {}", self.model);

        let response = self
            .client
            .post(self.get_url())
            .query(&[("key", &self.api_key)])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(self.handle_error_response(response).await);
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Unknown(format!("Failed to parse response: {}", e)))?;

        let text = gemini_response
            .candidates
            .into_iter()
            .flat_map(|candidate| candidate.content.parts)
            .filter_map(|part| part.text)
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(ApiError::Unknown("Response contained no text".to_string()).into());
        }

        Ok(text)
    }
}
