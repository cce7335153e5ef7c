use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::infrastructure::observability::sanitize_prompt;

const DEFAULT_BASE_URL: &str = "https://api.cohere.com";

/// Cohere chat API adapter.
pub struct CohereClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl CohereClient {
    pub fn new(api_key: String, base_url: Option<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
            model: model.into(),
        }
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    text: String,
}

#[async_trait]
impl LlmClient for CohereClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        let url = format!("{}/v1/chat", self.base_url.trim_end_matches('/'));

        tracing::debug!(model = %self.model, prompt = %sanitize_prompt(prompt), "dispatching chat request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.model,
                "message": prompt,
            }))
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(format!("request: {}", e)))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(LlmClientError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(format!("parse response: {}", e)))?;

        tracing::info!(model = %self.model, chars = parsed.text.len(), "chat response received");
        Ok(parsed.text.trim().to_string())
    }
}
