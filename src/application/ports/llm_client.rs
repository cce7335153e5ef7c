use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::LlmSelection;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError>;
}

/// Fixed tag-to-adapter lookup for the LLM stage. No tag is ever substituted
/// for another; a missing credential surfaces as an error for that tag.
pub trait LlmClientSelector: Send + Sync {
    fn select(&self, selection: &LlmSelection) -> Result<Arc<dyn LlmClient>, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("missing api key for {0}")]
    MissingApiKey(&'static str),
}
