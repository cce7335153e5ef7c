use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError, LlmClientSelector};
use crate::domain::{LlmProvider, LlmSelection};
use crate::presentation::config::LlmSettings;

use super::claude_client::ClaudeClient;
use super::cohere_client::CohereClient;
use super::gemini_client::GeminiClient;
use super::openai_compat_client::OpenAiCompatClient;

/// Closed registry over the LLM backends. Each tag maps to exactly one
/// adapter construction with its base URL, credential, and default model;
/// there is no fallback between tags.
pub struct LlmClientFactory {
    settings: LlmSettings,
}

impl LlmClientFactory {
    pub fn new(settings: LlmSettings) -> Self {
        Self { settings }
    }
}

impl LlmClientSelector for LlmClientFactory {
    fn select(&self, selection: &LlmSelection) -> Result<Arc<dyn LlmClient>, LlmClientError> {
        let model = selection.model.clone();
        let settings = &self.settings;

        let client: Arc<dyn LlmClient> = match selection.provider {
            LlmProvider::ChatGpt => Arc::new(OpenAiCompatClient::new(
                "https://api.openai.com/v1",
                Some(required(&settings.openai_api_key, "chatgpt")?),
                model.unwrap_or_else(|| "gpt-4o-mini".to_string()),
            )),
            LlmProvider::Claude => Arc::new(ClaudeClient::new(
                required(&settings.anthropic_api_key, "claude")?,
                None,
                model.unwrap_or_else(|| "claude-3-5-sonnet-20240620".to_string()),
            )),
            LlmProvider::Cohere => Arc::new(CohereClient::new(
                required(&settings.cohere_api_key, "cohere")?,
                None,
                model.unwrap_or_else(|| "command-r".to_string()),
            )),
            LlmProvider::Mistral => Arc::new(OpenAiCompatClient::new(
                "https://api.mistral.ai/v1",
                Some(required(&settings.mistral_api_key, "mistral")?),
                model.unwrap_or_else(|| "mistral-small-latest".to_string()),
            )),
            LlmProvider::Octo => Arc::new(OpenAiCompatClient::new(
                "https://text.octoai.run/v1",
                Some(required(&settings.octo_api_key, "octo")?),
                model.unwrap_or_else(|| "meta-llama-3.1-8b-instruct".to_string()),
            )),
            LlmProvider::Llama => Arc::new(OpenAiCompatClient::new(
                settings.llama_base_url.clone(),
                None,
                model.unwrap_or_else(|| "llama".to_string()),
            )),
            LlmProvider::Ollama => Arc::new(OpenAiCompatClient::new(
                settings.ollama_base_url.clone(),
                None,
                model.unwrap_or_else(|| "llama3.2".to_string()),
            )),
            LlmProvider::Gemini => Arc::new(GeminiClient::new(
                required(&settings.gemini_api_key, "gemini")?,
                None,
                model.unwrap_or_else(|| "gemini-1.5-flash".to_string()),
            )),
            LlmProvider::DeepSeek => Arc::new(OpenAiCompatClient::new(
                "https://api.deepseek.com/v1",
                Some(required(&settings.deepseek_api_key, "deepseek")?),
                model.unwrap_or_else(|| "deepseek-chat".to_string()),
            )),
            LlmProvider::Fireworks => Arc::new(OpenAiCompatClient::new(
                "https://api.fireworks.ai/inference/v1",
                Some(required(&settings.fireworks_api_key, "fireworks")?),
                model.unwrap_or_else(|| {
                    "accounts/fireworks/models/llama-v3p1-8b-instruct".to_string()
                }),
            )),
        };

        Ok(client)
    }
}

fn required(
    api_key: &Option<String>,
    provider: &'static str,
) -> Result<String, LlmClientError> {
    api_key
        .clone()
        .ok_or(LlmClientError::MissingApiKey(provider))
}
