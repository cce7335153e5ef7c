mod claude_client;
mod client_factory;
mod cohere_client;
mod gemini_client;
mod openai_compat_client;

pub use claude_client::ClaudeClient;
pub use client_factory::LlmClientFactory;
pub use cohere_client::CohereClient;
pub use gemini_client::GeminiClient;
pub use openai_compat_client::OpenAiCompatClient;
