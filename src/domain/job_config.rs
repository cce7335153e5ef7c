use std::fmt;

/// Language-model backends, in resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    ChatGpt,
    Claude,
    Cohere,
    Mistral,
    Octo,
    Llama,
    Ollama,
    Gemini,
    DeepSeek,
    Fireworks,
}

impl LlmProvider {
    pub const ALL: [LlmProvider; 10] = [
        LlmProvider::ChatGpt,
        LlmProvider::Claude,
        LlmProvider::Cohere,
        LlmProvider::Mistral,
        LlmProvider::Octo,
        LlmProvider::Llama,
        LlmProvider::Ollama,
        LlmProvider::Gemini,
        LlmProvider::DeepSeek,
        LlmProvider::Fireworks,
    ];

    /// The request key and log tag for this backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::ChatGpt => "chatgpt",
            LlmProvider::Claude => "claude",
            LlmProvider::Cohere => "cohere",
            LlmProvider::Mistral => "mistral",
            LlmProvider::Octo => "octo",
            LlmProvider::Llama => "llama",
            LlmProvider::Ollama => "ollama",
            LlmProvider::Gemini => "gemini",
            LlmProvider::DeepSeek => "deepseek",
            LlmProvider::Fireworks => "fireworks",
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transcription backends, in resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptionProvider {
    Whisper,
    WhisperDocker,
    Deepgram,
    Assembly,
}

impl TranscriptionProvider {
    pub const ALL: [TranscriptionProvider; 4] = [
        TranscriptionProvider::Whisper,
        TranscriptionProvider::WhisperDocker,
        TranscriptionProvider::Deepgram,
        TranscriptionProvider::Assembly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptionProvider::Whisper => "whisper",
            TranscriptionProvider::WhisperDocker => "whisperDocker",
            TranscriptionProvider::Deepgram => "deepgram",
            TranscriptionProvider::Assembly => "assembly",
        }
    }
}

impl fmt::Display for TranscriptionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmSelection {
    pub provider: LlmProvider,
    /// `None` means the backend's default model.
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionSelection {
    pub provider: TranscriptionProvider,
    pub model: Option<String>,
}

/// Canonical configuration for one pipeline run. Resolved once from the raw
/// request and never mutated by downstream stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    pub transcription: TranscriptionSelection,
    /// Absence disables the LLM stage entirely.
    pub llm: Option<LlmSelection>,
    pub speaker_labels: bool,
    pub prompt: Option<String>,
    pub no_clean_up: bool,
    pub order: Option<String>,
    pub skip: Option<u64>,
    pub info: bool,
    pub item: Option<String>,
}
