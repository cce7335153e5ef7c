use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::TranscriptionSelection;

/// Backend-tagged transcription result. Each variant is interpreted only by
/// its matching normalizer; nothing downstream reads these shapes directly.
#[derive(Debug, Clone)]
pub enum RawTranscript {
    Assembly(AssemblyTranscript),
    Deepgram(Vec<DeepgramWord>),
    /// LRC text as emitted by whisper.cpp.
    Lyrics(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssemblyTranscript {
    #[serde(default)]
    pub utterances: Option<Vec<AssemblyUtterance>>,
    #[serde(default)]
    pub words: Option<Vec<AssemblyWord>>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssemblyUtterance {
    pub speaker: String,
    /// Start time in milliseconds.
    pub start: u64,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssemblyWord {
    /// Start time in milliseconds.
    pub start: u64,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeepgramWord {
    pub word: String,
    /// Start time in seconds.
    pub start: f64,
    pub end: f64,
    pub confidence: f64,
    #[serde(default)]
    pub speaker: Option<u32>,
    #[serde(default)]
    pub speaker_confidence: Option<f64>,
}

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> Result<RawTranscript, TranscriptionError>;
}

/// Fixed tag-to-adapter lookup for the transcription stage. Implementations
/// hold the full backend registry; selection never falls back to another tag.
pub trait TranscriptionEngineSelector: Send + Sync {
    fn select(
        &self,
        selection: &TranscriptionSelection,
        speaker_labels: bool,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("audio io failed: {0}")]
    AudioIo(String),
    #[error("missing api key for {0}")]
    MissingApiKey(&'static str),
}
