mod artifact_store;
mod llm_client;
mod media_source;
mod transcription_engine;

pub use artifact_store::{ArtifactStore, ArtifactStoreError};
pub use llm_client::{LlmClient, LlmClientError, LlmClientSelector};
pub use media_source::{MediaSource, MediaSourceError};
pub use transcription_engine::{
    AssemblyTranscript, AssemblyUtterance, AssemblyWord, DeepgramWord, RawTranscript,
    TranscriptionEngine, TranscriptionEngineSelector, TranscriptionError,
};
