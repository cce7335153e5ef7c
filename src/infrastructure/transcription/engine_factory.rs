use std::sync::Arc;

use crate::application::ports::{
    TranscriptionEngine, TranscriptionEngineSelector, TranscriptionError,
};
use crate::domain::{TranscriptionProvider, TranscriptionSelection};
use crate::presentation::config::TranscriptionSettings;

use super::assembly_engine::AssemblyEngine;
use super::deepgram_engine::DeepgramEngine;
use super::whisper_engine::{WhisperEngine, WhisperMode};

/// Closed registry over the transcription backends. Adding a backend means
/// adding one enum variant and one arm here; nothing else branches on tags.
pub struct TranscriptionEngineFactory {
    settings: TranscriptionSettings,
}

impl TranscriptionEngineFactory {
    pub fn new(settings: TranscriptionSettings) -> Self {
        Self { settings }
    }

    fn whisper(
        &self,
        mode: WhisperMode,
        selection: &TranscriptionSelection,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        let model = selection.model.as_deref().unwrap_or("base");
        let engine = WhisperEngine::new(
            mode,
            model,
            self.settings.whisper_binary.clone(),
            self.settings.whisper_model_dir.clone(),
            self.settings.whisper_docker_image.clone(),
        )?;
        Ok(Arc::new(engine))
    }
}

impl TranscriptionEngineSelector for TranscriptionEngineFactory {
    fn select(
        &self,
        selection: &TranscriptionSelection,
        speaker_labels: bool,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        match selection.provider {
            TranscriptionProvider::Whisper => self.whisper(WhisperMode::Native, selection),
            TranscriptionProvider::WhisperDocker => self.whisper(WhisperMode::Docker, selection),
            TranscriptionProvider::Deepgram => {
                let api_key = self
                    .settings
                    .deepgram_api_key
                    .clone()
                    .ok_or(TranscriptionError::MissingApiKey("deepgram"))?;
                Ok(Arc::new(DeepgramEngine::new(
                    api_key,
                    None,
                    selection.model.clone(),
                    speaker_labels,
                )))
            }
            TranscriptionProvider::Assembly => {
                let api_key = self
                    .settings
                    .assembly_api_key
                    .clone()
                    .ok_or(TranscriptionError::MissingApiKey("assembly"))?;
                Ok(Arc::new(AssemblyEngine::new(api_key, None, speaker_labels)))
            }
        }
    }
}
