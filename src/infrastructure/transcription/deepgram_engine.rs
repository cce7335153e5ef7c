use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{
    DeepgramWord, RawTranscript, TranscriptionEngine, TranscriptionError,
};

const DEFAULT_BASE_URL: &str = "https://api.deepgram.com";
const DEFAULT_MODEL: &str = "nova-2";

/// Deepgram prerecorded-audio adapter. Audio bytes go up in one request; the
/// word sequence of the first alternative comes back as the raw result.
pub struct DeepgramEngine {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    diarize: bool,
}

impl DeepgramEngine {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        diarize: bool,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            diarize,
        }
    }
}

#[derive(Deserialize)]
struct ListenResponse {
    results: ListenResults,
}

#[derive(Deserialize)]
struct ListenResults {
    #[serde(default)]
    channels: Vec<ListenChannel>,
}

#[derive(Deserialize)]
struct ListenChannel {
    #[serde(default)]
    alternatives: Vec<ListenAlternative>,
}

#[derive(Deserialize)]
struct ListenAlternative {
    #[serde(default)]
    words: Vec<DeepgramWord>,
}

#[async_trait]
impl TranscriptionEngine for DeepgramEngine {
    async fn transcribe(&self, audio_path: &Path) -> Result<RawTranscript, TranscriptionError> {
        let audio = tokio::fs::read(audio_path)
            .await
            .map_err(|e| TranscriptionError::AudioIo(format!("{}: {}", audio_path.display(), e)))?;

        let url = format!("{}/v1/listen", self.base_url.trim_end_matches('/'));
        tracing::debug!(model = %self.model, diarize = self.diarize, "sending audio to Deepgram");

        let response = self
            .client
            .post(&url)
            .query(&[
                ("model", self.model.as_str()),
                ("smart_format", "true"),
                ("diarize", if self.diarize { "true" } else { "false" }),
            ])
            .header("Authorization", format!("Token {}", self.api_key))
            .header("Content-Type", "audio/wav")
            .body(audio)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: ListenResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("parse response: {}", e)))?;

        let words = parsed
            .results
            .channels
            .into_iter()
            .next()
            .and_then(|channel| channel.alternatives.into_iter().next())
            .map(|alternative| alternative.words)
            .unwrap_or_default();

        tracing::info!(words = words.len(), "Deepgram transcription completed");
        Ok(RawTranscript::Deepgram(words))
    }
}
