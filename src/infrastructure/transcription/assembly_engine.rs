use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::application::ports::{
    AssemblyTranscript, RawTranscript, TranscriptionEngine, TranscriptionError,
};

const DEFAULT_BASE_URL: &str = "https://api.assemblyai.com";
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);
/// Upper bound on status polls so a stuck job cannot hang a pipeline run
/// forever.
const MAX_POLLS: u32 = 400;

/// AssemblyAI adapter: upload the audio, create a transcript job, poll until
/// it settles. The completed payload (utterances, words, text) is returned
/// untouched as the raw result.
pub struct AssemblyEngine {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    speaker_labels: bool,
    poll_interval: Duration,
}

impl AssemblyEngine {
    pub fn new(api_key: String, base_url: Option<String>, speaker_labels: bool) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
            speaker_labels,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    async fn upload(&self, audio: Vec<u8>) -> Result<String, TranscriptionError> {
        let url = format!("{}/v2/upload", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .header("authorization", &self.api_key)
            .body(audio)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("upload: {}", e)))?;
        let upload: UploadResponse = check(response)
            .await?
            .json()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("parse upload: {}", e)))?;
        Ok(upload.upload_url)
    }

    async fn create_transcript(&self, audio_url: &str) -> Result<String, TranscriptionError> {
        let url = format!("{}/v2/transcript", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .header("authorization", &self.api_key)
            .json(&json!({
                "audio_url": audio_url,
                "speaker_labels": self.speaker_labels,
            }))
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("create: {}", e)))?;
        let created: CreateResponse = check(response)
            .await?
            .json()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("parse create: {}", e)))?;
        Ok(created.id)
    }

    async fn poll(&self, id: &str) -> Result<AssemblyTranscript, TranscriptionError> {
        let url = format!("{}/v2/transcript/{}", self.base_url.trim_end_matches('/'), id);
        for _ in 0..MAX_POLLS {
            let response = self
                .client
                .get(&url)
                .header("authorization", &self.api_key)
                .send()
                .await
                .map_err(|e| TranscriptionError::ApiRequestFailed(format!("status: {}", e)))?;
            let status: StatusResponse = check(response)
                .await?
                .json()
                .await
                .map_err(|e| TranscriptionError::ApiRequestFailed(format!("parse status: {}", e)))?;

            match status.status.as_str() {
                "completed" => return Ok(status.transcript),
                "error" => {
                    return Err(TranscriptionError::TranscriptionFailed(
                        status
                            .error
                            .unwrap_or_else(|| "transcript job reported an error".to_string()),
                    ));
                }
                other => {
                    tracing::debug!(status = other, "AssemblyAI transcript pending");
                    tokio::time::sleep(self.poll_interval).await;
                }
            }
        }
        Err(TranscriptionError::TranscriptionFailed(
            "transcript polling timed out".to_string(),
        ))
    }
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response, TranscriptionError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(TranscriptionError::ApiRequestFailed(format!(
        "status {}: {}",
        status, body
    )))
}

#[derive(Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Deserialize)]
struct CreateResponse {
    id: String,
}

#[derive(Deserialize)]
struct StatusResponse {
    status: String,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    transcript: AssemblyTranscript,
}

#[async_trait]
impl TranscriptionEngine for AssemblyEngine {
    async fn transcribe(&self, audio_path: &Path) -> Result<RawTranscript, TranscriptionError> {
        let audio = tokio::fs::read(audio_path)
            .await
            .map_err(|e| TranscriptionError::AudioIo(format!("{}: {}", audio_path.display(), e)))?;

        tracing::debug!(bytes = audio.len(), "uploading audio to AssemblyAI");
        let audio_url = self.upload(audio).await?;
        let id = self.create_transcript(&audio_url).await?;
        let transcript = self.poll(&id).await?;

        tracing::info!(transcript_id = %id, "AssemblyAI transcription completed");
        Ok(RawTranscript::Assembly(transcript))
    }
}
