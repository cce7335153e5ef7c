use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    ArtifactStore, ArtifactStoreError, LlmClientError, LlmClientSelector, MediaSource,
    MediaSourceError, RawTranscript, TranscriptionEngineSelector, TranscriptionError,
};
use crate::domain::{ArtifactKind, FrontMatter, JobConfig, JobId, ShowNoteDocument};

use super::prompt_builder::{DEFAULT_PROMPT, assemble};
use super::transcript_normalizer::{FormattingError, normalize};

/// Staged show-note pipeline: probe, front matter, audio download,
/// transcription, normalization, optional LLM generation, document write,
/// best-effort cleanup. Stages run strictly in order; each consumes the full
/// output of the previous one.
pub struct ShowNoteService {
    media: Arc<dyn MediaSource>,
    artifacts: Arc<dyn ArtifactStore>,
    transcribers: Arc<dyn TranscriptionEngineSelector>,
    llm_clients: Arc<dyn LlmClientSelector>,
}

#[derive(Debug)]
pub struct ShowNoteOutcome {
    pub job_id: JobId,
    pub title: String,
    /// `None` for info-only requests.
    pub document: Option<ShowNoteDocument>,
    pub document_path: Option<PathBuf>,
}

impl ShowNoteService {
    pub fn new(
        media: Arc<dyn MediaSource>,
        artifacts: Arc<dyn ArtifactStore>,
        transcribers: Arc<dyn TranscriptionEngineSelector>,
        llm_clients: Arc<dyn LlmClientSelector>,
    ) -> Self {
        Self {
            media,
            artifacts,
            transcribers,
            llm_clients,
        }
    }

    #[tracing::instrument(skip(self, config), fields(url = %url))]
    pub async fn run(
        &self,
        url: &str,
        config: &JobConfig,
    ) -> Result<ShowNoteOutcome, PipelineError> {
        let metadata = self.media.probe(url).await?;
        let job_id = JobId::for_episode(&metadata);
        tracing::info!(job_id = %job_id, title = %metadata.title, "episode resolved");

        if config.info {
            tracing::info!(job_id = %job_id, "info-only request, skipping generation");
            return Ok(ShowNoteOutcome {
                job_id,
                title: metadata.title,
                document: None,
                document_path: None,
            });
        }

        let front_matter = FrontMatter::from_metadata(&metadata).render();
        self.artifacts
            .write(
                &job_id,
                ArtifactKind::FrontMatter,
                Bytes::from(front_matter.clone()),
            )
            .await?;

        let audio_path = self.artifacts.local_path(&job_id, ArtifactKind::Audio);
        self.media.download_audio(url, &audio_path).await?;

        let backend = config.transcription.provider.as_str();
        let engine = self
            .transcribers
            .select(&config.transcription, config.speaker_labels)
            .map_err(|source| PipelineError::Transcription { backend, source })?;
        let raw = engine
            .transcribe(&audio_path)
            .await
            .map_err(|source| PipelineError::Transcription { backend, source })?;
        tracing::info!(backend, "transcription completed");

        if let RawTranscript::Lyrics(lrc) = &raw {
            self.artifacts
                .write(&job_id, ArtifactKind::Lyrics, Bytes::from(lrc.clone()))
                .await?;
        }

        let transcript = normalize(&raw, config.speaker_labels)
            .map_err(|source| PipelineError::Formatting { backend, source })?;
        self.artifacts
            .write(
                &job_id,
                ArtifactKind::Transcript,
                Bytes::from(transcript.as_str().to_owned()),
            )
            .await?;

        let body = match &config.llm {
            Some(selection) => {
                let llm_backend = selection.provider.as_str();
                let client = self.llm_clients.select(selection).map_err(|source| {
                    PipelineError::Llm {
                        backend: llm_backend,
                        source,
                    }
                })?;
                let template = config.prompt.as_deref().unwrap_or(DEFAULT_PROMPT);
                let prompt = assemble(&front_matter, template, transcript.as_str());
                let generated =
                    client
                        .complete(&prompt)
                        .await
                        .map_err(|source| PipelineError::Llm {
                            backend: llm_backend,
                            source,
                        })?;
                tracing::info!(backend = llm_backend, chars = generated.len(), "show notes generated");
                generated
            }
            None => {
                tracing::info!("no llm backend selected, emitting transcript-only document");
                transcript.as_str().to_owned()
            }
        };

        let document = ShowNoteDocument::new(front_matter, body);
        let document_path = self
            .artifacts
            .write_document(&job_id, Bytes::from(document.render()))
            .await?;
        tracing::info!(path = %document_path.display(), "show note document written");

        if config.no_clean_up {
            tracing::info!(job_id = %job_id, "cleanup suppressed by request");
        } else {
            sweep_artifacts(self.artifacts.as_ref(), &job_id).await;
        }

        Ok(ShowNoteOutcome {
            job_id,
            title: metadata.title,
            document: Some(document),
            document_path: Some(document_path),
        })
    }
}

/// Best-effort removal of a job's temp artifacts. Outcomes are collected and
/// logged; a missing file counts as success and nothing here ever fails the
/// job.
pub async fn sweep_artifacts(store: &dyn ArtifactStore, job_id: &JobId) {
    for kind in ArtifactKind::ALL {
        match store.delete(job_id, kind).await {
            Ok(()) => {
                tracing::info!(artifact = %kind.file_name(job_id), "removed temp artifact");
            }
            Err(ArtifactStoreError::NotFound(_)) => {}
            Err(error) => {
                tracing::warn!(
                    artifact = %kind.file_name(job_id),
                    error = %error,
                    "failed to remove temp artifact"
                );
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("media source: {0}")]
    Media(#[from] MediaSourceError),
    #[error("transcription backend {backend}: {source}")]
    Transcription {
        backend: &'static str,
        #[source]
        source: TranscriptionError,
    },
    #[error("transcript formatting for {backend}: {source}")]
    Formatting {
        backend: &'static str,
        #[source]
        source: FormattingError,
    },
    #[error("llm backend {backend}: {source}")]
    Llm {
        backend: &'static str,
        #[source]
        source: LlmClientError,
    },
    #[error("artifact store: {0}")]
    Artifacts(#[from] ArtifactStoreError),
}
