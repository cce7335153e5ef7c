use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use showscribe::application::ports::{
    AssemblyTranscript, AssemblyUtterance, LlmClient, LlmClientError, LlmClientSelector,
    MediaSource, MediaSourceError, RawTranscript, TranscriptionEngine, TranscriptionEngineSelector,
    TranscriptionError,
};
use showscribe::application::services::{PipelineError, ShowNoteService};
use showscribe::domain::{
    EpisodeMetadata, JobConfig, LlmProvider, LlmSelection, TranscriptionProvider,
    TranscriptionSelection,
};
use showscribe::infrastructure::storage::LocalArtifactStore;

struct StubMediaSource;

#[async_trait]
impl MediaSource for StubMediaSource {
    async fn probe(&self, url: &str) -> Result<EpisodeMetadata, MediaSourceError> {
        Ok(EpisodeMetadata {
            show_link: url.to_string(),
            channel: "Stub Channel".to_string(),
            channel_url: "https://example.com/stub".to_string(),
            title: "Stub Episode".to_string(),
            publish_date: "2024-03-21".to_string(),
            cover_image: "https://example.com/cover.jpg".to_string(),
        })
    }

    async fn download_audio(&self, _url: &str, dest: &Path) -> Result<(), MediaSourceError> {
        tokio::fs::write(dest, b"RIFF fake wav")
            .await
            .map_err(|source| MediaSourceError::Spawn {
                tool: "stub".to_string(),
                source,
            })
    }
}

struct StubEngine {
    raw: RawTranscript,
}

#[async_trait]
impl TranscriptionEngine for StubEngine {
    async fn transcribe(&self, _audio_path: &Path) -> Result<RawTranscript, TranscriptionError> {
        Ok(self.raw.clone())
    }
}

struct StubEngineSelector {
    raw: RawTranscript,
}

impl TranscriptionEngineSelector for StubEngineSelector {
    fn select(
        &self,
        _selection: &TranscriptionSelection,
        _speaker_labels: bool,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        Ok(Arc::new(StubEngine {
            raw: self.raw.clone(),
        }))
    }
}

struct FailingEngineSelector;

impl TranscriptionEngineSelector for FailingEngineSelector {
    fn select(
        &self,
        _selection: &TranscriptionSelection,
        _speaker_labels: bool,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        Err(TranscriptionError::MissingApiKey("deepgram"))
    }
}

struct StubLlmClient;

#[async_trait]
impl LlmClient for StubLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        assert!(prompt.contains("Stub Episode"));
        Ok("## Potential Titles\n\nGenerated show notes.".to_string())
    }
}

struct StubLlmSelector;

impl LlmClientSelector for StubLlmSelector {
    fn select(&self, _selection: &LlmSelection) -> Result<Arc<dyn LlmClient>, LlmClientError> {
        Ok(Arc::new(StubLlmClient))
    }
}

fn utterance_transcript() -> RawTranscript {
    RawTranscript::Assembly(AssemblyTranscript {
        utterances: Some(vec![
            AssemblyUtterance {
                speaker: "1".to_string(),
                start: 0,
                text: "Hello".to_string(),
            },
            AssemblyUtterance {
                speaker: "2".to_string(),
                start: 61_000,
                text: "Hi".to_string(),
            },
        ]),
        words: None,
        text: None,
    })
}

fn service_over(
    dir: &tempfile::TempDir,
    transcribers: Arc<dyn TranscriptionEngineSelector>,
) -> ShowNoteService {
    let artifacts = Arc::new(LocalArtifactStore::new(dir.path().to_path_buf()).unwrap());
    ShowNoteService::new(
        Arc::new(StubMediaSource),
        artifacts,
        transcribers,
        Arc::new(StubLlmSelector),
    )
}

fn config() -> JobConfig {
    JobConfig {
        transcription: TranscriptionSelection {
            provider: TranscriptionProvider::Assembly,
            model: None,
        },
        llm: Some(LlmSelection {
            provider: LlmProvider::Claude,
            model: None,
        }),
        speaker_labels: true,
        prompt: None,
        no_clean_up: false,
        order: None,
        skip: None,
        info: false,
        item: None,
    }
}

#[tokio::test]
async fn given_full_pipeline_when_running_then_document_carries_front_matter_and_notes() {
    let dir = tempfile::TempDir::new().unwrap();
    let service = service_over(&dir, Arc::new(StubEngineSelector {
        raw: utterance_transcript(),
    }));

    let outcome = service
        .run("https://example.com/episode", &config())
        .await
        .unwrap();

    let path = outcome.document_path.unwrap();
    let written = tokio::fs::read_to_string(&path).await.unwrap();
    assert!(written.starts_with("---\n"));
    assert!(written.contains("title: \"Stub Episode\""));
    assert!(written.contains("Generated show notes."));
    assert_eq!(outcome.job_id.as_str(), "2024-03-21-stub-episode");
}

#[tokio::test]
async fn given_successful_run_when_finished_then_temp_artifacts_are_swept() {
    let dir = tempfile::TempDir::new().unwrap();
    let service = service_over(&dir, Arc::new(StubEngineSelector {
        raw: utterance_transcript(),
    }));

    service
        .run("https://example.com/episode", &config())
        .await
        .unwrap();

    assert!(!dir.path().join("2024-03-21-stub-episode.wav").exists());
    assert!(!dir.path().join("2024-03-21-stub-episode.txt").exists());
    assert!(!dir.path().join("2024-03-21-stub-episode.md").exists());
    assert!(dir.path().join("2024-03-21-stub-episode-shownotes.md").exists());
}

#[tokio::test]
async fn given_no_clean_up_flag_when_finished_then_temp_artifacts_remain() {
    let dir = tempfile::TempDir::new().unwrap();
    let service = service_over(&dir, Arc::new(StubEngineSelector {
        raw: utterance_transcript(),
    }));
    let mut config = config();
    config.no_clean_up = true;

    service
        .run("https://example.com/episode", &config)
        .await
        .unwrap();

    assert!(dir.path().join("2024-03-21-stub-episode.wav").exists());
    assert!(dir.path().join("2024-03-21-stub-episode.txt").exists());
    assert!(dir.path().join("2024-03-21-stub-episode.md").exists());
}

#[tokio::test]
async fn given_no_llm_selection_when_running_then_body_is_the_transcript() {
    let dir = tempfile::TempDir::new().unwrap();
    let service = service_over(&dir, Arc::new(StubEngineSelector {
        raw: utterance_transcript(),
    }));
    let mut config = config();
    config.llm = None;

    let outcome = service
        .run("https://example.com/episode", &config)
        .await
        .unwrap();

    let document = outcome.document.unwrap();
    assert_eq!(
        document.body,
        "Speaker 1 (00:00): Hello\nSpeaker 2 (01:01): Hi"
    );
}

#[tokio::test]
async fn given_info_flag_when_running_then_no_artifacts_are_produced() {
    let dir = tempfile::TempDir::new().unwrap();
    let service = service_over(&dir, Arc::new(StubEngineSelector {
        raw: utterance_transcript(),
    }));
    let mut config = config();
    config.info = true;

    let outcome = service
        .run("https://example.com/episode", &config)
        .await
        .unwrap();

    assert!(outcome.document.is_none());
    assert!(outcome.document_path.is_none());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn given_failing_transcription_backend_when_running_then_error_carries_the_tag() {
    let dir = tempfile::TempDir::new().unwrap();
    let service = service_over(&dir, Arc::new(FailingEngineSelector));

    let error = service
        .run("https://example.com/episode", &config())
        .await
        .unwrap_err();

    match error {
        PipelineError::Transcription { backend, .. } => assert_eq!(backend, "assembly"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn given_failed_job_when_inspecting_dir_then_temp_artifacts_are_left_for_diagnosis() {
    let dir = tempfile::TempDir::new().unwrap();
    let service = service_over(&dir, Arc::new(FailingEngineSelector));

    let _ = service
        .run("https://example.com/episode", &config())
        .await
        .unwrap_err();

    // Front matter and audio were staged before the failing stage; a failed
    // job never sweeps.
    assert!(dir.path().join("2024-03-21-stub-episode.md").exists());
    assert!(dir.path().join("2024-03-21-stub-episode.wav").exists());
}
