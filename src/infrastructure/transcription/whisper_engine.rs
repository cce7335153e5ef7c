use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{RawTranscript, TranscriptionEngine, TranscriptionError};

/// Model names whisper.cpp ships ggml weights for.
const WHISPER_MODELS: &[&str] = &[
    "tiny",
    "tiny.en",
    "base",
    "base.en",
    "small",
    "small.en",
    "medium",
    "medium.en",
    "large-v1",
    "large-v2",
    "large-v3",
    "large-v3-turbo",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhisperMode {
    /// whisper.cpp binary on the host.
    Native,
    /// whisper.cpp inside a container, with the artifact and model
    /// directories bind-mounted.
    Docker,
}

/// Local whisper.cpp adapter. The CLI writes `<stem>.lrc` next to the input
/// audio; the engine reads it back and returns it as the raw result.
pub struct WhisperEngine {
    mode: WhisperMode,
    model: String,
    binary: String,
    model_dir: PathBuf,
    docker_image: String,
}

impl WhisperEngine {
    pub fn new(
        mode: WhisperMode,
        model: &str,
        binary: impl Into<String>,
        model_dir: impl Into<PathBuf>,
        docker_image: impl Into<String>,
    ) -> Result<Self, TranscriptionError> {
        if !WHISPER_MODELS.contains(&model) {
            return Err(TranscriptionError::ModelLoadFailed(format!(
                "unknown whisper model: {}",
                model
            )));
        }
        Ok(Self {
            mode,
            model: model.to_string(),
            binary: binary.into(),
            model_dir: model_dir.into(),
            docker_image: docker_image.into(),
        })
    }

    fn model_file(&self) -> String {
        format!("ggml-{}.bin", self.model)
    }

    fn native_command(&self, audio_path: &Path, stem: &Path) -> Command {
        let mut command = Command::new(&self.binary);
        command
            .arg("-m")
            .arg(self.model_dir.join(self.model_file()))
            .arg("-f")
            .arg(audio_path)
            .arg("-of")
            .arg(stem)
            .arg("-olrc");
        command
    }

    fn docker_command(
        &self,
        audio_path: &Path,
        stem: &Path,
    ) -> Result<Command, TranscriptionError> {
        let work_dir = audio_path.parent().ok_or_else(|| {
            TranscriptionError::AudioIo(format!("no parent directory: {}", audio_path.display()))
        })?;
        let audio_name = file_name(audio_path)?;
        let stem_name = file_name(stem)?;

        let mut command = Command::new("docker");
        command
            .arg("run")
            .arg("--rm")
            .arg("-v")
            .arg(format!("{}:/work", work_dir.display()))
            .arg("-v")
            .arg(format!("{}:/models", self.model_dir.display()))
            .arg(&self.docker_image)
            .arg("-m")
            .arg(format!("/models/{}", self.model_file()))
            .arg("-f")
            .arg(format!("/work/{}", audio_name))
            .arg("-of")
            .arg(format!("/work/{}", stem_name))
            .arg("-olrc");
        Ok(command)
    }
}

fn file_name(path: &Path) -> Result<&str, TranscriptionError> {
    path.file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| TranscriptionError::AudioIo(format!("bad path: {}", path.display())))
}

#[async_trait]
impl TranscriptionEngine for WhisperEngine {
    async fn transcribe(&self, audio_path: &Path) -> Result<RawTranscript, TranscriptionError> {
        let stem = audio_path.with_extension("");
        let mut command = match self.mode {
            WhisperMode::Native => self.native_command(audio_path, &stem),
            WhisperMode::Docker => self.docker_command(audio_path, &stem)?,
        };

        tracing::debug!(model = %self.model, mode = ?self.mode, "running whisper.cpp");
        let output = command
            .output()
            .await
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("spawn: {}", e)))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TranscriptionError::TranscriptionFailed(format!(
                "whisper exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let lrc_path = stem.with_extension("lrc");
        let lrc = tokio::fs::read_to_string(&lrc_path)
            .await
            .map_err(|e| TranscriptionError::AudioIo(format!("{}: {}", lrc_path.display(), e)))?;

        tracing::info!(chars = lrc.len(), "whisper transcription completed");
        Ok(RawTranscript::Lyrics(lrc))
    }
}
