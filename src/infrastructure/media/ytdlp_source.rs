use std::path::Path;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use tokio::process::Command;

use crate::application::ports::{MediaSource, MediaSourceError};
use crate::domain::EpisodeMetadata;

/// yt-dlp subprocess adapter: one invocation to probe metadata, one to
/// extract the audio track. ffmpeg does the WAV resample as a yt-dlp
/// postprocessor, so both executables must be on PATH.
pub struct YtDlpSource {
    binary: String,
}

impl YtDlpSource {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for YtDlpSource {
    fn default() -> Self {
        Self::new("yt-dlp")
    }
}

#[derive(Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    webpage_url: Option<String>,
    #[serde(default)]
    uploader: Option<String>,
    #[serde(default)]
    uploader_url: Option<String>,
    #[serde(default)]
    channel_url: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    upload_date: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
}

#[async_trait]
impl MediaSource for YtDlpSource {
    async fn probe(&self, url: &str) -> Result<EpisodeMetadata, MediaSourceError> {
        let output = Command::new(&self.binary)
            .args(["--dump-single-json", "--no-warnings", "--skip-download"])
            .arg(url)
            .output()
            .await
            .map_err(|source| MediaSourceError::Spawn {
                tool: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(MediaSourceError::ToolFailed {
                tool: self.binary.clone(),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let probe: ProbeOutput = serde_json::from_slice(&output.stdout)
            .map_err(|e| MediaSourceError::MetadataParse(e.to_string()))?;

        Ok(EpisodeMetadata {
            show_link: probe.webpage_url.unwrap_or_else(|| url.to_string()),
            channel: probe.uploader.unwrap_or_default(),
            channel_url: probe.uploader_url.or(probe.channel_url).unwrap_or_default(),
            title: probe.title.unwrap_or_else(|| "untitled".to_string()),
            publish_date: probe
                .upload_date
                .as_deref()
                .map(format_upload_date)
                .unwrap_or_default(),
            cover_image: probe.thumbnail.unwrap_or_default(),
        })
    }

    async fn download_audio(&self, url: &str, dest: &Path) -> Result<(), MediaSourceError> {
        // yt-dlp appends the postprocessed extension itself, so the output
        // template is the destination stem.
        let template = format!("{}.%(ext)s", dest.with_extension("").display());

        tracing::debug!(dest = %dest.display(), "extracting audio with yt-dlp");
        let output = Command::new(&self.binary)
            .args([
                "--extract-audio",
                "--audio-format",
                "wav",
                "--postprocessor-args",
                "ffmpeg:-ar 16000",
                "--no-playlist",
                "-o",
            ])
            .arg(&template)
            .arg(url)
            .output()
            .await
            .map_err(|source| MediaSourceError::Spawn {
                tool: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(MediaSourceError::ToolFailed {
                tool: self.binary.clone(),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        tracing::info!(dest = %dest.display(), "audio extracted");
        Ok(())
    }
}

/// yt-dlp reports `YYYYMMDD`; front matter carries `YYYY-MM-DD`. Unparseable
/// values pass through untouched.
fn format_upload_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y%m%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
