use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::EpisodeMetadata;

/// Media acquisition collaborator: metadata probe and audio extraction.
#[async_trait]
pub trait MediaSource: Send + Sync {
    async fn probe(&self, url: &str) -> Result<EpisodeMetadata, MediaSourceError>;

    /// Extract the source's audio track as WAV at `dest`.
    async fn download_audio(&self, url: &str, dest: &Path) -> Result<(), MediaSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MediaSourceError {
    #[error("failed to launch {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },
    #[error("{tool} failed: {detail}")]
    ToolFailed { tool: String, detail: String },
    #[error("metadata parse failed: {0}")]
    MetadataParse(String),
}
