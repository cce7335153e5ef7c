use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{ArtifactKind, JobId};

/// Per-job temp file storage, namespaced by job id. The store also writes the
/// terminal document, whose name is outside the temp extension set so it
/// survives cleanup.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    async fn write(
        &self,
        job_id: &JobId,
        kind: ArtifactKind,
        data: Bytes,
    ) -> Result<(), ArtifactStoreError>;

    async fn read(&self, job_id: &JobId, kind: ArtifactKind) -> Result<Vec<u8>, ArtifactStoreError>;

    async fn delete(&self, job_id: &JobId, kind: ArtifactKind) -> Result<(), ArtifactStoreError>;

    /// Write the finished show-note document and return its path.
    async fn write_document(
        &self,
        job_id: &JobId,
        data: Bytes,
    ) -> Result<PathBuf, ArtifactStoreError>;

    /// Filesystem location of a temp artifact, for adapters that drive
    /// external processes against real paths.
    fn local_path(&self, job_id: &JobId, kind: ArtifactKind) -> PathBuf;
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactStoreError {
    #[error("artifact not found: {0}")]
    NotFound(String),
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
