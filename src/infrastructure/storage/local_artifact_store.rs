use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ArtifactStore, ArtifactStoreError};
use crate::domain::{ArtifactKind, JobId};

/// Filesystem-backed artifact store rooted at one base directory. Temp
/// artifacts live directly under the root as `<job id><ext>`; the finished
/// document is `<job id>-shownotes.md`, outside the temp extension set.
pub struct LocalArtifactStore {
    inner: Arc<LocalFileSystem>,
    base_dir: PathBuf,
}

impl LocalArtifactStore {
    pub fn new(base_dir: PathBuf) -> Result<Self, ArtifactStoreError> {
        std::fs::create_dir_all(&base_dir).map_err(ArtifactStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(&base_dir)
            .map_err(|e| ArtifactStoreError::WriteFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            base_dir,
        })
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    async fn put(&self, name: &str, data: Bytes) -> Result<(), ArtifactStoreError> {
        self.inner
            .put(&StorePath::from(name), PutPayload::from(data))
            .await
            .map(|_| ())
            .map_err(|e| ArtifactStoreError::WriteFailed(format!("{}: {}", name, e)))
    }
}

#[async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn write(
        &self,
        job_id: &JobId,
        kind: ArtifactKind,
        data: Bytes,
    ) -> Result<(), ArtifactStoreError> {
        self.put(&kind.file_name(job_id), data).await
    }

    async fn read(
        &self,
        job_id: &JobId,
        kind: ArtifactKind,
    ) -> Result<Vec<u8>, ArtifactStoreError> {
        let name = kind.file_name(job_id);
        let result = self
            .inner
            .get(&StorePath::from(name.as_str()))
            .await
            .map_err(|e| match e {
                object_store::Error::NotFound { .. } => ArtifactStoreError::NotFound(name.clone()),
                other => ArtifactStoreError::ReadFailed(format!("{}: {}", name, other)),
            })?;
        let bytes = result
            .bytes()
            .await
            .map_err(|e| ArtifactStoreError::ReadFailed(format!("{}: {}", name, e)))?;
        Ok(bytes.to_vec())
    }

    async fn delete(&self, job_id: &JobId, kind: ArtifactKind) -> Result<(), ArtifactStoreError> {
        let name = kind.file_name(job_id);
        self.inner
            .delete(&StorePath::from(name.as_str()))
            .await
            .map_err(|e| match e {
                object_store::Error::NotFound { .. } => ArtifactStoreError::NotFound(name.clone()),
                other => ArtifactStoreError::DeleteFailed(format!("{}: {}", name, other)),
            })
    }

    async fn write_document(
        &self,
        job_id: &JobId,
        data: Bytes,
    ) -> Result<PathBuf, ArtifactStoreError> {
        let name = format!("{}-shownotes.md", job_id.as_str());
        self.put(&name, data).await?;
        Ok(self.base_dir.join(name))
    }

    fn local_path(&self, job_id: &JobId, kind: ArtifactKind) -> PathBuf {
        self.base_dir.join(kind.file_name(job_id))
    }
}
