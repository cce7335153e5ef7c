use bytes::Bytes;

use showscribe::application::ports::{ArtifactStore, ArtifactStoreError};
use showscribe::application::services::sweep_artifacts;
use showscribe::domain::{ArtifactKind, JobId};
use showscribe::infrastructure::storage::LocalArtifactStore;

fn create_test_store() -> (tempfile::TempDir, LocalArtifactStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalArtifactStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_written_artifact_when_reading_then_bytes_match() {
    let (_dir, store) = create_test_store();
    let job_id = JobId::from_raw("2024-03-21-episode");

    store
        .write(&job_id, ArtifactKind::Transcript, Bytes::from("hello"))
        .await
        .unwrap();

    let read_back = store.read(&job_id, ArtifactKind::Transcript).await.unwrap();
    assert_eq!(read_back, b"hello");
}

#[tokio::test]
async fn given_written_artifact_when_checking_disk_then_it_is_named_by_job_id_and_extension() {
    let (dir, store) = create_test_store();
    let job_id = JobId::from_raw("2024-03-21-episode");

    store
        .write(&job_id, ArtifactKind::Audio, Bytes::from_static(b"RIFF"))
        .await
        .unwrap();

    assert!(dir.path().join("2024-03-21-episode.wav").exists());
}

#[tokio::test]
async fn given_missing_artifact_when_deleting_then_not_found_is_returned() {
    let (_dir, store) = create_test_store();
    let job_id = JobId::from_raw("nothing-here");

    let result = store.delete(&job_id, ArtifactKind::Lyrics).await;

    assert!(matches!(result, Err(ArtifactStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_document_write_when_finishing_then_path_is_outside_the_temp_set() {
    let (dir, store) = create_test_store();
    let job_id = JobId::from_raw("2024-03-21-episode");

    let path = store
        .write_document(&job_id, Bytes::from("# notes"))
        .await
        .unwrap();

    assert_eq!(path, dir.path().join("2024-03-21-episode-shownotes.md"));
    assert!(path.exists());
}

#[tokio::test]
async fn given_only_some_artifacts_present_when_sweeping_then_all_outcomes_are_nonfatal() {
    let (dir, store) = create_test_store();
    let job_id = JobId::from_raw("2024-03-21-episode");

    store
        .write(&job_id, ArtifactKind::Audio, Bytes::from_static(b"RIFF"))
        .await
        .unwrap();
    store
        .write(&job_id, ArtifactKind::FrontMatter, Bytes::from("---"))
        .await
        .unwrap();

    // .lrc and .txt were never written; the sweep must still complete.
    sweep_artifacts(&store, &job_id).await;

    assert!(!dir.path().join("2024-03-21-episode.wav").exists());
    assert!(!dir.path().join("2024-03-21-episode.md").exists());
}

#[tokio::test]
async fn given_finished_document_when_sweeping_then_it_survives() {
    let (_dir, store) = create_test_store();
    let job_id = JobId::from_raw("2024-03-21-episode");

    for kind in ArtifactKind::ALL {
        store
            .write(&job_id, kind, Bytes::from_static(b"tmp"))
            .await
            .unwrap();
    }
    let document_path = store
        .write_document(&job_id, Bytes::from("# notes"))
        .await
        .unwrap();

    sweep_artifacts(&store, &job_id).await;

    assert!(document_path.exists());
    for kind in ArtifactKind::ALL {
        let result = store.read(&job_id, kind).await;
        assert!(matches!(result, Err(ArtifactStoreError::NotFound(_))));
    }
}
