use crate::application::ports::queue_store::QueuePersistence;
use crate::domain::entities::PendingLogEntry;
use crate::shared::error::{AppError, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// Flat-JSON-array queue file. The whole list is rewritten on every persist;
/// serialization through the queue's writer gate keeps that safe.
pub struct JsonQueueStore {
    path: PathBuf,
}

impl JsonQueueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl QueuePersistence for JsonQueueStore {
    async fn load(&self) -> Result<Vec<PendingLogEntry>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(AppError::Storage(err.to_string())),
        };
        serde_json::from_slice(&bytes)
            .map_err(|err| AppError::Storage(format!("queue file corrupted: {err}")))
    }

    async fn persist(&self, entries: &[PendingLogEntry]) -> Result<()> {
        let bytes = serde_json::to_vec(entries)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| AppError::Storage(err.to_string()))?;
        }
        fs::write(&self.path, bytes)
            .await
            .map_err(|err| AppError::Storage(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{EntryDraft, SetRecord};
    use crate::domain::value_objects::{LogDate, Measure, SetClass};

    fn entry(activity: &str) -> PendingLogEntry {
        PendingLogEntry::from_draft(EntryDraft::new(
            LogDate::new("2025-01-10".to_string()).unwrap(),
            activity,
            vec![SetRecord::new(Measure::Kg, SetClass::Normal)
                .with_value("100")
                .with_reps("5")],
        ))
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonQueueStore::new(dir.path().join("pending_logs.json"));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn entries_survive_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pending_logs.json");

        let store = JsonQueueStore::new(path.clone());
        let entries = vec![entry("squat"), entry("bench")];
        store.persist(&entries).await.unwrap();

        // A fresh store over the same file sees the same entries.
        let reopened = JsonQueueStore::new(path);
        assert_eq!(reopened.load().await.unwrap(), entries);
    }

    #[tokio::test]
    async fn file_is_a_flat_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pending_logs.json");
        let store = JsonQueueStore::new(path.clone());
        store.persist(&[entry("squat")]).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert!(array[0].get("id").is_some());
        assert!(array[0].get("timestamp").is_some());
    }

    #[tokio::test]
    async fn corrupted_file_reports_storage_fault() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pending_logs.json");
        std::fs::write(&path, b"not json").unwrap();

        let store = JsonQueueStore::new(path);
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[tokio::test]
    async fn persist_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("pending_logs.json");
        let store = JsonQueueStore::new(path);
        store.persist(&[entry("squat")]).await.unwrap();
        assert_eq!(store.load().await.unwrap().len(), 1);
    }
}
