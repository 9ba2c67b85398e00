use crate::application::ports::queue_store::QueuePersistence;
use crate::application::ports::remote_backend::RemoteLogRecord;
use crate::domain::entities::{EntryDraft, PendingLogEntry};
use crate::domain::value_objects::{EntryId, LogDate};
use crate::shared::error::Result;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Survive-restart store of pending log entries. Every mutation and the sync
/// snapshot pass through one gate, so the store's read-modify-write cycles
/// never interleave: an append landing mid-sync is neither lost nor
/// double-submitted.
pub struct OfflineQueue {
    store: Arc<dyn QueuePersistence>,
    gate: Mutex<()>,
}

impl OfflineQueue {
    pub fn new(store: Arc<dyn QueuePersistence>) -> Self {
        Self {
            store,
            gate: Mutex::new(()),
        }
    }

    /// Assign identity, stamp the creation instant, and persist as one
    /// logical step. Returns the generated id.
    pub async fn append(&self, draft: EntryDraft) -> Result<EntryId> {
        let _guard = self.gate.lock().await;
        let mut entries = self.store.load().await?;
        let entry = PendingLogEntry::from_draft(draft);
        let id = entry.id.clone();
        entries.push(entry);
        self.store.persist(&entries).await?;
        debug!(id = %id, pending = entries.len(), "appended offline log entry");
        Ok(id)
    }

    /// All entries in insertion order. Callers sort and group for display.
    pub async fn list(&self) -> Result<Vec<PendingLogEntry>> {
        let _guard = self.gate.lock().await;
        self.store.load().await
    }

    pub async fn list_by_date(&self, date: &LogDate) -> Result<Vec<PendingLogEntry>> {
        let mut entries = self.list().await?;
        entries.retain(|entry| &entry.date == date);
        Ok(entries)
    }

    pub async fn get(&self, id: &EntryId) -> Result<Option<PendingLogEntry>> {
        let entries = self.list().await?;
        Ok(entries.into_iter().find(|entry| &entry.id == id))
    }

    /// Remove exactly one entry by id. Returns whether anything was removed;
    /// an unknown id is a no-op.
    pub async fn remove(&self, id: &EntryId) -> Result<bool> {
        let _guard = self.gate.lock().await;
        let mut entries = self.store.load().await?;
        let before = entries.len();
        entries.retain(|entry| &entry.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        self.store.persist(&entries).await?;
        debug!(id = %id, "removed offline log entry");
        Ok(true)
    }

    /// Remove every entry whose id appears in `ids`. Used by the reconciler
    /// so that clearance drops exactly the entries that were submitted.
    pub async fn remove_batch(&self, ids: &[EntryId]) -> Result<()> {
        let _guard = self.gate.lock().await;
        let removing: HashSet<&EntryId> = ids.iter().collect();
        let mut entries = self.store.load().await?;
        entries.retain(|entry| !removing.contains(&entry.id));
        self.store.persist(&entries).await?;
        debug!(removed = ids.len(), remaining = entries.len(), "cleared synced entries");
        Ok(())
    }

    /// Rewrite the queue as empty. Idempotent.
    pub async fn clear(&self) -> Result<()> {
        let _guard = self.gate.lock().await;
        self.store.persist(&[]).await
    }

    pub async fn count(&self) -> Result<usize> {
        Ok(self.list().await?.len())
    }

    pub async fn has_pending(&self) -> Result<bool> {
        Ok(self.count().await? > 0)
    }

    /// Gated snapshot of the current entries, for a sync attempt.
    pub async fn sync_snapshot(&self) -> Result<Vec<PendingLogEntry>> {
        let _guard = self.gate.lock().await;
        self.store.load().await
    }

    /// The batch payload for the remote endpoint: local-only fields stripped,
    /// optional fields only when present.
    pub async fn sync_payload(&self) -> Result<Vec<RemoteLogRecord>> {
        let entries = self.sync_snapshot().await?;
        Ok(entries.iter().map(RemoteLogRecord::from_entry).collect())
    }
}
