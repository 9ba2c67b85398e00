use crate::domain::entities::PendingLogEntry;
use crate::shared::error::Result;
use async_trait::async_trait;

/// Durable backing store for the offline queue. Implementations persist the
/// whole list on every write; callers serialize access through the queue's
/// single-writer gate.
#[async_trait]
pub trait QueuePersistence: Send + Sync {
    /// Load every persisted entry. A store that has never been written to
    /// reports an empty list, not an error.
    async fn load(&self) -> Result<Vec<PendingLogEntry>>;

    /// Replace the persisted list. A failed write must surface as an error,
    /// never as silent success.
    async fn persist(&self, entries: &[PendingLogEntry]) -> Result<()>;
}
