use crate::application::ports::remote_backend::{RemoteBackend, RemoteLogRecord};
use crate::application::ports::session::SessionGateway;
use crate::application::ports::view_cache::ViewCache;
use crate::application::services::queue_service::OfflineQueue;
use crate::domain::value_objects::{EntryId, ViewKey};
use crate::shared::config::SyncConfig;
use crate::shared::error::Result;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// What caused a sync attempt; each trigger carries its own cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncTrigger {
    ConnectivityRestored,
    ScreenFocus,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Completed { synced: usize },
    NoSession,
    QueueEmpty,
    AlreadySyncing,
    CoolingDown,
}

#[derive(Debug, Clone, Default)]
pub struct SyncStatus {
    pub is_syncing: bool,
    pub last_attempt: Option<DateTime<Utc>>,
    pub last_synced_count: usize,
}

#[derive(Default)]
struct SyncState {
    is_syncing: bool,
    last_attempt: Option<Instant>,
    last_attempt_at: Option<DateTime<Utc>>,
    last_synced_count: usize,
}

/// Opportunistically flushes the offline queue to the remote backend: at most
/// one attempt in flight, one batch call per attempt, queue untouched unless
/// the whole batch is accepted.
pub struct SyncReconciler {
    queue: Arc<OfflineQueue>,
    remote: Arc<dyn RemoteBackend>,
    session: Arc<dyn SessionGateway>,
    cache: Arc<dyn ViewCache>,
    settings: SyncConfig,
    state: RwLock<SyncState>,
}

impl SyncReconciler {
    pub fn new(
        queue: Arc<OfflineQueue>,
        remote: Arc<dyn RemoteBackend>,
        session: Arc<dyn SessionGateway>,
        cache: Arc<dyn ViewCache>,
        settings: SyncConfig,
    ) -> Self {
        Self {
            queue,
            remote,
            session,
            cache,
            settings,
            state: RwLock::new(SyncState::default()),
        }
    }

    fn cooldown(&self, trigger: SyncTrigger) -> Duration {
        match trigger {
            SyncTrigger::ConnectivityRestored => {
                Duration::from_secs(self.settings.restore_cooldown_secs)
            }
            SyncTrigger::ScreenFocus => Duration::from_secs(self.settings.focus_cooldown_secs),
            SyncTrigger::Manual => Duration::ZERO,
        }
    }

    /// Attempt one batch flush. No-ops without a session, with an empty
    /// queue, while an attempt is in flight, or within the trigger's
    /// cooldown of the previous attempt.
    pub async fn sync_now(&self, trigger: SyncTrigger) -> Result<SyncOutcome> {
        if self.session.current_session().await.is_none() {
            debug!("sync skipped: no authenticated session");
            return Ok(SyncOutcome::NoSession);
        }

        let entries = self.queue.sync_snapshot().await?;
        if entries.is_empty() {
            return Ok(SyncOutcome::QueueEmpty);
        }

        {
            let mut state = self.state.write().await;
            if state.is_syncing {
                debug!("sync skipped: attempt already in flight");
                return Ok(SyncOutcome::AlreadySyncing);
            }
            if let Some(last) = state.last_attempt {
                if last.elapsed() < self.cooldown(trigger) {
                    debug!(?trigger, "sync skipped: within cooldown");
                    return Ok(SyncOutcome::CoolingDown);
                }
            }
            state.is_syncing = true;
        }

        let ids: Vec<EntryId> = entries.iter().map(|entry| entry.id.clone()).collect();
        let records: Vec<RemoteLogRecord> =
            entries.iter().map(RemoteLogRecord::from_entry).collect();
        let views: BTreeSet<ViewKey> = entries
            .iter()
            .flat_map(|entry| [ViewKey::day(&entry.date), ViewKey::month(&entry.date)])
            .collect();

        info!(count = records.len(), ?trigger, "submitting offline batch");
        let outcome = match self.remote.sync_logs(records).await {
            Ok(()) => {
                // Clear exactly what was submitted; an append that raced the
                // batch call stays queued for the next attempt.
                self.queue.remove_batch(&ids).await.map(|()| ids.len())
            }
            Err(err) => {
                warn!(error = %err, "batch sync failed, queue left untouched");
                Err(err)
            }
        };

        {
            let mut state = self.state.write().await;
            state.is_syncing = false;
            state.last_attempt = Some(Instant::now());
            state.last_attempt_at = Some(Utc::now());
            if let Ok(synced) = &outcome {
                state.last_synced_count = *synced;
            }
        }

        let synced = outcome?;
        for key in views {
            self.cache.invalidate(key).await;
        }
        info!(synced, "offline batch accepted, views invalidated");
        Ok(SyncOutcome::Completed { synced })
    }

    pub async fn status(&self) -> SyncStatus {
        let state = self.state.read().await;
        SyncStatus {
            is_syncing: state.is_syncing,
            last_attempt: state.last_attempt_at,
            last_synced_count: state.last_synced_count,
        }
    }

    /// Fire a sync on every offline-to-online edge of the connectivity
    /// monitor. Failures are logged; a later trigger retries.
    pub fn watch_connectivity(
        self: &Arc<Self>,
        mut online: watch::Receiver<bool>,
    ) -> JoinHandle<()> {
        let reconciler = Arc::clone(self);
        tokio::spawn(async move {
            while online.changed().await.is_ok() {
                if !*online.borrow_and_update() {
                    continue;
                }
                match reconciler.sync_now(SyncTrigger::ConnectivityRestored).await {
                    Ok(outcome) => debug!(?outcome, "connectivity-restored sync finished"),
                    Err(err) => warn!(error = %err, "connectivity-restored sync failed"),
                }
            }
        })
    }
}
