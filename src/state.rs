use crate::application::ports::reachability::{ReachabilityProbe, ReachabilitySample};
use crate::application::ports::recovery::RecoveryPresenter;
use crate::application::ports::remote_backend::RemoteBackend;
use crate::application::ports::session::SessionGateway;
use crate::application::ports::view_cache::ViewCache;
use crate::application::services::{
    ConnectivityService, ErrorRouter, OfflineQueue, PromptSlot, SyncReconciler,
};
use crate::infrastructure::storage::JsonQueueStore;
use crate::shared::config::AppConfig;
use crate::shared::error::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Shell-provided collaborators the core is wired against.
pub struct CorePorts {
    pub probe: Arc<dyn ReachabilityProbe>,
    pub remote: Arc<dyn RemoteBackend>,
    pub session: Arc<dyn SessionGateway>,
    pub cache: Arc<dyn ViewCache>,
    pub presenter: Arc<dyn RecoveryPresenter>,
}

/// Composition root for the offline sync core.
#[derive(Clone)]
pub struct AppCore {
    pub config: AppConfig,
    pub connectivity: Arc<ConnectivityService>,
    pub queue: Arc<OfflineQueue>,
    pub errors: Arc<ErrorRouter>,
    pub sync: Arc<SyncReconciler>,
}

impl AppCore {
    pub fn new(config: AppConfig, ports: CorePorts) -> Result<Self> {
        std::fs::create_dir_all(&config.storage.data_dir)?;

        let store = Arc::new(JsonQueueStore::new(config.storage.queue_path()));
        let connectivity = Arc::new(ConnectivityService::new(ports.probe));
        let queue = Arc::new(OfflineQueue::new(store));
        let errors = Arc::new(ErrorRouter::new(
            connectivity.clone(),
            ports.presenter,
            Arc::new(PromptSlot::new()),
        ));
        let sync = Arc::new(SyncReconciler::new(
            queue.clone(),
            ports.remote,
            ports.session,
            ports.cache,
            config.sync.clone(),
        ));

        Ok(Self {
            config,
            connectivity,
            queue,
            errors,
            sync,
        })
    }

    /// Resolve the first connectivity check, then start the background
    /// plumbing: the platform event listener and, when auto-sync is on, the
    /// reconciler's connectivity watcher.
    pub async fn start(
        &self,
        events: mpsc::UnboundedReceiver<ReachabilitySample>,
    ) -> Vec<JoinHandle<()>> {
        self.connectivity.check_now().await;

        let mut tasks = vec![self.connectivity.spawn_listener(events)];
        if self.config.sync.auto_sync {
            tasks.push(self.sync.watch_connectivity(self.connectivity.watch_online()));
        }
        tasks
    }
}
