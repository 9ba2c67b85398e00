pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
pub mod state;

pub use application::ports::{
    QueuePersistence, ReachabilityProbe, ReachabilitySample, RecoveryPresenter, RemoteBackend,
    RemoteLogRecord, Session, SessionGateway, ViewCache,
};
pub use application::services::{
    ConnectivityService, ConnectivityState, CustomHandlers, ErrorRouter, OfflineQueue, Operation,
    PromptChoice, PromptSlot, SyncOutcome, SyncReconciler, SyncStatus, SyncTrigger,
};
pub use domain::{EntryDraft, EntryId, LogDate, Measure, PendingLogEntry, SetClass, SetRecord, ViewKey};
pub use infrastructure::JsonQueueStore;
pub use shared::{AppConfig, AppError, Result};
pub use state::{AppCore, CorePorts};

/// Install the tracing subscriber for shells that have no logging of their own.
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "liftlog=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
