pub mod connectivity_service;
pub mod error_router;
pub mod queue_service;
pub mod sync_service;

pub use connectivity_service::{ConnectivityService, ConnectivityState};
pub use error_router::{
    classify, CustomHandlers, ErrorKind, ErrorRouter, Operation, PromptChoice, PromptSlot,
    RetryAction,
};
pub use queue_service::OfflineQueue;
pub use sync_service::{SyncOutcome, SyncReconciler, SyncStatus, SyncTrigger};
