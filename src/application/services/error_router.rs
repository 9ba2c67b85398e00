use crate::application::ports::recovery::RecoveryPresenter;
use crate::application::services::connectivity_service::ConnectivityService;
use crate::shared::error::AppError;
use futures::future::BoxFuture;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    ServerFault,
    Network,
    Storage,
    Unclassified,
}

pub fn classify(error: &AppError) -> ErrorKind {
    match error {
        AppError::Validation(_) => ErrorKind::Validation,
        AppError::ServerFault(_) => ErrorKind::ServerFault,
        AppError::Network(_) => ErrorKind::Network,
        AppError::Storage(_) => ErrorKind::Storage,
        AppError::Serialization(_) | AppError::Internal(_) => ErrorKind::Unclassified,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Query,
    Mutation,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Query => "query",
            Operation::Mutation => "mutation",
        }
    }
}

/// The user's answer to the offline recovery prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice {
    GoOffline,
    Retry,
    Dismiss,
}

/// Single-slot flag for the recovery prompt: at most one prompt may be
/// visible process-wide. Owned by the router but injected so tests can
/// construct an isolated instance and assert on it directly.
#[derive(Debug, Default)]
pub struct PromptSlot {
    showing: AtomicBool,
}

impl PromptSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self) -> bool {
        self.showing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn release(&self) {
        self.showing.store(false, Ordering::Release);
    }

    pub fn is_showing(&self) -> bool {
        self.showing.load(Ordering::Acquire)
    }
}

pub type ErrorHandler<'a> = &'a (dyn Fn(&AppError) -> bool + Send + Sync);

/// Optional caller-supplied handlers, consulted before the default routing.
/// A handler returning `true` marks the error as dealt with.
#[derive(Default)]
pub struct CustomHandlers<'a> {
    pub on_validation: Option<ErrorHandler<'a>>,
    pub on_server: Option<ErrorHandler<'a>>,
    pub on_offline: Option<ErrorHandler<'a>>,
}

/// A re-invocable failed operation, stashed so the prompt's "retry" re-runs
/// exactly that operation instead of reloading application state.
pub type RetryAction = Box<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;

/// Routes failures from remote operations: self-resolving ones are logged,
/// offline-correlated ones interrupt the user at most once, the rest bubble
/// to the caller's own error UI.
pub struct ErrorRouter {
    connectivity: Arc<ConnectivityService>,
    presenter: Arc<dyn RecoveryPresenter>,
    prompt: Arc<PromptSlot>,
    on_offline_screen: AtomicBool,
    last_failed: Mutex<Option<RetryAction>>,
}

impl ErrorRouter {
    pub fn new(
        connectivity: Arc<ConnectivityService>,
        presenter: Arc<dyn RecoveryPresenter>,
        prompt: Arc<PromptSlot>,
    ) -> Self {
        Self {
            connectivity,
            presenter,
            prompt,
            on_offline_screen: AtomicBool::new(false),
            last_failed: Mutex::new(None),
        }
    }

    pub fn prompt_slot(&self) -> &PromptSlot {
        &self.prompt
    }

    /// Navigation layer reports whether the dedicated offline experience is
    /// the active surface; failures there never prompt again.
    pub fn set_on_offline_screen(&self, active: bool) {
        self.on_offline_screen.store(active, Ordering::Release);
    }

    /// Record the operation the prompt's "retry" should re-invoke.
    pub async fn stash_retry(&self, action: RetryAction) {
        *self.last_failed.lock().await = Some(action);
    }

    /// Decide what to do with a failed remote operation. Returns whether the
    /// error was handled, so call sites can skip their own fallback UI.
    /// Never fails; the only side effect is the prompt slot.
    pub async fn handle(
        &self,
        error: &AppError,
        operation: Operation,
        handlers: CustomHandlers<'_>,
    ) -> bool {
        match classify(error) {
            ErrorKind::Validation => handlers
                .on_validation
                .map(|handler| handler(error))
                .unwrap_or(false),
            ErrorKind::ServerFault => handlers
                .on_server
                .map(|handler| handler(error))
                .unwrap_or(false),
            ErrorKind::Network => {
                if self.connectivity.is_online().await {
                    // Believed transient: leave it to the caller's retry
                    // policy rather than interrupting the user.
                    info!(
                        op = operation.as_str(),
                        error = %error,
                        "network failure while online, left to caller retry"
                    );
                    return true;
                }
                if let Some(handler) = handlers.on_offline {
                    if handler(error) {
                        return true;
                    }
                }
                if self.on_offline_screen.load(Ordering::Acquire) {
                    debug!(op = operation.as_str(), "offline surface active, swallowing");
                    return true;
                }
                if !self.prompt.try_acquire() {
                    debug!(op = operation.as_str(), "recovery prompt already visible");
                    return true;
                }
                debug!(op = operation.as_str(), "showing offline recovery prompt");
                self.presenter.show_offline_prompt().await;
                true
            }
            ErrorKind::Storage | ErrorKind::Unclassified => false,
        }
    }

    /// Shell reports the user's choice: release the slot, and on retry
    /// re-invoke the stashed failed operation.
    pub async fn resolve(&self, choice: PromptChoice) {
        self.prompt.release();
        if choice == PromptChoice::Retry {
            let action = self.last_failed.lock().await.take();
            if let Some(action) = action {
                action().await;
            }
        }
    }
}
