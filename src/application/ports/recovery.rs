use async_trait::async_trait;

/// Shell-side presenter for the offline recovery prompt. The router
/// guarantees at most one visible prompt; the shell reports the user's
/// choice back through `ErrorRouter::resolve`.
#[async_trait]
pub trait RecoveryPresenter: Send + Sync {
    async fn show_offline_prompt(&self);
}
