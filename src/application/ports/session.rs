use async_trait::async_trait;

/// An authenticated identity as far as the sync core cares: presence only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
}

/// Identity provider surface. Sync is gated on session presence, not on any
/// further notion of validity.
#[async_trait]
pub trait SessionGateway: Send + Sync {
    async fn current_session(&self) -> Option<Session>;
}
