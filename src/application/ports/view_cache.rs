use crate::domain::value_objects::ViewKey;
use async_trait::async_trait;

/// Cached-query layer surface: the core only ever asks it to drop views.
#[async_trait]
pub trait ViewCache: Send + Sync {
    async fn invalidate(&self, key: ViewKey);
}
