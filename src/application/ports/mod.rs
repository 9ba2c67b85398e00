pub mod queue_store;
pub mod reachability;
pub mod recovery;
pub mod remote_backend;
pub mod session;
pub mod view_cache;

pub use queue_store::QueuePersistence;
pub use reachability::{ReachabilityProbe, ReachabilitySample};
pub use recovery::RecoveryPresenter;
pub use remote_backend::{RemoteBackend, RemoteLogRecord};
pub use session::{Session, SessionGateway};
pub use view_cache::ViewCache;
