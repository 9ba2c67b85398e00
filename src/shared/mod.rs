pub mod config;
pub mod error;

pub use config::{AppConfig, StorageConfig, SyncConfig};
pub use error::{AppError, Result};
