use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub sync: SyncConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub queue_file: String,
}

impl StorageConfig {
    pub fn queue_path(&self) -> PathBuf {
        self.data_dir.join(&self.queue_file)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    pub auto_sync: bool,
    /// Cooldown applied to connectivity-restored sync triggers, in seconds.
    pub restore_cooldown_secs: u64,
    /// Cooldown applied to screen-focus sync triggers, in seconds.
    pub focus_cooldown_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            queue_file: "pending_logs.json".to_string(),
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            auto_sync: true,
            restore_cooldown_secs: 5,
            focus_cooldown_secs: 10,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("liftlog"))
        .unwrap_or_else(|| PathBuf::from("./data"))
}
