pub mod ports;
pub mod services;

pub use services::{ConnectivityService, ErrorRouter, OfflineQueue, SyncReconciler};
