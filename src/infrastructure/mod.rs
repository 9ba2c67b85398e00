pub mod storage;

pub use storage::JsonQueueStore;
