pub mod json_queue_store;

pub use json_queue_store::JsonQueueStore;
