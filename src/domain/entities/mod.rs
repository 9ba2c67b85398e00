pub mod pending_entry;

pub use pending_entry::{EntryDraft, PendingLogEntry, SetRecord};
