pub mod entities;
pub mod value_objects;

pub use entities::{EntryDraft, PendingLogEntry, SetRecord};
pub use value_objects::{EntryId, LogDate, Measure, SetClass, ViewKey};
