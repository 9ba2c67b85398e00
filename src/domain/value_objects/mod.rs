pub mod entry_id;
pub mod log_date;
pub mod measure;
pub mod set_class;
pub mod view_key;

pub use entry_id::EntryId;
pub use log_date::LogDate;
pub use measure::Measure;
pub use set_class::SetClass;
pub use view_key::ViewKey;
