use crate::domain::value_objects::LogDate;
use std::fmt;

/// Identifies a cached query view for invalidation after a successful sync.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewKey {
    /// Day-level view, keyed `YYYY-MM-DD`.
    Day(String),
    /// Month-level view, keyed `YYYY-MM`.
    Month(String),
}

impl ViewKey {
    pub fn day(date: &LogDate) -> Self {
        ViewKey::Day(date.as_str().to_string())
    }

    pub fn month(date: &LogDate) -> Self {
        ViewKey::Month(date.month_key())
    }

    pub fn as_str(&self) -> &str {
        match self {
            ViewKey::Day(key) | ViewKey::Month(key) => key,
        }
    }
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
