use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar day in canonical `YYYY-MM-DD` form, derived from local time at
/// capture. Deserialization runs the same validation as `new`, so a hand
/// edited or corrupted queue file cannot smuggle in a non-canonical date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct LogDate(String);

impl LogDate {
    pub fn new(value: String) -> Result<Self, String> {
        let parsed = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
            .map_err(|_| format!("Invalid log date: {value}"))?;
        // Only the canonical rendering is accepted; chrono would otherwise
        // parse short forms like "3-1-10".
        if parsed.format("%Y-%m-%d").to_string() != value {
            return Err(format!("Log date is not in YYYY-MM-DD form: {value}"));
        }
        Ok(Self(value))
    }

    pub fn today() -> Self {
        Self(Local::now().format("%Y-%m-%d").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `YYYY-MM` key of the month-level cached view covering this day.
    pub fn month_key(&self) -> String {
        self.0[..7].to_string()
    }
}

impl TryFrom<String> for LogDate {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for LogDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<LogDate> for String {
    fn from(value: LogDate) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_calendar_days() {
        let date = LogDate::new("2025-01-10".to_string()).unwrap();
        assert_eq!(date.as_str(), "2025-01-10");
        assert_eq!(date.month_key(), "2025-01");
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(LogDate::new("2025-13-01".to_string()).is_err());
        assert!(LogDate::new("10/01/2025".to_string()).is_err());
        assert!(LogDate::new("".to_string()).is_err());
    }

    #[test]
    fn rejects_non_canonical_dates() {
        // chrono parses these, but they are not in YYYY-MM-DD form and their
        // month key would be nonsense.
        assert!(LogDate::new("3-1-10".to_string()).is_err());
        assert!(LogDate::new("2025-1-10".to_string()).is_err());
    }

    #[test]
    fn deserialization_runs_validation() {
        assert!(serde_json::from_str::<LogDate>("\"bad\"").is_err());
        assert!(serde_json::from_str::<LogDate>("\"3-1-10\"").is_err());

        let date: LogDate = serde_json::from_str("\"2025-01-10\"").unwrap();
        assert_eq!(date.month_key(), "2025-01");
    }

    #[test]
    fn today_is_well_formed() {
        let today = LogDate::today();
        assert!(LogDate::new(today.as_str().to_string()).is_ok());
    }
}
