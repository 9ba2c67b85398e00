use crate::domain::value_objects::{EntryId, LogDate, Measure, SetClass};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One set within a workout entry. `value` and `reps` stay as free-form
/// strings end to end; the backend schema owns their interpretation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SetRecord {
    pub measure: Measure,
    pub set_type: SetClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
}

impl SetRecord {
    pub fn new(measure: Measure, set_type: SetClass) -> Self {
        Self {
            measure,
            set_type,
            value: None,
            reps: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_reps(mut self, reps: impl Into<String>) -> Self {
        self.reps = Some(reps.into());
        self
    }
}

/// Immutable record of one offline-captured workout. Entries are never
/// mutated in place; the only transitions are per-entry removal and
/// post-sync clearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PendingLogEntry {
    pub id: EntryId,
    pub date: LogDate,
    pub activity: String,
    pub sets: Vec<SetRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation instant, for local ordering and display only.
    pub timestamp: DateTime<Utc>,
}

impl PendingLogEntry {
    pub fn from_draft(draft: EntryDraft) -> Self {
        Self {
            id: EntryId::generate(),
            date: draft.date,
            activity: draft.activity,
            sets: draft.sets,
            calories_burned: draft.calories_burned,
            notes: draft.notes,
            timestamp: Utc::now(),
        }
    }
}

/// User-supplied fields of an entry, before the queue assigns identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub date: LogDate,
    pub activity: String,
    pub sets: Vec<SetRecord>,
    pub calories_burned: Option<u32>,
    pub notes: Option<String>,
}

impl EntryDraft {
    pub fn new(date: LogDate, activity: impl Into<String>, sets: Vec<SetRecord>) -> Self {
        Self {
            date,
            activity: activity.into(),
            sets,
            calories_burned: None,
            notes: None,
        }
    }

    pub fn with_calories(mut self, calories: u32) -> Self {
        self.calories_burned = Some(calories);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
