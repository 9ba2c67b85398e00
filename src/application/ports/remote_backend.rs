use crate::domain::entities::{PendingLogEntry, SetRecord};
use crate::shared::error::Result;
use async_trait::async_trait;
use serde::Serialize;

/// One entry in the batch-sync payload: the stored record with local-only
/// fields stripped, the activity lower-cased, and the queue entry id carried
/// as `clientId` so an ambiguous retry cannot double-count a workout.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RemoteLogRecord {
    pub client_id: String,
    pub date: String,
    pub activity: String,
    pub sets: Vec<SetRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RemoteLogRecord {
    pub fn from_entry(entry: &PendingLogEntry) -> Self {
        Self {
            client_id: entry.id.as_str().to_string(),
            date: entry.date.as_str().to_string(),
            activity: entry.activity.to_lowercase(),
            sets: entry.sets.clone(),
            calories_burned: entry.calories_burned,
            notes: entry.notes.clone(),
        }
    }
}

/// Remote batch-sync endpoint. The batch succeeds or fails as one unit;
/// there is no partial-acknowledgment protocol.
#[async_trait]
pub trait RemoteBackend: Send + Sync {
    async fn sync_logs(&self, records: Vec<RemoteLogRecord>) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::EntryDraft;
    use crate::domain::value_objects::{LogDate, Measure, SetClass};

    #[test]
    fn strips_local_fields_and_normalizes_activity() {
        let entry = PendingLogEntry::from_draft(EntryDraft::new(
            LogDate::new("2025-01-10".to_string()).unwrap(),
            "Bench Press",
            vec![SetRecord::new(Measure::Kg, SetClass::Warmup).with_value("60")],
        ));

        let record = RemoteLogRecord::from_entry(&entry);
        assert_eq!(record.activity, "bench press");
        assert_eq!(record.client_id, entry.id.as_str());

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("timestamp").is_none());
        assert!(value.get("caloriesBurned").is_none());
        assert_eq!(value["clientId"], entry.id.as_str());
        assert_eq!(value["date"], "2025-01-10");
    }

    #[test]
    fn optional_fields_travel_only_when_present() {
        let entry = PendingLogEntry::from_draft(
            EntryDraft::new(
                LogDate::new("2025-01-10".to_string()).unwrap(),
                "rowing",
                vec![SetRecord::new(Measure::Time, SetClass::Normal).with_value("1200")],
            )
            .with_calories(300)
            .with_notes("steady pace"),
        );

        let value = serde_json::to_value(RemoteLogRecord::from_entry(&entry)).unwrap();
        assert_eq!(value["caloriesBurned"], 300);
        assert_eq!(value["notes"], "steady pace");
    }
}
