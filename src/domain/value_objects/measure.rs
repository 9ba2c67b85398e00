use serde::{Deserialize, Serialize};

/// Measurement unit a set is recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    Kg,
    Lbs,
    Time,
    Distance,
    Steps,
}

impl Measure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Measure::Kg => "kg",
            Measure::Lbs => "lbs",
            Measure::Time => "time",
            Measure::Distance => "distance",
            Measure::Steps => "steps",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_backend_schema() {
        for measure in [
            Measure::Kg,
            Measure::Lbs,
            Measure::Time,
            Measure::Distance,
            Measure::Steps,
        ] {
            let encoded = serde_json::to_string(&measure).unwrap();
            assert_eq!(encoded, format!("\"{}\"", measure.as_str()));
        }
    }
}
