use serde::{Deserialize, Serialize};

/// Classification tag on a single set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetClass {
    Warmup,
    Normal,
    Failure,
    Drop,
    Pr,
    FailedPr,
}

impl SetClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetClass::Warmup => "warmup",
            SetClass::Normal => "normal",
            SetClass::Failure => "failure",
            SetClass::Drop => "drop",
            SetClass::Pr => "pr",
            SetClass::FailedPr => "failedpr",
        }
    }
}
