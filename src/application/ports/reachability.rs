use crate::shared::error::Result;
use async_trait::async_trait;

/// One observation from the platform reachability primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReachabilitySample {
    pub connected: bool,
    /// `None` when the platform has not resolved internet reachability yet;
    /// only an explicit `Some(false)` counts as unreachable.
    pub internet_reachable: Option<bool>,
}

impl ReachabilitySample {
    pub fn is_online(&self) -> bool {
        self.connected && self.internet_reachable != Some(false)
    }
}

/// Platform-level connectivity probe.
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    async fn sample(&self) -> Result<ReachabilitySample>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_reachability_defaults_to_online() {
        let sample = ReachabilitySample {
            connected: true,
            internet_reachable: None,
        };
        assert!(sample.is_online());
    }

    #[test]
    fn explicit_unreachable_is_offline() {
        let sample = ReachabilitySample {
            connected: true,
            internet_reachable: Some(false),
        };
        assert!(!sample.is_online());
    }

    #[test]
    fn disconnected_is_offline() {
        let sample = ReachabilitySample {
            connected: false,
            internet_reachable: Some(true),
        };
        assert!(!sample.is_online());
    }
}
