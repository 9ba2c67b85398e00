use crate::application::ports::reachability::{ReachabilityProbe, ReachabilitySample};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{mpsc, watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConnectivityState {
    pub is_online: bool,
    /// True until the first check resolves.
    pub loading: bool,
    /// True while a manual override pins `is_online`.
    pub forced: bool,
}

impl Default for ConnectivityState {
    fn default() -> Self {
        // Fail-open before the first resolved check so startup prefetches are
        // not blocked by a false offline redirect. Once checks are active the
        // policy flips to fail-closed.
        Self {
            is_online: true,
            loading: true,
            forced: false,
        }
    }
}

/// Best-effort answer to "can we reach the backend", reconciling platform
/// reachability events with manual overrides.
pub struct ConnectivityService {
    probe: Arc<dyn ReachabilityProbe>,
    state: RwLock<ConnectivityState>,
    online_tx: watch::Sender<bool>,
}

impl ConnectivityService {
    pub fn new(probe: Arc<dyn ReachabilityProbe>) -> Self {
        let (online_tx, _) = watch::channel(ConnectivityState::default().is_online);
        Self {
            probe,
            state: RwLock::new(ConnectivityState::default()),
            online_tx,
        }
    }

    /// Query the reachability probe and commit the result. A probe failure is
    /// never treated as connectivity: the state resolves to offline. While a
    /// manual override pins the state this is a no-op; `refresh` is the one
    /// path that clears the override.
    pub async fn check_now(&self) {
        if self.state.read().await.forced {
            return;
        }
        let sample = self.probe.sample().await;
        let mut state = self.state.write().await;
        if state.forced {
            // An override landed while the probe was in flight.
            return;
        }
        match sample {
            Ok(sample) => {
                state.is_online = sample.is_online();
                debug!(
                    connected = sample.connected,
                    internet_reachable = ?sample.internet_reachable,
                    online = state.is_online,
                    "reachability check resolved"
                );
            }
            Err(err) => {
                warn!(error = %err, "reachability probe failed, assuming offline");
                state.is_online = false;
            }
        }
        state.loading = false;
        self.publish(state.is_online);
    }

    /// Apply a platform change event. Events arrive in emission order and are
    /// ignored while a manual override is active.
    pub async fn apply_sample(&self, sample: ReachabilitySample) {
        let mut state = self.state.write().await;
        if state.forced {
            return;
        }
        state.is_online = sample.is_online();
        state.loading = false;
        debug!(online = state.is_online, "reachability event applied");
        self.publish(state.is_online);
    }

    /// Clear any manual override and re-run a check.
    pub async fn refresh(&self) {
        {
            let mut state = self.state.write().await;
            state.forced = false;
            state.loading = true;
        }
        self.check_now().await;
    }

    pub async fn force_offline(&self) {
        self.force(false).await;
    }

    pub async fn force_online(&self) {
        self.force(true).await;
    }

    async fn force(&self, online: bool) {
        let mut state = self.state.write().await;
        state.forced = true;
        state.is_online = online;
        state.loading = false;
        debug!(online, "connectivity pinned by manual override");
        self.publish(online);
    }

    pub async fn is_online(&self) -> bool {
        self.state.read().await.is_online
    }

    pub async fn state(&self) -> ConnectivityState {
        *self.state.read().await
    }

    /// Watch the online flag; receivers only wake on actual flips.
    pub fn watch_online(&self) -> watch::Receiver<bool> {
        self.online_tx.subscribe()
    }

    /// Feed platform change events into the monitor in arrival order.
    pub fn spawn_listener(
        self: &Arc<Self>,
        mut events: mpsc::UnboundedReceiver<ReachabilitySample>,
    ) -> JoinHandle<()> {
        let service = Arc::clone(self);
        tokio::spawn(async move {
            while let Some(sample) = events.recv().await {
                service.apply_sample(sample).await;
            }
        })
    }

    fn publish(&self, online: bool) {
        self.online_tx.send_if_modified(|current| {
            if *current != online {
                *current = online;
                true
            } else {
                false
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::{AppError, Result};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Probe stub: `None` simulates a probe failure.
    struct StubProbe {
        sample: Mutex<Option<ReachabilitySample>>,
    }

    impl StubProbe {
        fn online() -> Arc<Self> {
            Arc::new(Self {
                sample: Mutex::new(Some(ReachabilitySample {
                    connected: true,
                    internet_reachable: Some(true),
                })),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                sample: Mutex::new(None),
            })
        }

        fn set(&self, sample: Option<ReachabilitySample>) {
            *self.sample.lock().unwrap() = sample;
        }
    }

    #[async_trait]
    impl ReachabilityProbe for StubProbe {
        async fn sample(&self) -> Result<ReachabilitySample> {
            self.sample
                .lock()
                .unwrap()
                .ok_or_else(|| AppError::Network("probe unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn optimistic_before_first_check() {
        let service = ConnectivityService::new(StubProbe::failing());
        let state = service.state().await;
        assert!(state.is_online);
        assert!(state.loading);
        assert!(!state.forced);
    }

    #[tokio::test]
    async fn probe_failure_resolves_offline() {
        let service = ConnectivityService::new(StubProbe::failing());
        service.check_now().await;
        let state = service.state().await;
        assert!(!state.is_online);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn check_now_derives_online_from_sample() {
        let probe = StubProbe::online();
        let service = ConnectivityService::new(probe.clone());

        service.check_now().await;
        assert!(service.is_online().await);

        probe.set(Some(ReachabilitySample {
            connected: true,
            internet_reachable: Some(false),
        }));
        service.check_now().await;
        assert!(!service.is_online().await);
    }

    #[tokio::test]
    async fn forced_override_suppresses_listener_events() {
        let service = Arc::new(ConnectivityService::new(StubProbe::online()));
        service.force_offline().await;

        service
            .apply_sample(ReachabilitySample {
                connected: true,
                internet_reachable: Some(true),
            })
            .await;
        assert!(!service.is_online().await);
        assert!(service.state().await.forced);

        service.refresh().await;
        let state = service.state().await;
        assert!(!state.forced);
        assert!(state.is_online);
    }

    #[tokio::test]
    async fn check_now_respects_manual_override() {
        let probe = StubProbe::online();
        let service = ConnectivityService::new(probe.clone());
        service.force_offline().await;

        service.check_now().await;
        let state = service.state().await;
        assert!(!state.is_online);
        assert!(state.forced);
    }

    #[tokio::test]
    async fn refresh_after_override_fails_safe_on_probe_error() {
        let probe = StubProbe::online();
        let service = ConnectivityService::new(probe.clone());
        service.force_online().await;

        probe.set(None);
        service.refresh().await;
        assert!(!service.is_online().await);
    }

    #[tokio::test]
    async fn watch_publishes_flips_only() {
        let service = Arc::new(ConnectivityService::new(StubProbe::online()));
        let mut rx = service.watch_online();

        service.force_offline().await;
        rx.changed().await.unwrap();
        assert!(!*rx.borrow_and_update());

        // Same value again: no wakeup queued.
        service.force_offline().await;
        assert!(!rx.has_changed().unwrap());

        service.force_online().await;
        rx.changed().await.unwrap();
        assert!(*rx.borrow_and_update());
    }

    #[tokio::test]
    async fn listener_task_applies_events_in_order() {
        let service = Arc::new(ConnectivityService::new(StubProbe::online()));
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = service.spawn_listener(rx);

        tx.send(ReachabilitySample {
            connected: true,
            internet_reachable: Some(true),
        })
        .unwrap();
        tx.send(ReachabilitySample {
            connected: false,
            internet_reachable: None,
        })
        .unwrap();
        drop(tx);
        handle.await.unwrap();

        assert!(!service.is_online().await);
    }
}
