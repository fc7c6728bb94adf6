//! Periodic push loop

use super::MetricsSink;
use crate::source::MetricsSource;
use fleetsim_observability::PushOutcome;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{interval, MissedTickBehavior};

/// Renders and delivers on a fixed interval until stopped
pub struct Pusher {
    source: MetricsSource,
    sink: Arc<dyn MetricsSink>,
    period: Duration,
}

impl Pusher {
    pub fn new(source: MetricsSource, sink: Arc<dyn MetricsSink>, period: Duration) -> Self {
        Self {
            source,
            sink,
            period,
        }
    }

    /// Run until `stop` carries `true` or its sender is dropped.
    ///
    /// The first push happens immediately.
    pub async fn run(self, mut stop: watch::Receiver<bool>) {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(
            target_url = %self.sink.target(),
            interval_secs = self.period.as_secs(),
            "Metrics pusher started"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.push_once().await;
                }
                changed = stop.changed() => {
                    if changed.is_err() || *stop.borrow() {
                        break;
                    }
                }
            }
        }

        tracing::info!("Metrics pusher stopped");
    }

    /// One render-and-deliver cycle
    pub async fn push_once(&self) -> PushOutcome {
        let daemon = self.source.metrics().daemon();

        let body = match self.source.render("push").await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, "Metrics generation failed, skipping push");
                daemon.record_push(PushOutcome::Skipped);
                return PushOutcome::Skipped;
            }
        };

        let lines = body.lines().count();
        let outcome = match self.sink.push(body).await {
            Ok(()) => {
                tracing::info!(lines, target_url = %self.sink.target(), "Pushed metrics");
                PushOutcome::Success
            }
            Err(e) => {
                tracing::warn!(error = %e, target_url = %self.sink.target(), "Failed to push metrics");
                PushOutcome::Failure
            }
        };
        daemon.record_push(outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PushError;
    use async_trait::async_trait;
    use fleetsim_engine::{FixedClock, FleetEngine};
    use fleetsim_observability::MetricsRegistry;
    use fleetsim_types::EpochSeconds;
    use std::sync::Mutex;

    const START: EpochSeconds = EpochSeconds(1_700_000_000.0);

    #[derive(Default)]
    struct RecordingSink {
        bodies: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl MetricsSink for RecordingSink {
        async fn push(&self, body: String) -> Result<(), PushError> {
            self.bodies.lock().unwrap().push(body);
            if self.fail {
                Err(PushError::Status {
                    method: "POST",
                    url: "mock".to_string(),
                    status: 503,
                })
            } else {
                Ok(())
            }
        }

        fn target(&self) -> &str {
            "mock"
        }
    }

    fn source() -> MetricsSource {
        MetricsSource::new(
            Arc::new(FleetEngine::with_defaults(START).unwrap()),
            Arc::new(FixedClock(START + 10.0)),
            MetricsRegistry::new().unwrap(),
        )
    }

    fn push_count(source: &MetricsSource, outcome: PushOutcome) -> u64 {
        source
            .metrics()
            .daemon()
            .push_attempts_total
            .with_label_values(&[outcome.as_str()])
            .get()
    }

    #[tokio::test]
    async fn test_push_once_delivers_full_exposition() {
        let sink = Arc::new(RecordingSink::default());
        let pusher = Pusher::new(source(), sink.clone(), Duration::from_secs(30));

        assert_eq!(pusher.push_once().await, PushOutcome::Success);
        let bodies = sink.bodies.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0].lines().count(), 163);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pushes_every_interval_until_stopped() {
        let source = source();
        let sink = Arc::new(RecordingSink::default());
        let (stop_tx, stop_rx) = watch::channel(false);

        let pusher = Pusher::new(source.clone(), sink.clone(), Duration::from_secs(30));
        let handle = tokio::spawn(pusher.run(stop_rx));

        // Ticks at 0s, 30s and 60s
        tokio::time::sleep(Duration::from_secs(65)).await;
        stop_tx.send(true).unwrap();
        handle.await.unwrap();

        assert_eq!(sink.bodies.lock().unwrap().len(), 3);
        assert_eq!(push_count(&source, PushOutcome::Success), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_do_not_stop_the_loop() {
        let source = source();
        let sink = Arc::new(RecordingSink {
            fail: true,
            ..Default::default()
        });
        let (stop_tx, stop_rx) = watch::channel(false);

        let handle = tokio::spawn(
            Pusher::new(source.clone(), sink.clone(), Duration::from_secs(30)).run(stop_rx),
        );

        tokio::time::sleep(Duration::from_secs(95)).await;
        stop_tx.send(true).unwrap();
        handle.await.unwrap();

        assert_eq!(push_count(&source, PushOutcome::Failure), 4);
        assert_eq!(push_count(&source, PushOutcome::Success), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_sender_stops_the_loop() {
        let sink = Arc::new(RecordingSink::default());
        let (stop_tx, stop_rx) = watch::channel(false);
        let handle = tokio::spawn(Pusher::new(source(), sink, Duration::from_secs(30)).run(stop_rx));

        drop(stop_tx);
        handle.await.unwrap();
    }
}
