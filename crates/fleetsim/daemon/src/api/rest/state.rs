//! Application state for API handlers

use crate::source::MetricsSource;
use tokio::sync::watch;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Generation entry point shared with the pusher
    pub source: MetricsSource,

    /// Daemon version
    pub version: String,

    /// Whether a pusher task listens on the shutdown channel
    pub push_enabled: bool,

    /// Graceful shutdown signal sender
    pub shutdown_tx: watch::Sender<bool>,
}

impl AppState {
    pub fn new(source: MetricsSource, shutdown_tx: watch::Sender<bool>, push_enabled: bool) -> Self {
        Self {
            source,
            version: env!("CARGO_PKG_VERSION").to_string(),
            push_enabled,
            shutdown_tx,
        }
    }

    /// Tasks that stop when the shutdown channel flips
    pub fn shutdown_targets(&self) -> Vec<&'static str> {
        let mut targets = vec!["listener"];
        if self.push_enabled {
            targets.push("pusher");
        }
        targets
    }
}
