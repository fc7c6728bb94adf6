//! Central metrics registry

use super::collectors::DaemonMetrics;
use crate::error::Result;
use prometheus::Registry;
use std::sync::Arc;

/// Registry holding every self-instrumentation metric under one prefix
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Arc<Registry>,
    daemon_metrics: Arc<DaemonMetrics>,
}

impl MetricsRegistry {
    /// Create a new metrics registry with default prefix "fleetsim"
    pub fn new() -> Result<Self> {
        Self::with_prefix("fleetsim")
    }

    /// Create a new metrics registry with custom prefix
    pub fn with_prefix(prefix: &str) -> Result<Self> {
        let registry = Arc::new(Registry::new_custom(Some(prefix.to_string()), None)?);
        let daemon_metrics = Arc::new(DaemonMetrics::new(&registry)?);

        Ok(Self {
            registry,
            daemon_metrics,
        })
    }

    pub fn daemon(&self) -> &DaemonMetrics {
        &self.daemon_metrics
    }

    /// Export metrics in Prometheus text format
    pub fn export(&self) -> Result<String> {
        super::export_metrics(&self.registry)
    }
}

impl std::fmt::Debug for MetricsRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsRegistry").finish_non_exhaustive()
    }
}
