//! Self-instrumentation metrics
//!
//! Exported on the daemon's internal endpoint, never mixed into the
//! simulated fleet exposition.

pub mod collectors;
pub mod exporter;
pub mod registry;

pub use collectors::{DaemonMetrics, GenerationOutcome, PushOutcome};
pub use exporter::export_metrics;
pub use registry::MetricsRegistry;
