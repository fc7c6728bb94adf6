//! Fleetsim Observability
//!
//! Instrumentation for the simulator process itself, kept separate from the
//! synthetic fleet metrics it generates.
//!
//! ## Features
//!
//! - **Metrics**: Prometheus registry with generation and push counters
//! - **Tracing**: `tracing-subscriber` setup with env filtering and JSON output

pub mod error;
pub mod metrics;
pub mod tracing;

pub use error::{ObservabilityError, Result};
pub use metrics::{export_metrics, DaemonMetrics, GenerationOutcome, MetricsRegistry, PushOutcome};
pub use self::tracing::{init_tracing, LogFormat, TracingConfig};
