//! Daemon metrics

use crate::error::Result;
use prometheus::{Histogram, HistogramOpts, IntCounterVec, IntGauge, Opts, Registry};

/// Result of one generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    Success,
    Error,
}

impl GenerationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationOutcome::Success => "success",
            GenerationOutcome::Error => "error",
        }
    }
}

/// Result of one push-gateway attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Success,
    Failure,
    /// Generation failed, nothing was sent
    Skipped,
}

impl PushOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            PushOutcome::Success => "success",
            PushOutcome::Failure => "failure",
            PushOutcome::Skipped => "skipped",
        }
    }
}

/// Metrics describing the simulator process
pub struct DaemonMetrics {
    /// Generation requests by source and outcome
    pub generations_total: IntCounterVec,

    /// Push attempts by result
    pub push_attempts_total: IntCounterVec,

    /// Time spent generating and rendering one exposition
    pub render_duration_seconds: Histogram,

    /// Number of lines in the most recent exposition
    pub last_render_lines: IntGauge,
}

impl DaemonMetrics {
    /// Create and register daemon metrics
    pub fn new(registry: &Registry) -> Result<Self> {
        let generations_total = IntCounterVec::new(
            Opts::new("generations_total", "Total fleet metric generations"),
            &["source", "outcome"],
        )?;
        registry.register(Box::new(generations_total.clone()))?;

        let push_attempts_total = IntCounterVec::new(
            Opts::new("push_attempts_total", "Total push gateway attempts"),
            &["result"],
        )?;
        registry.register(Box::new(push_attempts_total.clone()))?;

        let render_duration_seconds = Histogram::with_opts(
            HistogramOpts::new("render_duration_seconds", "Generation and render duration")
                .buckets(vec![0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1]),
        )?;
        registry.register(Box::new(render_duration_seconds.clone()))?;

        let last_render_lines = IntGauge::new("last_render_lines", "Lines in the last exposition")?;
        registry.register(Box::new(last_render_lines.clone()))?;

        Ok(Self {
            generations_total,
            push_attempts_total,
            render_duration_seconds,
            last_render_lines,
        })
    }

    /// Record a generation. `source` is the caller, e.g. "scrape" or "push".
    pub fn record_generation(&self, source: &str, outcome: GenerationOutcome, duration_secs: f64) {
        self.generations_total
            .with_label_values(&[source, outcome.as_str()])
            .inc();
        self.render_duration_seconds.observe(duration_secs);
    }

    pub fn record_push(&self, outcome: PushOutcome) {
        self.push_attempts_total
            .with_label_values(&[outcome.as_str()])
            .inc();
    }

    pub fn set_last_render_lines(&self, lines: usize) {
        self.last_render_lines.set(lines as i64);
    }
}
