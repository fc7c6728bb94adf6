//! Infrastructure component metrics
//!
//! Every component is described by a static table of metric specs. A spec
//! oscillates additively around its baseline and is then clamped to its own
//! range; some metrics only have a floor, and some are stable pass-throughs.

use super::Precision;
use fleetsim_types::{InfraComponent, Region};
use serde::Serialize;

/// Waveform applied to a baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `baseline + amplitude * sin(t / period)`
    Sine,
    /// `baseline + amplitude * |sin(t / period)|`, never below the baseline
    AbsSine,
    /// Baseline passed through unchanged
    Stable,
}

/// Static description of one component metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfraMetricSpec {
    pub name: &'static str,
    pub baseline: f64,
    pub amplitude: f64,
    pub period: f64,
    pub shape: Shape,
    pub floor: Option<f64>,
    pub ceiling: Option<f64>,
    pub precision: Precision,
}

impl InfraMetricSpec {
    const fn sine(name: &'static str, baseline: f64, amplitude: f64, period: f64) -> Self {
        Self {
            name,
            baseline,
            amplitude,
            period,
            shape: Shape::Sine,
            floor: None,
            ceiling: None,
            precision: Precision::Places(1),
        }
    }

    const fn abs_sine(name: &'static str, baseline: f64, amplitude: f64, period: f64) -> Self {
        Self {
            shape: Shape::AbsSine,
            ..Self::sine(name, baseline, amplitude, period)
        }
    }

    const fn stable(name: &'static str, baseline: f64) -> Self {
        Self {
            shape: Shape::Stable,
            ..Self::sine(name, baseline, 0.0, 1.0)
        }
    }

    const fn range(self, floor: f64, ceiling: f64) -> Self {
        Self {
            floor: Some(floor),
            ceiling: Some(ceiling),
            ..self
        }
    }

    const fn floor(self, floor: f64) -> Self {
        Self {
            floor: Some(floor),
            ..self
        }
    }

    const fn integer(self) -> Self {
        Self {
            precision: Precision::Integer,
            ..self
        }
    }

    const fn places(self, places: usize) -> Self {
        Self {
            precision: Precision::Places(places),
            ..self
        }
    }

    /// Evaluate on an already phase-shifted clock
    pub fn evaluate(&self, t: f64) -> f64 {
        let wave = match self.shape {
            Shape::Sine => (t / self.period).sin(),
            Shape::AbsSine => (t / self.period).sin().abs(),
            Shape::Stable => 0.0,
        };
        let mut value = self.baseline + self.amplitude * wave;
        if self.precision == Precision::Integer {
            value = value.trunc();
        }
        if let Some(ceiling) = self.ceiling {
            value = value.min(ceiling);
        }
        if let Some(floor) = self.floor {
            value = value.max(floor);
        }
        value
    }
}

const ORCHESTRATOR: &[InfraMetricSpec] = &[
    InfraMetricSpec::sine("pod_health_percent", 95.0, 3.0, 400.0).range(90.0, 100.0),
    InfraMetricSpec::sine("cpu_utilization_percent", 65.0, 10.0, 350.0).range(50.0, 85.0),
    InfraMetricSpec::sine("memory_utilization_percent", 70.0, 8.0, 320.0).range(55.0, 90.0),
    InfraMetricSpec::sine("task_success_rate_percent", 99.2, 0.5, 280.0)
        .range(98.0, 99.9)
        .places(2),
    InfraMetricSpec::sine("queue_depth", 15.0, 8.0, 150.0)
        .floor(5.0)
        .integer(),
];

const HA_ADDON: &[InfraMetricSpec] = &[
    InfraMetricSpec::stable("cluster_health_percent", 100.0),
    InfraMetricSpec::abs_sine("failover_time_ms", 500.0, 200.0, 500.0).floor(300.0),
    InfraMetricSpec::stable("sync_status", 1.0).integer(),
    InfraMetricSpec::stable("health_check_passing", 1.0).integer(),
];

const SHARED_STORAGE: &[InfraMetricSpec] = &[
    InfraMetricSpec::sine("storage_health_percent", 98.0, 2.0, 450.0).range(95.0, 100.0),
    InfraMetricSpec::sine("iops_avg", 850.0, 200.0, 300.0)
        .floor(600.0)
        .integer(),
    InfraMetricSpec::sine("capacity_utilization_percent", 72.0, 8.0, 600.0).range(65.0, 85.0),
    InfraMetricSpec::stable("replication_status", 1.0).integer(),
];

const ELASTICSEARCH: &[InfraMetricSpec] = &[
    InfraMetricSpec::stable("cluster_health_percent", 100.0),
    InfraMetricSpec::sine("index_health_percent", 99.8, 0.2, 400.0).range(99.0, 100.0),
    InfraMetricSpec::abs_sine("query_performance_ms", 12.0, 5.0, 200.0).floor(8.0),
    InfraMetricSpec::sine("storage_usage_percent", 68.0, 6.0, 800.0).range(60.0, 80.0),
];

const DATABASE: &[InfraMetricSpec] = &[
    InfraMetricSpec::sine("connection_health_percent", 98.0, 2.0, 350.0).range(95.0, 100.0),
    InfraMetricSpec::abs_sine("query_performance_ms", 8.0, 3.0, 180.0).floor(5.0),
    InfraMetricSpec::abs_sine("replication_lag_ms", 200.0, 100.0, 250.0).floor(100.0),
    InfraMetricSpec::sine("storage_usage_percent", 75.0, 5.0, 700.0).range(70.0, 85.0),
];

/// Metric table for a component, in exposition order
pub fn metric_specs(component: InfraComponent) -> &'static [InfraMetricSpec] {
    match component {
        InfraComponent::Orchestrator => ORCHESTRATOR,
        InfraComponent::HaAddon => HA_ADDON,
        InfraComponent::SharedStorage => SHARED_STORAGE,
        InfraComponent::Elasticsearch => ELASTICSEARCH,
        InfraComponent::Database => DATABASE,
    }
}

/// One evaluated metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InfraSample {
    pub name: &'static str,
    pub value: f64,
    #[serde(skip)]
    pub precision: Precision,
}

/// All metrics of one component in one region for a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfraMetrics {
    pub region: Region,
    pub component: InfraComponent,
    pub samples: Vec<InfraSample>,
}

impl InfraMetrics {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.samples.iter().find(|s| s.name == name).map(|s| s.value)
    }
}

pub(super) fn evaluate(region: Region, component: InfraComponent, t: f64) -> InfraMetrics {
    let samples = metric_specs(component)
        .iter()
        .map(|spec| InfraSample {
            name: spec.name,
            value: spec.evaluate(t),
            precision: spec.precision,
        })
        .collect();

    InfraMetrics {
        region,
        component,
        samples,
    }
}
