//! Baseline metric generation
//!
//! Traffic managers and infrastructure components report static baselines
//! perturbed by bounded sine oscillations. Perturbed values are recomputed on
//! every call and never stored.

mod infrastructure;
mod traffic;

pub use infrastructure::{InfraMetricSpec, InfraMetrics, InfraSample, Shape};
pub use traffic::{GtmBaseline, GtmMetrics, RegionalTmBaseline, RegionalTmBaselines, RegionalTmMetrics};

use fleetsim_types::{EpochSeconds, InfraComponent, Region};
use serde::{Deserialize, Serialize};

/// How a value is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Plain integer
    Integer,
    /// Fixed number of decimal places
    Places(usize),
}

/// `1 + amplitude * sin(t / period)`
pub(crate) fn sine_variation(t: f64, amplitude: f64, period: f64) -> f64 {
    1.0 + amplitude * (t / period).sin()
}

/// Static baselines for the traffic managers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaselineConfig {
    #[serde(default)]
    pub gtm: GtmBaseline,

    #[serde(default)]
    pub regional_tm: RegionalTmBaselines,
}

/// Produces oscillated traffic-manager and infrastructure metrics
#[derive(Debug, Clone, Default)]
pub struct BaselineMetricsGenerator {
    config: BaselineConfig,
}

impl BaselineMetricsGenerator {
    pub fn new(config: BaselineConfig) -> Self {
        Self { config }
    }

    /// Global traffic manager, evaluated on the unshifted clock
    pub fn gtm(&self, now: EpochSeconds) -> GtmMetrics {
        traffic::gtm(&self.config.gtm, now.as_secs_f64())
    }

    /// Regional traffic manager for one region
    pub fn regional_tm(&self, region: Region, now: EpochSeconds) -> RegionalTmMetrics {
        let t = now.as_secs_f64() + region.traffic_manager_phase_offset();
        traffic::regional_tm(region, self.config.regional_tm.get(region), t)
    }

    /// One infrastructure component in one region
    pub fn infrastructure(
        &self,
        region: Region,
        component: InfraComponent,
        now: EpochSeconds,
    ) -> InfraMetrics {
        let t = now.as_secs_f64() + region.infrastructure_phase_offset() + component.phase_offset();
        infrastructure::evaluate(region, component, t)
    }

    /// Every component in every listed region, regions outermost
    pub fn infrastructure_all(&self, regions: &[Region], now: EpochSeconds) -> Vec<InfraMetrics> {
        regions
            .iter()
            .flat_map(|&region| {
                InfraComponent::ALL
                    .iter()
                    .map(move |&component| self.infrastructure(region, component, now))
            })
            .collect()
    }
}
