//! Global and regional traffic manager metrics

use super::sine_variation;
use fleetsim_types::Region;
use serde::{Deserialize, Serialize};

const SUCCESS_RATE_CEILING: f64 = 99.99;
const EAST_SHARE_RANGE: (f64, f64) = (40.0, 60.0);

/// Global traffic manager baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GtmBaseline {
    pub traffic_volume_req_per_min: u64,
    pub response_time_ms: f64,
    pub success_rate_percent: f64,
    /// East share of traffic; west is always the remainder to 100
    pub east_us_percent: f64,
}

impl Default for GtmBaseline {
    fn default() -> Self {
        Self {
            traffic_volume_req_per_min: 2_500_000,
            response_time_ms: 45.0,
            success_rate_percent: 99.95,
            east_us_percent: 52.0,
        }
    }
}

/// Regional traffic manager baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalTmBaseline {
    pub traffic_volume_req_per_min: u64,
    pub response_time_ms: f64,
    pub success_rate_percent: f64,
    /// Active load balancers
    pub load_balancer_health: u32,
}

impl RegionalTmBaseline {
    pub fn default_for(region: Region) -> Self {
        match region {
            Region::EastUs => Self {
                traffic_volume_req_per_min: 1_300_000,
                response_time_ms: 42.0,
                success_rate_percent: 99.96,
                load_balancer_health: 4,
            },
            Region::WestUs => Self {
                traffic_volume_req_per_min: 1_200_000,
                response_time_ms: 48.0,
                success_rate_percent: 99.94,
                load_balancer_health: 4,
            },
        }
    }
}

/// One baseline per region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalTmBaselines {
    #[serde(default = "east_default")]
    pub east_us: RegionalTmBaseline,

    #[serde(default = "west_default")]
    pub west_us: RegionalTmBaseline,
}

impl Default for RegionalTmBaselines {
    fn default() -> Self {
        Self {
            east_us: east_default(),
            west_us: west_default(),
        }
    }
}

impl RegionalTmBaselines {
    pub fn get(&self, region: Region) -> &RegionalTmBaseline {
        match region {
            Region::EastUs => &self.east_us,
            Region::WestUs => &self.west_us,
        }
    }
}

fn east_default() -> RegionalTmBaseline {
    RegionalTmBaseline::default_for(Region::EastUs)
}

fn west_default() -> RegionalTmBaseline {
    RegionalTmBaseline::default_for(Region::WestUs)
}

/// Global traffic manager values for one tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GtmMetrics {
    pub traffic_volume_req_per_min: u64,
    pub response_time_ms: f64,
    pub success_rate_percent: f64,
    pub east_us_traffic_percent: f64,
    pub west_us_traffic_percent: f64,
}

/// Regional traffic manager values for one tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalTmMetrics {
    pub region: Region,
    pub traffic_volume_req_per_min: u64,
    pub response_time_ms: f64,
    pub success_rate_percent: f64,
    pub load_balancer_health: u32,
}

pub(super) fn gtm(baseline: &GtmBaseline, t: f64) -> GtmMetrics {
    let traffic = baseline.traffic_volume_req_per_min as f64 * sine_variation(t, 0.1, 300.0);
    let response_time_ms = baseline.response_time_ms * sine_variation(t, 0.2, 180.0);
    let success_rate_percent =
        (baseline.success_rate_percent * sine_variation(t, 0.001, 240.0)).min(SUCCESS_RATE_CEILING);

    // One shared delta; west is derived so the split always sums to 100.
    let delta = 2.0 * (t / 600.0).sin();
    let east = (baseline.east_us_percent + delta).clamp(EAST_SHARE_RANGE.0, EAST_SHARE_RANGE.1);

    GtmMetrics {
        traffic_volume_req_per_min: traffic as u64,
        response_time_ms,
        success_rate_percent,
        east_us_traffic_percent: east,
        west_us_traffic_percent: 100.0 - east,
    }
}

pub(super) fn regional_tm(region: Region, baseline: &RegionalTmBaseline, t: f64) -> RegionalTmMetrics {
    let traffic = baseline.traffic_volume_req_per_min as f64 * sine_variation(t, 0.08, 250.0);
    let response_time_ms = baseline.response_time_ms * sine_variation(t, 0.15, 170.0);
    let success_rate_percent = (baseline.success_rate_percent * sine_variation(t, 0.0008, 220.0))
        .min(SUCCESS_RATE_CEILING);

    RegionalTmMetrics {
        region,
        traffic_volume_req_per_min: traffic as u64,
        response_time_ms,
        success_rate_percent,
        load_balancer_health: baseline.load_balancer_health,
    }
}
