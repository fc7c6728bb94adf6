//! Fleet growth model
//!
//! The daily growth budget is split evenly across every (tenant, region)
//! cell, then skewed so that higher tenant ordinals and the west region grow
//! a little faster. Growth is truncated to whole robots and added to the base
//! fleet size, which makes the output a non-decreasing step function of time.

use crate::config::FleetConfig;
use fleetsim_types::{EpochSeconds, Region};

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Maps elapsed uptime to a current fleet size per cell
#[derive(Debug, Clone)]
pub struct GrowthModel {
    start: EpochSeconds,
    base_fleet_size: u64,
    daily_growth_rate: f64,
    growth_per_cell: f64,
    tenant_skew: f64,
}

impl GrowthModel {
    /// Build a model anchored at `start`. The anchor never moves.
    pub fn new(config: &FleetConfig, start: EpochSeconds) -> Self {
        let cells = config.cell_count().max(1) as f64;
        Self {
            start,
            base_fleet_size: config.base_fleet_size_per_region,
            daily_growth_rate: config.daily_growth_rate,
            growth_per_cell: config.daily_growth_rate / cells,
            tenant_skew: config.tenant_growth_skew,
        }
    }

    pub fn start(&self) -> EpochSeconds {
        self.start
    }

    pub fn base_fleet_size(&self) -> u64 {
        self.base_fleet_size
    }

    /// Unskewed robots added per cell per day
    pub fn growth_per_cell(&self) -> f64 {
        self.growth_per_cell
    }

    /// Fractional days since start; zero before start
    pub fn days_elapsed(&self, now: EpochSeconds) -> f64 {
        now.elapsed_since(self.start) / SECONDS_PER_DAY
    }

    /// Current fleet size for one cell, never below the base size
    pub fn fleet_size(&self, tenant_index: usize, region: Region, now: EpochSeconds) -> u64 {
        let growth = self.days_elapsed(now) * self.growth_per_cell;
        let skew = 1.0 + tenant_index as f64 * self.tenant_skew + region.growth_skew();
        self.base_fleet_size + (growth * skew) as u64
    }

    /// Fleet-wide unskewed growth since start, for log summaries
    pub fn expected_growth(&self, now: EpochSeconds) -> f64 {
        self.days_elapsed(now) * self.daily_growth_rate
    }
}
