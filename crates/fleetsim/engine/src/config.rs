//! Static fleet configuration
//!
//! Everything here is read-only once the engine is built. Defaults reproduce
//! the reference fleet: nine tenants, two regions, 856,000 robots per tenant
//! per region, and 450 robots of growth per day across the whole fleet.

use crate::error::{EngineError, EngineResult};
use fleetsim_types::{Category, Region, DEFAULT_TENANTS};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Fleet shape, growth and category bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetConfig {
    /// Tenant names in ordinal order
    #[serde(default = "default_tenants")]
    pub tenants: Vec<String>,

    /// Simulated regions in exposition order
    #[serde(default = "default_regions")]
    pub regions: Vec<Region>,

    /// Robots per tenant per region at process start
    #[serde(default = "default_base_fleet_size")]
    pub base_fleet_size_per_region: u64,

    /// Robots added per day across every tenant and region
    #[serde(default = "default_daily_growth_rate")]
    pub daily_growth_rate: f64,

    /// Extra fractional growth per tenant ordinal
    #[serde(default = "default_tenant_growth_skew")]
    pub tenant_growth_skew: f64,

    /// Per-category `[min, max]` bands
    #[serde(default)]
    pub bounds: CategoryBounds,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            tenants: default_tenants(),
            regions: default_regions(),
            base_fleet_size_per_region: default_base_fleet_size(),
            daily_growth_rate: default_daily_growth_rate(),
            tenant_growth_skew: default_tenant_growth_skew(),
            bounds: CategoryBounds::default(),
        }
    }
}

impl FleetConfig {
    /// Number of (tenant, region) cells
    pub fn cell_count(&self) -> usize {
        self.tenants.len() * self.regions.len()
    }

    /// Reject configurations that could break the snapshot invariants.
    ///
    /// The category maxima must sum to less than the base fleet size so that
    /// the healthy count of a cell can never go negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.tenants.is_empty() {
            return Err(EngineError::InvalidConfig("at least one tenant is required".into()));
        }
        let mut seen = HashSet::new();
        for tenant in &self.tenants {
            if tenant.is_empty() {
                return Err(EngineError::InvalidConfig("tenant names must not be empty".into()));
            }
            if !seen.insert(tenant.as_str()) {
                return Err(EngineError::InvalidConfig(format!(
                    "duplicate tenant: {}",
                    tenant
                )));
            }
        }

        if self.regions.is_empty() {
            return Err(EngineError::InvalidConfig("at least one region is required".into()));
        }
        let unique_regions: HashSet<_> = self.regions.iter().collect();
        if unique_regions.len() != self.regions.len() {
            return Err(EngineError::InvalidConfig("duplicate region".into()));
        }

        if self.base_fleet_size_per_region == 0 {
            return Err(EngineError::InvalidConfig(
                "base_fleet_size_per_region must be positive".into(),
            ));
        }
        if !self.daily_growth_rate.is_finite() || self.daily_growth_rate < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "daily_growth_rate must be a non-negative number, got {}",
                self.daily_growth_rate
            )));
        }
        if !self.tenant_growth_skew.is_finite() || self.tenant_growth_skew < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "tenant_growth_skew must be a non-negative number, got {}",
                self.tenant_growth_skew
            )));
        }

        for category in Category::ALL {
            let bound = self.bounds.get(category);
            if bound.min > bound.max {
                return Err(EngineError::InvalidConfig(format!(
                    "{} bounds inverted: min {} > max {}",
                    category, bound.min, bound.max
                )));
            }
        }

        let max_problems = self.bounds.max_problems();
        if max_problems >= self.base_fleet_size_per_region {
            return Err(EngineError::InvalidConfig(format!(
                "category maxima sum to {} which is not below the base fleet size {}",
                max_problems, self.base_fleet_size_per_region
            )));
        }

        Ok(())
    }
}

/// Inclusive band for one problem category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBound {
    pub min: u64,
    pub max: u64,
}

impl CategoryBound {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Round a raw value and clamp it into the band.
    ///
    /// NaN clamps to `min`.
    pub fn clamp_rounded(&self, raw: f64) -> u64 {
        let rounded = raw.round();
        if rounded.is_nan() {
            return self.min;
        }
        rounded.max(self.min as f64).min(self.max as f64) as u64
    }
}

/// Bands for all three problem categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBounds {
    pub degraded: CategoryBound,
    pub critical: CategoryBound,
    pub down: CategoryBound,
}

impl Default for CategoryBounds {
    fn default() -> Self {
        Self {
            degraded: CategoryBound::new(150, 500),
            critical: CategoryBound::new(50, 250),
            down: CategoryBound::new(25, 150),
        }
    }
}

impl CategoryBounds {
    pub fn get(&self, category: Category) -> CategoryBound {
        match category {
            Category::Degraded => self.degraded,
            Category::Critical => self.critical,
            Category::Down => self.down,
        }
    }

    /// Largest possible problem count for a single cell
    pub fn max_problems(&self) -> u64 {
        self.degraded.max + self.critical.max + self.down.max
    }
}

// Default value helpers
fn default_tenants() -> Vec<String> {
    DEFAULT_TENANTS.iter().map(|t| t.to_string()).collect()
}

fn default_regions() -> Vec<Region> {
    Region::ALL.to_vec()
}

fn default_base_fleet_size() -> u64 {
    856_000
}

fn default_daily_growth_rate() -> f64 {
    450.0
}

fn default_tenant_growth_skew() -> f64 {
    0.05
}
