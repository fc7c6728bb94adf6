//! Fleet problem-category generation
//!
//! Each problem category has a base value that grows with the tenant ordinal
//! and with the fleet's growth since start. The base is modulated by two sine
//! waves of different periods, evaluated on a region-shifted clock, then
//! rounded and clamped into the category's configured band.

use crate::config::CategoryBounds;
use crate::error::{EngineError, EngineResult};
use crate::growth::GrowthModel;
use fleetsim_types::{
    Category, CategoryCounts, EpochSeconds, FleetSnapshot, Region, SimulationState, Tenant,
};
use std::fmt;
use std::sync::Arc;

/// One sine component of a category multiplier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    pub amplitude: f64,
    pub period: f64,
}

impl Wave {
    const fn new(amplitude: f64, period: f64) -> Self {
        Self { amplitude, period }
    }

    fn at(&self, t: f64) -> f64 {
        self.amplitude * (t / self.period).sin()
    }
}

/// Base and oscillation constants for one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryProfile {
    /// Base value for tenant 0 at the base fleet size
    pub constant: f64,
    /// Base increase per tenant ordinal
    pub slope: f64,
    pub primary: Wave,
    pub secondary: Wave,
}

impl CategoryProfile {
    /// Degraded has the largest base and swing, down the smallest.
    pub const fn for_category(category: Category) -> Self {
        match category {
            Category::Degraded => Self {
                constant: 300.0,
                slope: 20.0,
                primary: Wave::new(0.3, 60.0),
                secondary: Wave::new(0.2, 120.0),
            },
            Category::Critical => Self {
                constant: 150.0,
                slope: 15.0,
                primary: Wave::new(0.4, 45.0),
                secondary: Wave::new(0.3, 90.0),
            },
            Category::Down => Self {
                constant: 75.0,
                slope: 10.0,
                primary: Wave::new(0.25, 55.0),
                secondary: Wave::new(0.15, 110.0),
            },
        }
    }

    pub fn base(&self, tenant_index: usize, fleet_scale: f64) -> f64 {
        (self.constant + tenant_index as f64 * self.slope) * fleet_scale
    }

    /// Oscillation centred on 1.0
    pub fn multiplier(&self, t: f64) -> f64 {
        1.0 + self.primary.at(t) + self.secondary.at(t)
    }
}

/// Extension point for scenario-driven perturbation of category counts.
///
/// The returned factor multiplies the category's oscillation before the value
/// is clamped, so an effect can push counts toward a band edge but never
/// outside it.
pub trait ScenarioEffect: Send + Sync + fmt::Debug {
    fn multiplier(
        &self,
        category: Category,
        tenant_index: usize,
        region: Region,
        now: EpochSeconds,
        state: &SimulationState,
    ) -> f64;
}

/// Leaves every category untouched regardless of state
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScenarioEffect;

impl ScenarioEffect for NoScenarioEffect {
    fn multiplier(
        &self,
        _category: Category,
        _tenant_index: usize,
        _region: Region,
        _now: EpochSeconds,
        _state: &SimulationState,
    ) -> f64 {
        1.0
    }
}

/// Derives bounded problem counts and full snapshots per cell
#[derive(Debug, Clone)]
pub struct CategoryGenerator {
    growth: GrowthModel,
    bounds: CategoryBounds,
    effect: Arc<dyn ScenarioEffect>,
}

impl CategoryGenerator {
    pub fn new(growth: GrowthModel, bounds: CategoryBounds) -> Self {
        Self {
            growth,
            bounds,
            effect: Arc::new(NoScenarioEffect),
        }
    }

    /// Replace the scenario seam
    pub fn with_scenario_effect(mut self, effect: Arc<dyn ScenarioEffect>) -> Self {
        self.effect = effect;
        self
    }

    pub fn growth(&self) -> &GrowthModel {
        &self.growth
    }

    pub fn bounds(&self) -> &CategoryBounds {
        &self.bounds
    }

    /// Problem counts for a cell under the default simulation state
    pub fn categories(&self, tenant_index: usize, region: Region, now: EpochSeconds) -> CategoryCounts {
        self.categories_in(tenant_index, region, now, &SimulationState::default())
    }

    /// Problem counts for a cell under an explicit simulation state
    pub fn categories_in(
        &self,
        tenant_index: usize,
        region: Region,
        now: EpochSeconds,
        state: &SimulationState,
    ) -> CategoryCounts {
        let fleet_size = self.growth.fleet_size(tenant_index, region, now);
        self.counts_for(tenant_index, region, now, fleet_size, state)
    }

    /// Full snapshot for a cell, with invariants checked.
    ///
    /// Fails if any category left its band or if the problems exceed the
    /// fleet size; the healthy count is never clamped.
    pub fn snapshot(
        &self,
        tenant: &Tenant,
        region: Region,
        now: EpochSeconds,
        state: &SimulationState,
    ) -> EngineResult<(u64, FleetSnapshot)> {
        let fleet_size = self.growth.fleet_size(tenant.index, region, now);
        let counts = self.counts_for(tenant.index, region, now, fleet_size, state);

        for category in Category::ALL {
            let bound = self.bounds.get(category);
            let value = counts.get(category);
            if !bound.contains(value) {
                return Err(EngineError::CategoryOutOfBounds {
                    tenant: tenant.name.clone(),
                    region,
                    category,
                    value,
                    min: bound.min,
                    max: bound.max,
                });
            }
        }

        let problems = counts.problems();
        let healthy = fleet_size
            .checked_sub(problems)
            .ok_or_else(|| EngineError::NegativeHealthy {
                tenant: tenant.name.clone(),
                region,
                fleet_size,
                problems,
            })?;

        Ok((fleet_size, FleetSnapshot::new(healthy, counts)))
    }

    fn counts_for(
        &self,
        tenant_index: usize,
        region: Region,
        now: EpochSeconds,
        fleet_size: u64,
        state: &SimulationState,
    ) -> CategoryCounts {
        let fleet_scale = fleet_size as f64 / self.growth.base_fleet_size() as f64;
        let t = now.as_secs_f64() + region.category_phase_offset();

        let value = |category: Category| {
            let profile = CategoryProfile::for_category(category);
            let scenario = self
                .effect
                .multiplier(category, tenant_index, region, now, state);
            let raw = profile.base(tenant_index, fleet_scale) * profile.multiplier(t) * scenario;
            self.bounds.get(category).clamp_rounded(raw)
        };

        CategoryCounts {
            degraded: value(Category::Degraded),
            critical: value(Category::Critical),
            down: value(Category::Down),
        }
    }
}
