//! Fleet engine facade
//!
//! Composes growth, categories, aggregation, baselines and exposition into a
//! single call per tick. The engine holds only immutable configuration and the
//! process start time, so `&FleetEngine` is all any caller needs.

use crate::aggregate::{CellSnapshot, FleetRollup};
use crate::baseline::{BaselineConfig, BaselineMetricsGenerator, GtmMetrics, InfraMetrics, RegionalTmMetrics};
use crate::category::{CategoryGenerator, ScenarioEffect};
use crate::config::FleetConfig;
use crate::error::EngineResult;
use crate::exposition::{self, ExpositionOptions};
use crate::growth::GrowthModel;
use fleetsim_types::{EpochSeconds, Region, SimulationState, TenantRoster};
use serde::Serialize;
use std::sync::Arc;

/// Everything generated for one tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetReport {
    pub generated_at: EpochSeconds,
    pub uptime_seconds: f64,
    /// Regions outermost, tenants in roster order
    pub cells: Vec<CellSnapshot>,
    pub rollup: FleetRollup,
    pub gtm: GtmMetrics,
    pub regional_tm: Vec<RegionalTmMetrics>,
    pub infrastructure: Vec<InfraMetrics>,
    pub state: SimulationState,
}

/// Deterministic metrics generator for the whole fleet
#[derive(Debug, Clone)]
pub struct FleetEngine {
    roster: TenantRoster,
    regions: Vec<Region>,
    categories: CategoryGenerator,
    baselines: BaselineMetricsGenerator,
    exposition: ExpositionOptions,
}

impl FleetEngine {
    /// Validate configuration and anchor growth at `start`
    pub fn new(fleet: FleetConfig, baselines: BaselineConfig, start: EpochSeconds) -> EngineResult<Self> {
        fleet.validate()?;

        let growth = GrowthModel::new(&fleet, start);
        tracing::info!(
            regions = ?fleet.regions,
            tenants = fleet.tenants.len(),
            base_fleet_size_per_region = fleet.base_fleet_size_per_region,
            daily_growth_rate = fleet.daily_growth_rate,
            growth_per_cell = growth.growth_per_cell(),
            "Initialized fleet engine"
        );

        Ok(Self {
            roster: TenantRoster::from_names(fleet.tenants.iter().cloned()),
            regions: fleet.regions.clone(),
            categories: CategoryGenerator::new(growth, fleet.bounds),
            baselines: BaselineMetricsGenerator::new(baselines),
            exposition: ExpositionOptions::default(),
        })
    }

    /// Engine with default configuration
    pub fn with_defaults(start: EpochSeconds) -> EngineResult<Self> {
        Self::new(FleetConfig::default(), BaselineConfig::default(), start)
    }

    pub fn with_exposition(mut self, options: ExpositionOptions) -> Self {
        self.exposition = options;
        self
    }

    pub fn with_scenario_effect(mut self, effect: Arc<dyn ScenarioEffect>) -> Self {
        self.categories = self.categories.with_scenario_effect(effect);
        self
    }

    pub fn start(&self) -> EpochSeconds {
        self.categories.growth().start()
    }

    pub fn tenants(&self) -> &TenantRoster {
        &self.roster
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn category_generator(&self) -> &CategoryGenerator {
        &self.categories
    }

    pub fn baseline_generator(&self) -> &BaselineMetricsGenerator {
        &self.baselines
    }

    /// Current fleet size of a cell
    pub fn fleet_size(&self, tenant_index: usize, region: Region, now: EpochSeconds) -> u64 {
        self.categories.growth().fleet_size(tenant_index, region, now)
    }

    pub fn uptime_seconds(&self, now: EpochSeconds) -> f64 {
        now.elapsed_since(self.start())
    }

    /// Compute the full snapshot tree for `now`
    pub fn generate(&self, now: EpochSeconds, state: &SimulationState) -> EngineResult<FleetReport> {
        let mut cells = Vec::with_capacity(self.regions.len() * self.roster.len());
        for &region in &self.regions {
            for tenant in self.roster.iter() {
                let (fleet_size, snapshot) = self.categories.snapshot(tenant, region, now, state)?;
                cells.push(CellSnapshot {
                    tenant: tenant.clone(),
                    region,
                    fleet_size,
                    snapshot,
                });
            }
        }

        let rollup = FleetRollup::from_cells(&self.regions, &cells);

        let regional_tm = self
            .regions
            .iter()
            .map(|&region| self.baselines.regional_tm(region, now))
            .collect();

        let report = FleetReport {
            generated_at: now,
            uptime_seconds: self.uptime_seconds(now),
            cells,
            gtm: self.baselines.gtm(now),
            regional_tm,
            infrastructure: self.baselines.infrastructure_all(&self.regions, now),
            state: state.clone(),
            rollup,
        };

        let global = &report.rollup.global;
        tracing::info!(
            mode = %state.mode,
            global_total = global.total(),
            expected_growth = self.categories.growth().expected_growth(now).round() as u64,
            healthy_percent = %format!("{:.3}", global.healthy_percent()),
            problems = global.problems(),
            "Generated fleet metrics"
        );

        Ok(report)
    }

    /// Compute and render the exposition text for `now`
    pub fn render(&self, now: EpochSeconds, state: &SimulationState) -> EngineResult<String> {
        let report = self.generate(now, state)?;
        Ok(self.render_report(&report))
    }

    pub fn render_report(&self, report: &FleetReport) -> String {
        exposition::render(report, &self.exposition)
    }
}
