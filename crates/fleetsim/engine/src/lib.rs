//! Fleetsim Engine
//!
//! Derives the full telemetry tree for the simulated fleet from three inputs:
//! the fixed process start time, static configuration, and the current time.
//! Nothing is cached between calls, so an engine can be shared freely across
//! threads and invoked from both the scrape path and the push loop.
//!
//! ## Pipeline
//!
//! 1. [`GrowthModel`] turns elapsed days into a fleet size per cell
//! 2. [`CategoryGenerator`] derives bounded degraded/critical/down counts
//! 3. [`FleetRollup`] folds cells into regional and global totals
//! 4. [`BaselineMetricsGenerator`] oscillates traffic-manager and
//!    infrastructure baselines
//! 5. [`exposition::render`] formats everything as metric lines

pub mod aggregate;
pub mod baseline;
pub mod category;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod exposition;
pub mod growth;

pub use aggregate::{CellSnapshot, FleetRollup, RegionalTotal};
pub use baseline::{
    BaselineConfig, BaselineMetricsGenerator, GtmBaseline, GtmMetrics, InfraMetrics, InfraSample,
    Precision, RegionalTmBaseline, RegionalTmMetrics,
};
pub use category::{CategoryGenerator, CategoryProfile, NoScenarioEffect, ScenarioEffect};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CategoryBound, CategoryBounds, FleetConfig};
pub use engine::{FleetEngine, FleetReport};
pub use error::{EngineError, EngineResult};
pub use exposition::ExpositionOptions;
pub use growth::GrowthModel;
