//! Fleetsim Types - Core types for the fleet telemetry simulation
//!
//! Fleetsim synthesizes time-varying telemetry for a simulated robot fleet
//! that spans several tenants and geographic regions. Every value is derived
//! from elapsed wall-clock time and static configuration, so the types in
//! this crate are plain data: nothing here owns a clock or mutable state.
//!
//! ## Key Concepts
//!
//! - **Tenant**: A named customer segment with a stable ordinal index
//! - **Region**: A fixed geographic zone carrying phase offsets and growth skew
//! - **FleetSnapshot**: Healthy/degraded/critical/down counts for one cell
//! - **InfraComponent**: One of the five simulated infrastructure services
//! - **SimulationState**: Current mode and active scenario identifiers

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod component;
pub mod region;
pub mod simulation;
pub mod snapshot;
pub mod tenant;
pub mod time;

// Re-export main types
pub use component::InfraComponent;
pub use region::{ParseRegionError, Region};
pub use simulation::{ParseModeError, SimulationMode, SimulationState};
pub use snapshot::{Category, CategoryCounts, FleetSnapshot};
pub use tenant::{Tenant, TenantRoster, DEFAULT_TENANTS};
pub use time::EpochSeconds;
