//! Error types for fleetsim-engine
//!
//! Generation itself has no recoverable failure modes. Every variant here is a
//! configuration defect or a broken invariant, surfaced instead of coerced.

use fleetsim_types::{Category, Region};
use thiserror::Error;

/// Errors raised while validating configuration or generating a tick
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Configuration rejected before the engine was built
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Problem categories exceeded the fleet size of a cell
    #[error(
        "Healthy count negative for tenant {tenant} in {region}: \
         fleet size {fleet_size} < problems {problems}"
    )]
    NegativeHealthy {
        tenant: String,
        region: Region,
        fleet_size: u64,
        problems: u64,
    },

    /// A category value escaped its configured band
    #[error("{category} count {value} outside [{min}, {max}] for tenant {tenant} in {region}")]
    CategoryOutOfBounds {
        tenant: String,
        region: Region,
        category: Category,
        value: u64,
        min: u64,
        max: u64,
    },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
