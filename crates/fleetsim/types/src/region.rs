//! Geographic simulation regions
//!
//! Regions are a closed enumeration. Each one carries fixed phase offsets that
//! desynchronize its oscillations from the other region, plus a growth skew
//! applied by the growth model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A geographic simulation zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// East US. The base region: every phase offset is zero.
    EastUs,

    /// West US. Shifted oscillations and marginally faster growth.
    WestUs,
}

impl Region {
    /// All regions in exposition order
    pub const ALL: [Region; 2] = [Region::EastUs, Region::WestUs];

    /// Label value used in metric lines and status documents
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::EastUs => "east_us",
            Region::WestUs => "west_us",
        }
    }

    /// Seconds added to the clock before evaluating fleet category waves
    pub fn category_phase_offset(&self) -> f64 {
        match self {
            Region::EastUs => 0.0,
            Region::WestUs => 100.0,
        }
    }

    /// Seconds added to the clock before evaluating regional traffic manager waves
    pub fn traffic_manager_phase_offset(&self) -> f64 {
        match self {
            Region::EastUs => 0.0,
            Region::WestUs => 150.0,
        }
    }

    /// Seconds added to the clock before evaluating infrastructure waves
    pub fn infrastructure_phase_offset(&self) -> f64 {
        match self {
            Region::EastUs => 0.0,
            Region::WestUs => 200.0,
        }
    }

    /// Extra fractional growth applied on top of the per-cell growth budget
    pub fn growth_skew(&self) -> f64 {
        match self {
            Region::EastUs => 0.0,
            Region::WestUs => 0.05,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known region
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region: {0}")]
pub struct ParseRegionError(pub String);

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "east_us" | "east" => Ok(Region::EastUs),
            "west_us" | "west" => Ok(Region::WestUs),
            other => Err(ParseRegionError(other.to_string())),
        }
    }
}
