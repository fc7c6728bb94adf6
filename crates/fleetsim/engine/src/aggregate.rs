//! Tenant -> region -> global rollups
//!
//! Strictly additive: no clamping or adjustment happens at this layer.

use fleetsim_types::{FleetSnapshot, Region, Tenant};
use serde::Serialize;

/// Snapshot of one (tenant, region) cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellSnapshot {
    pub tenant: Tenant,
    pub region: Region,
    pub fleet_size: u64,
    pub snapshot: FleetSnapshot,
}

/// Totals for one region across all tenants
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionalTotal {
    pub region: Region,
    pub totals: FleetSnapshot,
}

/// Regional and global sums of a set of cells
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetRollup {
    /// One entry per requested region, in request order
    pub regional: Vec<RegionalTotal>,
    pub global: FleetSnapshot,
}

impl FleetRollup {
    /// Fold cells into per-region sums, then sum the regions.
    ///
    /// Cells whose region is not listed do not contribute.
    pub fn from_cells(regions: &[Region], cells: &[CellSnapshot]) -> Self {
        let regional: Vec<RegionalTotal> = regions
            .iter()
            .map(|&region| RegionalTotal {
                region,
                totals: cells
                    .iter()
                    .filter(|cell| cell.region == region)
                    .map(|cell| cell.snapshot)
                    .sum(),
            })
            .collect();

        let global = regional.iter().map(|r| r.totals).sum();

        Self { regional, global }
    }

    pub fn regional_total(&self, region: Region) -> Option<FleetSnapshot> {
        self.regional
            .iter()
            .find(|r| r.region == region)
            .map(|r| r.totals)
    }
}
