//! Fleet health snapshots
//!
//! A [`FleetSnapshot`] is the health breakdown of one tenant in one region, or
//! the element-wise sum of many such cells. Snapshots are recomputed every
//! tick and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A problem category with its own configured bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Degraded,
    Critical,
    Down,
}

impl Category {
    /// All problem categories, largest baseline first
    pub const ALL: [Category; 3] = [Category::Degraded, Category::Critical, Category::Down];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Degraded => "degraded",
            Category::Critical => "critical",
            Category::Down => "down",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Problem counts for one cell, before healthy is derived
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub degraded: u64,
    pub critical: u64,
    pub down: u64,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> u64 {
        match category {
            Category::Degraded => self.degraded,
            Category::Critical => self.critical,
            Category::Down => self.down,
        }
    }

    /// Sum of all problem categories
    pub fn problems(&self) -> u64 {
        self.degraded + self.critical + self.down
    }
}

/// Health breakdown of a fleet cell or an aggregate of cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSnapshot {
    pub healthy: u64,
    pub degraded: u64,
    pub critical: u64,
    pub down: u64,
}

impl FleetSnapshot {
    /// Combine a healthy count with problem counts
    pub fn new(healthy: u64, counts: CategoryCounts) -> Self {
        Self {
            healthy,
            degraded: counts.degraded,
            critical: counts.critical,
            down: counts.down,
        }
    }

    /// Total robots: always the sum of the four categories
    pub fn total(&self) -> u64 {
        self.healthy + self.degraded + self.critical + self.down
    }

    /// Robots in any problem category
    pub fn problems(&self) -> u64 {
        self.degraded + self.critical + self.down
    }

    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts {
            degraded: self.degraded,
            critical: self.critical,
            down: self.down,
        }
    }

    /// Healthy share of the total, in percent. Zero for an empty snapshot.
    pub fn healthy_percent(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.healthy as f64 / total as f64 * 100.0
    }
}

impl Add for FleetSnapshot {
    type Output = FleetSnapshot;

    fn add(mut self, rhs: FleetSnapshot) -> FleetSnapshot {
        self += rhs;
        self
    }
}

impl AddAssign for FleetSnapshot {
    fn add_assign(&mut self, rhs: FleetSnapshot) {
        self.healthy += rhs.healthy;
        self.degraded += rhs.degraded;
        self.critical += rhs.critical;
        self.down += rhs.down;
    }
}

impl Sum for FleetSnapshot {
    fn sum<I: Iterator<Item = FleetSnapshot>>(iter: I) -> Self {
        iter.fold(FleetSnapshot::default(), Add::add)
    }
}

impl<'a> Sum<&'a FleetSnapshot> for FleetSnapshot {
    fn sum<I: Iterator<Item = &'a FleetSnapshot>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
