//! Tenants sharing the simulated fleet
//!
//! A tenant is little more than a name and an ordinal. The ordinal is what the
//! generators use: it skews growth and category baselines so that tenants do
//! not move in lockstep.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default tenant roster, in ordinal order
pub const DEFAULT_TENANTS: [&str; 9] = [
    "enterprise",
    "manufacturing",
    "finance",
    "healthcare",
    "retail",
    "logistics",
    "energy",
    "telecom",
    "government",
];

/// A customer segment of the simulated fleet
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tenant {
    /// Label value used in metric lines
    pub name: String,

    /// Stable position in the roster, starting at zero
    pub index: usize,
}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Ordered set of tenants. Indices always match positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantRoster {
    tenants: Vec<Tenant>,
}

impl TenantRoster {
    /// Build a roster from names, assigning indices in order
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tenants = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| Tenant {
                name: name.into(),
                index,
            })
            .collect();
        Self { tenants }
    }

    pub fn len(&self) -> usize {
        self.tenants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tenant> {
        self.tenants.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.tenants.iter().map(|t| t.name.clone()).collect()
    }
}

impl Default for TenantRoster {
    fn default() -> Self {
        Self::from_names(DEFAULT_TENANTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster() {
        let roster = TenantRoster::default();
        assert_eq!(roster.len(), 9);

        let first = roster.iter().next().unwrap();
        assert_eq!(first.name, "enterprise");
        assert_eq!(first.index, 0);

        let last = roster.iter().last().unwrap();
        assert_eq!(last.name, "government");
        assert_eq!(last.index, 8);
    }

    #[test]
    fn test_indices_follow_order() {
        let roster = TenantRoster::from_names(["a", "b", "c"]);
        let indices: Vec<_> = roster.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(roster.names(), vec!["a", "b", "c"]);
    }
}
