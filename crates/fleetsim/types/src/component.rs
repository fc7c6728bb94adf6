//! Simulated infrastructure components
//!
//! Each component is instantiated once per region. Components are
//! desynchronized from one another by a phase offset taken from a fixed table
//! below. The table is part of the output contract: changing an entry shifts
//! every generated value for that component.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An infrastructure service whose baseline metrics are simulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfraComponent {
    /// Container orchestrator
    Orchestrator,

    /// High-availability add-on
    HaAddon,

    /// Shared block storage
    SharedStorage,

    /// Search-index cluster
    Elasticsearch,

    /// Relational database
    Database,
}

impl InfraComponent {
    /// All components in exposition order
    pub const ALL: [InfraComponent; 5] = [
        InfraComponent::Orchestrator,
        InfraComponent::HaAddon,
        InfraComponent::SharedStorage,
        InfraComponent::Elasticsearch,
        InfraComponent::Database,
    ];

    /// Name used inside metric names
    pub fn as_str(&self) -> &'static str {
        match self {
            InfraComponent::Orchestrator => "orchestrator",
            InfraComponent::HaAddon => "ha_addon",
            InfraComponent::SharedStorage => "shared_storage",
            InfraComponent::Elasticsearch => "elasticsearch",
            InfraComponent::Database => "database",
        }
    }

    /// Fixed phase offset in seconds, in `[0, 100)`
    pub fn phase_offset(&self) -> f64 {
        match self {
            InfraComponent::Orchestrator => 17.0,
            InfraComponent::HaAddon => 42.0,
            InfraComponent::SharedStorage => 63.0,
            InfraComponent::Elasticsearch => 8.0,
            InfraComponent::Database => 91.0,
        }
    }
}

impl fmt::Display for InfraComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_phase_offsets_are_distinct_and_bounded() {
        let offsets: HashSet<u64> = InfraComponent::ALL
            .iter()
            .map(|c| c.phase_offset() as u64)
            .collect();
        assert_eq!(offsets.len(), InfraComponent::ALL.len());
        assert!(InfraComponent::ALL
            .iter()
            .all(|c| (0.0..100.0).contains(&c.phase_offset())));
    }

    #[test]
    fn test_names() {
        assert_eq!(InfraComponent::HaAddon.to_string(), "ha_addon");
        assert_eq!(InfraComponent::Elasticsearch.as_str(), "elasticsearch");
    }
}
