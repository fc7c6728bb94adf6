//! Simulation mode and active scenarios
//!
//! The state is an explicit value: the daemon owns the only mutable copy and
//! hands a snapshot to the engine on every tick.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Operating mode of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationMode {
    /// Baseline behaviour
    #[default]
    Normal,

    /// One or more scenarios are declared active
    ScenarioActive,
}

impl SimulationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimulationMode::Normal => "normal",
            SimulationMode::ScenarioActive => "scenario_active",
        }
    }
}

impl fmt::Display for SimulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known mode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid simulation mode: {0} (valid modes: normal, scenario_active)")]
pub struct ParseModeError(pub String);

impl FromStr for SimulationMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(SimulationMode::Normal),
            "scenario_active" => Ok(SimulationMode::ScenarioActive),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Mode plus the ordered list of active scenario identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationState {
    pub mode: SimulationMode,

    #[serde(default)]
    pub active_scenarios: Vec<String>,
}

impl SimulationState {
    pub fn new(mode: SimulationMode, active_scenarios: Vec<String>) -> Self {
        Self {
            mode,
            active_scenarios,
        }
    }

    pub fn active_scenario_count(&self) -> usize {
        self.active_scenarios.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_normal() {
        let state = SimulationState::default();
        assert_eq!(state.mode, SimulationMode::Normal);
        assert_eq!(state.active_scenario_count(), 0);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("normal".parse(), Ok(SimulationMode::Normal));
        assert_eq!("scenario_active".parse(), Ok(SimulationMode::ScenarioActive));
        assert!("major_outage".parse::<SimulationMode>().is_err());
    }

    #[test]
    fn test_state_deserializes_without_scenarios() {
        let state: SimulationState = serde_json::from_str(r#"{"mode":"scenario_active"}"#).unwrap();
        assert_eq!(state.mode, SimulationMode::ScenarioActive);
        assert!(state.active_scenarios.is_empty());
    }
}
