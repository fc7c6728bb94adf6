//! Health and status handlers

use crate::api::rest::state::AppState;
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use fleetsim_types::{Region, SimulationMode};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: f64,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.source.uptime_seconds(),
    })
}

/// Simulator status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub simulation_mode: SimulationMode,
    pub active_scenarios: Vec<String>,
    pub regions: Vec<Region>,
    pub tenants: Vec<String>,
    /// Growth anchor; `None` only for a start outside chrono's range
    pub started_at: Option<DateTime<Utc>>,
    pub uptime_seconds: f64,
}

/// Simulator status endpoint
pub async fn simulator_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let simulation = state.source.simulation().await;
    let engine = state.source.engine();

    Json(StatusResponse {
        simulation_mode: simulation.mode,
        active_scenarios: simulation.active_scenarios,
        regions: engine.regions().to_vec(),
        tenants: engine.tenants().names(),
        started_at: engine.start().to_datetime(),
        uptime_seconds: state.source.uptime_seconds(),
    })
}
