//! Simulation mode handlers

use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult};
use axum::{extract::State, Json};
use fleetsim_types::{SimulationMode, SimulationState};
use serde::Deserialize;

/// Replacement simulation state. The mode is parsed by hand so that an
/// unknown value is a 400 with a useful message.
#[derive(Debug, Deserialize)]
pub struct UpdateSimulationRequest {
    pub mode: String,
    #[serde(default)]
    pub active_scenarios: Vec<String>,
}

/// Current simulation state
pub async fn get_simulation(State(state): State<AppState>) -> Json<SimulationState> {
    Json(state.source.simulation().await)
}

/// Replace the simulation state
pub async fn update_simulation(
    State(state): State<AppState>,
    Json(request): Json<UpdateSimulationRequest>,
) -> ApiResult<Json<SimulationState>> {
    let mode: SimulationMode = request
        .mode
        .parse()
        .map_err(|e: fleetsim_types::ParseModeError| ApiError::BadRequest(e.to_string()))?;

    let updated = SimulationState::new(mode, request.active_scenarios);
    state.source.set_simulation(updated.clone()).await;

    tracing::info!(
        mode = %updated.mode,
        active_scenarios = updated.active_scenario_count(),
        "Simulation state updated"
    );

    Ok(Json(updated))
}
