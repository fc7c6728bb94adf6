//! Daemon lifecycle

use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult};
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ShutdownResponse {
    pub status: &'static str,
    /// Tasks that were told to stop
    pub stopping: Vec<&'static str>,
}

/// Flip the shutdown channel. The HTTP listener drains in-flight requests
/// and the pusher exits before its next tick.
pub async fn shutdown_daemon(State(state): State<AppState>) -> ApiResult<Json<ShutdownResponse>> {
    let stopping = state.shutdown_targets();

    state.shutdown_tx.send(true).map_err(|_| {
        tracing::error!(?stopping, "Shutdown requested but no task is listening");
        ApiError::Internal("no shutdown listener is running".to_string())
    })?;

    tracing::info!(?stopping, "Shutdown requested via API");
    Ok(Json(ShutdownResponse {
        status: "accepted",
        stopping,
    }))
}
