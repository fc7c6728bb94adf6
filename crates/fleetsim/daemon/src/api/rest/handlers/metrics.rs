//! Metric exposition handlers

use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult};
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

/// Content type of the text exposition format
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Simulated fleet metrics
pub async fn fleet_metrics(State(state): State<AppState>) -> ApiResult<Response> {
    let body = state.source.render("scrape").await.map_err(|e| {
        tracing::error!(error = %e, "Fleet metrics generation failed");
        ApiError::from(e)
    })?;

    Ok(([(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)], body).into_response())
}

/// The daemon's own instrumentation
pub async fn internal_metrics(State(state): State<AppState>) -> ApiResult<Response> {
    let body = state
        .source
        .metrics()
        .export()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(([(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)], body).into_response())
}
