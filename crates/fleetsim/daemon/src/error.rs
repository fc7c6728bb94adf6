//! Error types for fleetsim-daemon

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fleetsim_engine::EngineError;
use fleetsim_observability::ObservabilityError;
use serde::Serialize;
use thiserror::Error;

/// Daemon-level errors
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server startup error
    #[error("Server error: {0}")]
    Server(String),

    /// Engine rejected its configuration
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Tracing or metrics setup failed
    #[error("Observability error: {0}")]
    Observability(#[from] ObservabilityError),

    /// Push client could not be built
    #[error("Push error: {0}")]
    Push(#[from] PushError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Push gateway delivery errors
#[derive(Debug, Error)]
pub enum PushError {
    /// Connection, timeout or protocol failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Gateway answered with a non-2xx status
    #[error("{method} {url} returned HTTP {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },
}

/// API-specific errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generation violated a fleet invariant
    #[error("Generation error: {0}")]
    Engine(#[from] EngineError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Engine(_) => (StatusCode::INTERNAL_SERVER_ERROR, "GENERATION_ERROR"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for daemon operations
pub type DaemonResult<T> = Result<T, DaemonError>;
