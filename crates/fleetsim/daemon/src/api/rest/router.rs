//! API Router configuration

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main API router
pub fn create_router(state: AppState, enable_cors: bool) -> Router {
    let api_routes = Router::new()
        .route(
            "/simulation",
            get(handlers::get_simulation).put(handlers::update_simulation),
        )
        .route("/system/shutdown", post(handlers::shutdown_daemon));

    let router = Router::new()
        // Scrape and status
        .route("/metrics", get(handlers::fleet_metrics))
        .route("/status", get(handlers::simulator_status))
        .route("/health", get(handlers::health_check))
        .route("/internal/metrics", get(handlers::internal_metrics))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http());

    let router = if enable_cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MetricsSource;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use fleetsim_engine::{FixedClock, FleetEngine};
    use fleetsim_observability::MetricsRegistry;
    use fleetsim_types::EpochSeconds;
    use std::sync::Arc;
    use tokio::sync::watch;
    use tower::ServiceExt;

    const START: EpochSeconds = EpochSeconds(1_700_000_000.0);

    fn app() -> (Router, watch::Receiver<bool>) {
        app_with_push(false)
    }

    fn app_with_push(push_enabled: bool) -> (Router, watch::Receiver<bool>) {
        let source = MetricsSource::new(
            Arc::new(FleetEngine::with_defaults(START).unwrap()),
            Arc::new(FixedClock(START + 120.0)),
            MetricsRegistry::new().unwrap(),
        );
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let state = AppState::new(source, shutdown_tx, push_enabled);
        (create_router(state, true), shutdown_rx)
    }

    async fn send(router: &Router, method: Method, uri: &str, body: Option<&str>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_metrics_endpoint() {
        let (router, _) = app();
        let response = send(&router, Method::GET, "/metrics", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            handlers::EXPOSITION_CONTENT_TYPE
        );
        let text = body_text(response).await;
        assert_eq!(text.lines().count(), 163);
        assert!(text.contains("dual_region_system_uptime_seconds 120\n"));
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let (router, _) = app();
        let response = send(&router, Method::GET, "/status", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let status: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(status["simulation_mode"], "normal");
        assert_eq!(status["active_scenarios"], serde_json::json!([]));
        assert_eq!(status["regions"], serde_json::json!(["east_us", "west_us"]));
        assert_eq!(status["tenants"].as_array().unwrap().len(), 9);
        assert_eq!(status["started_at"], "2023-11-14T22:13:20Z");
        assert_eq!(status["uptime_seconds"], 120.0);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (router, _) = app();
        let response = send(&router, Method::GET, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let health: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(health["status"], "healthy");
        assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(health["uptime_seconds"], 120.0);
    }

    #[tokio::test]
    async fn test_update_simulation_changes_exposition() {
        let (router, _) = app();
        let response = send(
            &router,
            Method::PUT,
            "/api/v1/simulation",
            Some(r#"{"mode":"scenario_active","active_scenarios":["west_latency"]}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let text = body_text(send(&router, Method::GET, "/metrics", None).await).await;
        assert!(text.contains("dual_region_simulation_mode{mode=\"scenario_active\"} 1\n"));
        assert!(text.contains("dual_region_active_scenarios_count 1\n"));

        let current = body_text(send(&router, Method::GET, "/api/v1/simulation", None).await).await;
        let current: serde_json::Value = serde_json::from_str(&current).unwrap();
        assert_eq!(current["active_scenarios"], serde_json::json!(["west_latency"]));
    }

    #[tokio::test]
    async fn test_invalid_mode_rejected() {
        let (router, _) = app();
        let response = send(
            &router,
            Method::PUT,
            "/api/v1/simulation",
            Some(r#"{"mode":"major_outage"}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(error["code"], "BAD_REQUEST");

        let current = body_text(send(&router, Method::GET, "/api/v1/simulation", None).await).await;
        assert!(current.contains("\"normal\""));
    }

    #[tokio::test]
    async fn test_internal_metrics_count_scrapes() {
        let (router, _) = app();
        send(&router, Method::GET, "/metrics", None).await;
        send(&router, Method::GET, "/metrics", None).await;

        let text = body_text(send(&router, Method::GET, "/internal/metrics", None).await).await;
        assert!(text.contains("fleetsim_generations_total{outcome=\"success\",source=\"scrape\"} 2"));
        assert!(text.contains("fleetsim_last_render_lines 163"));
    }

    #[tokio::test]
    async fn test_shutdown_endpoint_signals() {
        let (router, mut shutdown_rx) = app_with_push(true);
        let response = send(&router, Method::POST, "/api/v1/system/shutdown", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "accepted");
        assert_eq!(body["stopping"], serde_json::json!(["listener", "pusher"]));

        shutdown_rx.changed().await.unwrap();
        assert!(*shutdown_rx.borrow());
    }

    #[tokio::test]
    async fn test_shutdown_without_pusher_names_listener_only() {
        let (router, _shutdown_rx) = app();
        let response = send(&router, Method::POST, "/api/v1/system/shutdown", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["stopping"], serde_json::json!(["listener"]));
    }

    #[tokio::test]
    async fn test_shutdown_with_no_listener_is_internal_error() {
        let (router, shutdown_rx) = app();
        drop(shutdown_rx);

        let response = send(&router, Method::POST, "/api/v1/system/shutdown", None).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let error: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(error["code"], "INTERNAL_ERROR");
        assert_eq!(error["error"], "Internal error: no shutdown listener is running");
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let (router, _) = app();
        let response = send(&router, Method::GET, "/nope", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
