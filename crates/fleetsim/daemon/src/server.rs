//! Server setup and lifecycle management

use crate::api::create_router;
use crate::api::rest::state::AppState;
use crate::config::DaemonConfig;
use crate::error::{DaemonError, DaemonResult};
use crate::push::{PushGateway, Pusher};
use crate::source::MetricsSource;
use fleetsim_engine::{FleetEngine, SystemClock};
use fleetsim_observability::MetricsRegistry;
use fleetsim_types::EpochSeconds;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;

/// Fleetsim Daemon Server
pub struct Server {
    config: DaemonConfig,
    source: MetricsSource,
}

impl Server {
    /// Validate configuration and build the engine, anchored at now
    pub fn new(config: DaemonConfig) -> DaemonResult<Self> {
        config.validate()?;

        let engine = FleetEngine::new(
            config.fleet.clone(),
            config.baselines.clone(),
            EpochSeconds::now(),
        )?
        .with_exposition(config.exposition.clone());

        let source = MetricsSource::new(
            Arc::new(engine),
            Arc::new(SystemClock),
            MetricsRegistry::new()?,
        );

        Ok(Self { config, source })
    }

    pub fn source(&self) -> &MetricsSource {
        &self.source
    }

    /// Run the server until a signal or the shutdown endpoint stops it
    pub async fn run(self) -> DaemonResult<()> {
        let addr = self.config.server.listen_addr;
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let state = AppState::new(
            self.source.clone(),
            shutdown_tx.clone(),
            self.config.push.enabled,
        );
        let app = create_router(state, self.config.server.enable_cors);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Fleetsim daemon listening on {}", addr);

        // Start pusher in background
        let pusher = if self.config.push.enabled {
            let gateway = PushGateway::new(&self.config.push)?;
            let pusher = Pusher::new(
                self.source.clone(),
                Arc::new(gateway),
                self.config.push.interval(),
            );
            Some(tokio::spawn(pusher.run(shutdown_rx.clone())))
        } else {
            tracing::info!("Push gateway delivery disabled");
            None
        };

        // Run server with graceful shutdown
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal(shutdown_rx))
            .await
            .map_err(|e| DaemonError::Server(e.to_string()))?;

        tracing::info!("Fleetsim daemon shutting down");

        // Stop pusher
        let _ = shutdown_tx.send(true);
        if let Some(handle) = pusher {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "Pusher task ended abnormally");
            }
        }

        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal(mut shutdown_rx: watch::Receiver<bool>) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let requested = async {
        while shutdown_rx.changed().await.is_ok() {
            if *shutdown_rx.borrow() {
                return;
            }
        }
        std::future::pending::<()>().await;
    };

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
        _ = requested => {
            tracing::info!("Shutdown requested via API, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = DaemonConfig::default();
        config.fleet.regions.clear();
        assert!(matches!(Server::new(config), Err(DaemonError::Engine(_))));
    }

    #[tokio::test]
    async fn test_new_builds_configured_engine() {
        let mut config = DaemonConfig::default();
        config.fleet.tenants = vec!["alpha".to_string(), "beta".to_string()];
        config.exposition.prefix = "lab".to_string();

        let server = Server::new(config).unwrap();
        assert_eq!(server.source().engine().tenants().len(), 2);

        let text = server.source().render("scrape").await.unwrap();
        assert!(text.starts_with("lab_robot_fleet_healthy{tenant=\"alpha\",region=\"east_us\"} "));
    }
}
