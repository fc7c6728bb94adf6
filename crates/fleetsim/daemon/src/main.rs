//! Fleetsim Daemon - synthetic robot fleet telemetry
//!
//! The daemon provides:
//! - `GET /metrics` with the full dual-region fleet exposition
//! - Periodic delivery of the same text to a Prometheus push gateway
//! - Status and simulation-mode endpoints

use clap::Parser;
use fleetsim_daemon::config::DaemonConfig;
use fleetsim_daemon::error::{DaemonError, DaemonResult};
use fleetsim_daemon::server::Server;
use fleetsim_observability::TracingConfig;

/// Fleetsim Daemon CLI
#[derive(Parser)]
#[command(name = "fleetsimd")]
#[command(about = "Fleetsim Daemon - synthetic robot fleet telemetry", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "FLEETSIM_CONFIG")]
    config: Option<String>,

    /// Listen address, overrides the configuration file
    #[arg(short, long, env = "FLEETSIM_LISTEN_ADDR")]
    listen: Option<String>,

    /// Log level, overrides the configuration file
    #[arg(long, env = "FLEETSIM_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "FLEETSIM_LOG_JSON")]
    json: bool,

    /// Push gateway base URL
    #[arg(long, env = "PUSHGATEWAY_URL")]
    pushgateway_url: Option<String>,

    /// Disable push-gateway delivery
    #[arg(long)]
    no_push: bool,
}

impl Cli {
    fn apply(self, config: &mut DaemonConfig) -> DaemonResult<()> {
        if let Some(listen) = self.listen {
            config.server.listen_addr = listen
                .parse()
                .map_err(|e| DaemonError::Config(format!("Invalid listen address: {}", e)))?;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        if self.json {
            config.logging.json = true;
        }
        if let Some(url) = self.pushgateway_url {
            config.push.gateway_url = url;
        }
        if self.no_push {
            config.push.enabled = false;
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> DaemonResult<()> {
    let cli = Cli::parse();

    // Load configuration, then let CLI flags win
    let mut config = DaemonConfig::load(cli.config.as_deref())
        .map_err(|e| DaemonError::Config(e.to_string()))?;
    cli.apply(&mut config)?;

    let mut tracing_config =
        TracingConfig::new("fleetsimd").with_log_level(config.logging.level.clone());
    if config.logging.json {
        tracing_config = tracing_config.with_json_format();
    }
    fleetsim_observability::init_tracing(&tracing_config)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        listen = %config.server.listen_addr,
        push_enabled = config.push.enabled,
        gateway = %config.push.gateway_url,
        "Starting fleetsim daemon"
    );

    let server = Server::new(config)?;
    server.run().await
}
