//! Configuration for fleetsim-daemon

use crate::error::{DaemonError, DaemonResult};
use fleetsim_engine::{BaselineConfig, ExpositionOptions, FleetConfig};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Main daemon configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Push gateway delivery
    #[serde(default)]
    pub push: PushConfig,

    /// Fleet topology, growth and category bands
    #[serde(default)]
    pub fleet: FleetConfig,

    /// Traffic manager baselines
    #[serde(default)]
    pub baselines: BaselineConfig,

    /// Metric naming
    #[serde(default)]
    pub exposition: ExpositionOptions,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            enable_cors: true,
        }
    }
}

/// Push gateway configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushConfig {
    /// Push on a timer; scraping is always available
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Gateway base URL, without the `/metrics/...` path
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,

    #[serde(default = "default_job")]
    pub job: String,

    #[serde(default = "default_instance")]
    pub instance: String,

    /// Seconds between pushes
    #[serde(default = "default_push_interval")]
    pub interval_secs: u64,

    /// Client-side timeout per HTTP request
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            gateway_url: default_gateway_url(),
            job: default_job(),
            instance: default_instance(),
            interval_secs: default_push_interval(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl PushConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// `{gateway}/metrics/job/{job}/instance/{instance}`
    pub fn grouping_url(&self) -> String {
        format!(
            "{}/metrics/job/{}/instance/{}",
            self.gateway_url.trim_end_matches('/'),
            self.job,
            self.instance
        )
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value helpers
fn default_true() -> bool {
    true
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8090))
}

fn default_gateway_url() -> String {
    "http://localhost:9091".to_string()
}

fn default_job() -> String {
    "dual_region_metrics_v2".to_string()
}

fn default_instance() -> String {
    "global".to_string()
}

fn default_push_interval() -> u64 {
    30
}

fn default_request_timeout() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl DaemonConfig {
    /// Load configuration: defaults, then an optional file, then
    /// `FLEETSIM__SECTION__KEY` environment variables.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        // Add default configuration
        builder = builder.add_source(config::Config::try_from(&DaemonConfig::default())?);

        // Add file configuration if provided
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        // Lists are comma separated, e.g. FLEETSIM__FLEET__TENANTS=a,b,c
        builder = builder.add_source(
            config::Environment::with_prefix("FLEETSIM")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("fleet.tenants")
                .with_list_parse_key("fleet.regions"),
        );

        builder.build()?.try_deserialize()
    }

    /// Reject configurations the engine or the push loop cannot run with
    pub fn validate(&self) -> DaemonResult<()> {
        self.fleet.validate()?;

        if self.push.enabled {
            if self.push.interval_secs == 0 {
                return Err(DaemonError::Config(
                    "push.interval_secs must be greater than zero".to_string(),
                ));
            }
            if !self.push.gateway_url.starts_with("http://")
                && !self.push.gateway_url.starts_with("https://")
            {
                return Err(DaemonError::Config(format!(
                    "push.gateway_url must be an http(s) URL, got {}",
                    self.push.gateway_url
                )));
            }
        }

        Ok(())
    }
}
