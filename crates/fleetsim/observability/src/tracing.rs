//! Tracing initialization

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Console output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Configuration for tracing initialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracingConfig {
    /// Service name recorded in the startup event
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Log level filter, overridden by `RUST_LOG` when set
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_service_name() -> String {
    "fleetsimd".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl TracingConfig {
    /// Create config for a specific service
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Enable JSON format
    pub fn with_json_format(mut self) -> Self {
        self.format = LogFormat::Json;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    fn env_filter(&self) -> crate::error::Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.level)
                .map_err(|e| crate::error::ObservabilityError::Tracing(e.to_string())),
        }
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &TracingConfig) -> crate::error::Result<()> {
    let subscriber = tracing_subscriber::registry().with(config.env_filter()?);

    let installed = match config.format {
        LogFormat::Json => subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init(),
        LogFormat::Pretty => subscriber.with(fmt::layer().with_target(true)).try_init(),
    };
    installed.map_err(|e| crate::error::ObservabilityError::Tracing(e.to_string()))?;

    ::tracing::info!(service = %config.service_name, level = %config.level, "Tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_config() {
        let config = TracingConfig::new("fleetsimd")
            .with_log_level("debug")
            .with_json_format();

        assert_eq!(config.service_name, "fleetsimd");
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn test_config_defaults_from_partial_input() {
        let config: TracingConfig = serde_json::from_str(r#"{"level":"warn"}"#).unwrap();
        assert_eq!(config.service_name, "fleetsimd");
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, LogFormat::Pretty);
    }
}
