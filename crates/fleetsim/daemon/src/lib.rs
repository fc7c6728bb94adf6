//! Fleetsim Daemon library
//!
//! This module provides the runtime around the fleet engine:
//! - REST API for scraping, status and simulation control
//! - Push-gateway delivery on a fixed interval
//! - Configuration loading
//! - Server lifecycle management

pub mod api;
pub mod config;
pub mod error;
pub mod push;
pub mod server;
pub mod source;

pub use self::config::DaemonConfig;
pub use error::{ApiError, DaemonError, PushError};
pub use push::{MetricsSink, PushGateway, Pusher};
pub use server::Server;
pub use source::MetricsSource;
