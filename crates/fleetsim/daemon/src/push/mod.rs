//! Push-gateway delivery
//!
//! A [`Pusher`] renders on a fixed interval and hands the text to a
//! [`MetricsSink`]. Failures are logged and counted; the loop only ends when
//! the stop signal fires.

mod gateway;
mod pusher;

pub use gateway::PushGateway;
pub use pusher::Pusher;

use crate::error::PushError;
use async_trait::async_trait;

/// Destination for rendered exposition text
#[async_trait]
pub trait MetricsSink: Send + Sync {
    /// Replace the previously delivered metrics with `body`
    async fn push(&self, body: String) -> Result<(), PushError>;

    /// Human-readable destination, for logs
    fn target(&self) -> &str;
}
