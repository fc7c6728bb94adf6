//! API request handlers

mod health;
mod metrics;
mod simulation;
mod system;

pub use health::*;
pub use metrics::*;
pub use simulation::*;
pub use system::*;
