//! Time sources for the engine's callers
//!
//! The engine takes `now` as an argument; callers pick where it comes from.

use fleetsim_types::EpochSeconds;

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> EpochSeconds;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> EpochSeconds {
        EpochSeconds::now()
    }
}

/// A frozen instant, for reproducible output
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub EpochSeconds);

impl Clock for FixedClock {
    fn now(&self) -> EpochSeconds {
        self.0
    }
}
