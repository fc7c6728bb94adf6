//! Wall-clock instants as fractional seconds
//!
//! The generators evaluate sine waves directly on the Unix timestamp, so the
//! engine works with `f64` seconds rather than `chrono` types internally.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Seconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpochSeconds(pub f64);

impl EpochSeconds {
    /// Current wall-clock time
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_micros() as f64 / 1_000_000.0)
    }

    /// Closest UTC datetime, or `None` if out of chrono's range
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        let micros = (self.0 * 1_000_000.0).round() as i64;
        Utc.timestamp_micros(micros).single()
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0
    }

    /// Seconds elapsed since `earlier`, floored at zero
    pub fn elapsed_since(self, earlier: EpochSeconds) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }
}

impl Add<f64> for EpochSeconds {
    type Output = EpochSeconds;

    fn add(self, secs: f64) -> EpochSeconds {
        EpochSeconds(self.0 + secs)
    }
}

impl Sub for EpochSeconds {
    type Output = f64;

    fn sub(self, rhs: EpochSeconds) -> f64 {
        self.0 - rhs.0
    }
}
