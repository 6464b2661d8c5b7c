//! Pressure detection settings.
//!
//! The radius is fixed when the match context is built. It is not read from
//! the command line or the environment.

use serde::{Deserialize, Serialize};

/// Divide a length in meters by this to get yards (the tracking unit).
pub const METERS_TO_YARDS_DIVISOR: f64 = 1.0936133;

/// Default pressure radius (meters)
pub const DEFAULT_PRESSURE_RADIUS_M: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressureConfig {
    /// Pressure radius in meters
    pub radius_m: f64,
    /// Meters -> tracking unit divisor
    pub unit_divisor: f64,
}

impl Default for PressureConfig {
    fn default() -> Self {
        Self {
            radius_m: DEFAULT_PRESSURE_RADIUS_M,
            unit_divisor: METERS_TO_YARDS_DIVISOR,
        }
    }
}

impl PressureConfig {
    /// Radius in tracking coordinate units.
    pub fn radius(&self) -> f64 {
        self.radius_m / self.unit_divisor
    }
}
