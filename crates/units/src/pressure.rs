use serde::{Deserialize, Serialize};

/// Mean surface pressure of the Earth in millibars
pub const EARTH_SURFACE_PRESSURE_MB: f64 = 1013.25;

/// Millibars per bar
const MILLIBARS_PER_BAR: f64 = 1000.0;

/// Surface pressure in millibars.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pressure(f64); // Base unit: millibars

impl Pressure {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_millibars(value: f64) -> Self {
        Self(value)
    }

    pub fn from_bars(value: f64) -> Self {
        Self(value * MILLIBARS_PER_BAR)
    }

    /// Creates a pressure from a multiple of Earth's surface pressure
    pub fn from_atmospheres(value: f64) -> Self {
        Self(value * EARTH_SURFACE_PRESSURE_MB)
    }

    pub fn to_millibars(&self) -> f64 {
        self.0
    }

    pub fn to_bars(&self) -> f64 {
        self.0 / MILLIBARS_PER_BAR
    }

    pub fn to_atmospheres(&self) -> f64 {
        self.0 / EARTH_SURFACE_PRESSURE_MB
    }
}
