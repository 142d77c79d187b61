use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Freezing point of water at 1 atm, in Kelvin
const WATER_FREEZING_K: f64 = 273.15;

/// Boiling point of water at 1 atm, in Kelvin
const WATER_BOILING_K: f64 = 373.15;

/// A temperature quantity with Kelvin as the base unit.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let earth = Temperature::from_celsius(14.0);
/// assert!((earth.to_kelvin() - 287.15).abs() < 1e-9);
/// assert!(earth > Temperature::water_freezing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Temperature` from a value in Celsius (K = °C + 273.15).
    pub fn from_celsius(value: f64) -> Self {
        Self(value + WATER_FREEZING_K)
    }

    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    pub fn to_celsius(&self) -> f64 {
        self.0 - WATER_FREEZING_K
    }

    /// Freezing point of water at standard pressure (273.15 K)
    pub fn water_freezing() -> Self {
        Self(WATER_FREEZING_K)
    }

    /// Boiling point of water at standard pressure (373.15 K)
    pub fn water_boiling() -> Self {
        Self(WATER_BOILING_K)
    }
}

impl Add<f64> for Temperature {
    type Output = Temperature;

    fn add(self, rhs: f64) -> Temperature {
        Temperature(self.0 + rhs)
    }
}

/// Difference between two temperatures, in Kelvin
impl Sub for Temperature {
    type Output = f64;

    fn sub(self, rhs: Temperature) -> f64 {
        self.0 - rhs.0
    }
}
