use serde::{Deserialize, Serialize};

/// Mass of the Sun in grams
pub const SOLAR_MASS_G: f64 = 1.989e33;

/// Mass of the Earth in grams
pub const EARTH_MASS_G: f64 = 5.977e27;

/// Earth masses per solar mass (M☉/M⊕)
pub const EARTH_MASSES_PER_SOLAR_MASS: f64 = SOLAR_MASS_G / EARTH_MASS_G;

/// A mass quantity with solar masses as the base unit.
///
/// Accretion runs entirely in solar masses, so planets and moons keep the
/// engine's value untouched and only convert when read in other units.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let earth = Mass::from_earth_masses(1.0);
/// assert!((earth.to_solar_masses() - 3.005e-6).abs() < 1e-8);
///
/// let sun = Mass::from_solar_masses(1.0);
/// assert!((sun.to_grams() - 1.989e33).abs() < 1e27);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    /// A zero mass
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in Earth masses.
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value / EARTH_MASSES_PER_SOLAR_MASS)
    }

    /// Creates a new `Mass` from a value in grams.
    pub fn from_grams(value: f64) -> Self {
        Self(value / SOLAR_MASS_G)
    }

    /// Returns the mass in solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    /// Returns the mass in Earth masses.
    pub fn to_earth_masses(&self) -> f64 {
        self.0 * EARTH_MASSES_PER_SOLAR_MASS
    }

    /// Returns the mass in grams (CGS base unit).
    pub fn to_grams(&self) -> f64 {
        self.0 * SOLAR_MASS_G
    }

    /// Whether the mass is strictly positive and finite
    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

scalar_ops!(Mass);
