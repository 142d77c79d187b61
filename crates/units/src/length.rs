use serde::{Deserialize, Serialize};

pub const AU_TO_KM: f64 = 1.495_978_707e8;

/// Equatorial radius of the Earth in km
pub const EARTH_RADIUS_KM: f64 = 6378.0;

/// A length quantity with astronomical units (AU) as the base unit.
///
/// Orbital radii come out of the accretion engine in AU; planetary radii are
/// computed in km and stored through [`Length::from_km`].
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_au(1.0);
/// assert!((orbit.to_km() - 1.496e8).abs() < 1e5);
///
/// let radius = Length::from_km(6378.0);
/// assert!((radius.to_earth_radii() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value / AU_TO_KM)
    }

    /// Creates a new `Length` from a value in Earth radii.
    pub fn from_earth_radii(value: f64) -> Self {
        Self::from_km(value * EARTH_RADIUS_KM)
    }

    pub fn to_au(&self) -> f64 {
        self.0
    }

    pub fn to_km(&self) -> f64 {
        self.0 * AU_TO_KM
    }

    pub fn to_earth_radii(&self) -> f64 {
        self.to_km() / EARTH_RADIUS_KM
    }
}

scalar_ops!(Length);
