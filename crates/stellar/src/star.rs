//! Star configuration and the resolved host star

use serde::{Deserialize, Serialize};
use units::{Length, Mass};

use crate::error::StarError;
use crate::luminosity::{luminosity_from_mass, mass_from_luminosity};

/// Outer edge of the dust disk per cube-root solar mass (AU)
const DUST_LIMIT_AU: f64 = 200.0;

/// Outermost orbit a nucleus may be injected at, per cube-root solar mass (AU)
const FARTHEST_PLANET_AU: f64 = 50.0;

/// Main-sequence lifetime of the Sun in years
const SOLAR_LIFETIME_YEARS: f64 = 1.0e10;

/// Stellar inputs for a generation run
///
/// At least one of mass and luminosity must be supplied; each supplied value
/// must be positive and finite. Supplied values pass through to the resolved
/// [`Star`] unchanged.
///
/// # Examples
/// ```
/// use stellar::StarConfig;
///
/// let config = StarConfig::with_mass_and_luminosity(0.43, 0.31).unwrap();
/// let star = config.resolve();
/// assert_eq!(star.mass.to_solar_masses(), 0.43);
/// assert_eq!(star.luminosity, 0.31);
///
/// assert!(StarConfig::new(None, None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarConfig {
    mass: Option<f64>,
    luminosity: Option<f64>,
}

impl StarConfig {
    /// Create a validated configuration from optional mass (M☉) and luminosity (L☉)
    pub fn new(mass: Option<f64>, luminosity: Option<f64>) -> Result<Self, StarError> {
        let config = Self { mass, luminosity };
        config.validate()?;
        Ok(config)
    }

    /// Mass only; luminosity follows from the mass-luminosity relation
    pub fn with_mass(mass: f64) -> Result<Self, StarError> {
        Self::new(Some(mass), None)
    }

    /// Luminosity only; mass follows from inverting the mass-luminosity relation
    pub fn with_luminosity(luminosity: f64) -> Result<Self, StarError> {
        Self::new(None, Some(luminosity))
    }

    pub fn with_mass_and_luminosity(mass: f64, luminosity: f64) -> Result<Self, StarError> {
        Self::new(Some(mass), Some(luminosity))
    }

    /// The Sun: 1 M☉, 1 L☉
    pub fn solar() -> Self {
        Self {
            mass: Some(1.0),
            luminosity: Some(1.0),
        }
    }

    pub fn mass(&self) -> Option<f64> {
        self.mass
    }

    pub fn luminosity(&self) -> Option<f64> {
        self.luminosity
    }

    /// Check the invariants `new` enforces
    ///
    /// Deserialized configurations bypass the constructors, so consumers
    /// validate again before use.
    pub fn validate(&self) -> Result<(), StarError> {
        if self.mass.is_none() && self.luminosity.is_none() {
            return Err(StarError::MissingParameters);
        }
        check_positive("mass", self.mass)?;
        check_positive("luminosity", self.luminosity)?;
        Ok(())
    }

    /// Resolve the configuration into a star, deriving whichever value is missing
    ///
    /// Only meaningful on a validated configuration; the constructors guarantee
    /// this, deserialized values should go through [`StarConfig::validate`] first.
    pub fn resolve(&self) -> Star {
        let (mass, luminosity) = match (self.mass, self.luminosity) {
            (Some(mass), Some(luminosity)) => (mass, luminosity),
            (Some(mass), None) => (mass, luminosity_from_mass(mass)),
            (None, Some(luminosity)) => (mass_from_luminosity(luminosity), luminosity),
            (None, None) => (1.0, 1.0),
        };
        Star::new(mass, luminosity)
    }
}

impl Default for StarConfig {
    fn default() -> Self {
        Self::solar()
    }
}

fn check_positive(parameter: &'static str, value: Option<f64>) -> Result<(), StarError> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => Err(StarError::NonPositive {
            parameter,
            value: v,
        }),
        _ => Ok(()),
    }
}

/// The resolved host star of a generated system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    /// Stellar mass
    pub mass: Mass,
    /// Luminosity in solar luminosities (L☉)
    pub luminosity: f64,
    /// Orbital distance receiving Earth's insolation, √L AU
    pub ecosphere_radius: Length,
    /// Main-sequence lifetime in years
    pub lifetime_years: f64,
}

impl Star {
    pub fn new(mass_solar: f64, luminosity: f64) -> Self {
        Self {
            mass: Mass::from_solar_masses(mass_solar),
            luminosity,
            ecosphere_radius: Length::from_au(luminosity.sqrt()),
            lifetime_years: SOLAR_LIFETIME_YEARS * mass_solar / luminosity,
        }
    }

    /// Cube root of the mass in M☉; disk dimensions scale with it
    fn mass_scale(&self) -> f64 {
        self.mass.to_solar_masses().cbrt()
    }

    /// Outer edge of the protoplanetary dust disk
    pub fn dust_outer_limit(&self) -> Length {
        Length::from_au(DUST_LIMIT_AU * self.mass_scale())
    }

    /// Innermost orbit a nucleus may be injected at
    ///
    /// `inner_planet_factor` is 0.3 AU for a solar-mass star.
    pub fn planet_inner_limit(&self, inner_planet_factor: f64) -> Length {
        Length::from_au(inner_planet_factor * self.mass_scale())
    }

    /// Outermost orbit a nucleus may be injected at
    pub fn planet_outer_limit(&self) -> Length {
        Length::from_au(FARTHEST_PLANET_AU * self.mass_scale())
    }
}
