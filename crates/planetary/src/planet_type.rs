//! Observable planet types
//!
//! Gas giants split by envelope fraction and mass. Solid bodies are typed by
//! their settled surface: pressure first, then water and ice cover, then
//! temperature against the boiling and freezing points.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{ASTEROID_MASS_LIMIT, FREEZING_POINT_OF_WATER, molecule};

/// Envelope fraction below which a giant is only a gas dwarf
const GAS_DWARF_FRACTION: f64 = 0.2;

/// Giants under this many Earth masses are sub-giants
const SUB_GIANT_EARTH_MASSES: f64 = 20.0;

/// Solid bodies with less than a millibar of air have no atmosphere to speak of
const AIRLESS_PRESSURE: f64 = 1.0;

/// Hydrogen-retaining bodies above this pressure (millibars) are gas dwarfs
const GAS_DWARF_PRESSURE: f64 = 6000.0;

/// Thin-atmosphere ceiling of a Mars-like world (millibars)
const MARTIAN_PRESSURE: f64 = 250.0;

/// Share of surface cover that makes a water or ice world
const GLOBAL_COVER: f64 = 0.95;

/// Minimum water cover of an Earth-like world
const OCEAN_COVER: f64 = 0.05;

/// Gas fraction above which a cold solid world counts as icy
const VOLATILE_GAS_FRACTION: f64 = 1.0e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanetType {
    /// Airless rock (Mercury, the Moon)
    Rock,
    /// Belt of rubble too light to clear its orbit
    Asteroids,
    /// Thin cold atmosphere (Mars)
    Martian,
    /// Hot, dry, dense atmosphere (Venus)
    Venusian,
    /// Partly ocean-covered (Earth)
    Terrestrial,
    /// Global ocean
    Water,
    /// Frozen surface
    Ice,
    /// Gas dwarf, a small body with a hydrogen envelope
    SubSubGasGiant,
    /// Under 20 Earth masses (Neptune)
    SubGasGiant,
    /// Jupiter
    GasGiant,
    Unknown,
}

/// Surface state a solid body is typed from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceTraits {
    pub earth_masses: f64,
    pub gas_fraction: f64,
    /// millibars
    pub surface_pressure: f64,
    pub molecule_limit: f64,
    pub hydrosphere: f64,
    pub ice_cover: f64,
    /// K
    pub surface_temperature: f64,
    /// K
    pub boiling_point: f64,
    pub is_moon: bool,
}

impl PlanetType {
    /// Type of a body that accreted past critical mass
    pub fn gas_giant(gas_fraction: f64, earth_masses: f64) -> Self {
        if gas_fraction < GAS_DWARF_FRACTION {
            Self::SubSubGasGiant
        } else if earth_masses < SUB_GIANT_EARTH_MASSES {
            Self::SubGasGiant
        } else {
            Self::GasGiant
        }
    }

    /// Type of a solid body from its settled surface
    ///
    /// # Examples
    /// ```
    /// use planetary::planet_type::{PlanetType, SurfaceTraits};
    ///
    /// let earth = SurfaceTraits {
    ///     earth_masses: 1.0,
    ///     gas_fraction: 0.0,
    ///     surface_pressure: 1013.25,
    ///     molecule_limit: 5.0,
    ///     hydrosphere: 0.7,
    ///     ice_cover: 0.02,
    ///     surface_temperature: 288.0,
    ///     boiling_point: 373.0,
    ///     is_moon: false,
    /// };
    /// assert_eq!(PlanetType::solid(&earth), PlanetType::Terrestrial);
    /// ```
    pub fn solid(traits: &SurfaceTraits) -> Self {
        if traits.surface_pressure < AIRLESS_PRESSURE {
            return if !traits.is_moon && traits.earth_masses < ASTEROID_MASS_LIMIT {
                Self::Asteroids
            } else {
                Self::Rock
            };
        }

        if traits.surface_pressure > GAS_DWARF_PRESSURE
            && traits.molecule_limit <= molecule::MOL_HYDROGEN
        {
            return Self::SubSubGasGiant;
        }

        if traits.hydrosphere >= GLOBAL_COVER {
            Self::Water
        } else if traits.ice_cover >= GLOBAL_COVER {
            Self::Ice
        } else if traits.hydrosphere > OCEAN_COVER {
            Self::Terrestrial
        } else if traits.surface_temperature > traits.boiling_point {
            Self::Venusian
        } else if traits.gas_fraction > VOLATILE_GAS_FRACTION {
            Self::Ice
        } else if traits.surface_pressure <= MARTIAN_PRESSURE {
            Self::Martian
        } else if traits.surface_temperature < FREEZING_POINT_OF_WATER {
            Self::Ice
        } else {
            Self::Unknown
        }
    }

    pub fn is_gaseous(&self) -> bool {
        matches!(
            self,
            Self::SubSubGasGiant | Self::SubGasGiant | Self::GasGiant
        )
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rock => "Rock",
            Self::Asteroids => "Asteroids",
            Self::Martian => "Martian",
            Self::Venusian => "Venusian",
            Self::Terrestrial => "Terrestrial",
            Self::Water => "Water",
            Self::Ice => "Ice",
            Self::SubSubGasGiant => "Gas dwarf",
            Self::SubGasGiant => "Sub gas giant",
            Self::GasGiant => "Gas giant",
            Self::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}
