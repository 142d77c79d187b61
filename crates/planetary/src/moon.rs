//! Natural satellites
//!
//! Moons are classified like planets, but with the parent planet's distance
//! from the star setting their insolation.

use std::fmt;

use serde::{Deserialize, Serialize};
use stellar::Star;
use units::{Length, Mass};

use crate::environment::{BodyInputs, Environment, classify};

/// How a moon came to orbit its planet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoonOrigin {
    /// Grew in the circumplanetary disk
    Accreted,
    /// A protoplanet taken whole during planetary accretion
    Captured,
}

impl fmt::Display for MoonOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accreted => write!(f, "Accreted"),
            Self::Captured => write!(f, "Captured"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moon {
    pub mass: Mass,
    pub dust_mass: Mass,
    pub gas_mass: Mass,
    /// Semi-major axis around the parent planet
    pub orbital_radius: Length,
    pub eccentricity: f64,
    pub origin: MoonOrigin,
    pub environment: Environment,
}

impl Moon {
    /// Classify a moon
    ///
    /// `body.orbital_radius` must be the parent planet's distance from the
    /// star; `orbital_radius` is the moon's own orbit around the planet.
    pub fn new(
        body: BodyInputs,
        orbital_radius: Length,
        eccentricity: f64,
        origin: MoonOrigin,
        star: &Star,
    ) -> Self {
        let inputs = BodyInputs {
            is_moon: true,
            ..body
        };
        Self {
            mass: inputs.mass,
            dust_mass: inputs.dust_mass,
            gas_mass: inputs.gas_mass,
            orbital_radius,
            eccentricity,
            origin,
            environment: classify(&inputs, star),
        }
    }
}
