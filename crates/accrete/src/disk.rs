//! Geometry and density law of a protoplanetary disk

use serde::{Deserialize, Serialize};
use stellar::Star;

use crate::config::AccretionConfig;
use crate::constants::{ALPHA, N};
use crate::protoplanet::critical_mass;

/// The disk a run accretes from
///
/// Masses are in units of the central body's mass and distances in AU. For
/// moon systems the same model runs on a normalized disk around the planet,
/// with gas accretion off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disk {
    pub central_mass: f64,
    pub central_luminosity: f64,
    pub ecosphere_radius: f64,
    /// Dust extent
    pub dust_inner: f64,
    pub dust_outer: f64,
    /// Range nuclei are injected in; planets must stay inside it
    pub planet_inner: f64,
    pub planet_outer: f64,
    pub dust_density_coeff: f64,
    pub gas: bool,
}

impl Disk {
    /// The disk around a main-sequence star
    pub fn around_star(star: &Star, config: &AccretionConfig) -> Self {
        let planet_outer = config
            .outer_planet_limit
            .unwrap_or_else(|| star.planet_outer_limit().to_au());

        Self {
            central_mass: star.mass.to_solar_masses(),
            central_luminosity: star.luminosity,
            ecosphere_radius: star.ecosphere_radius.to_au(),
            dust_inner: config.inner_dust_limit.unwrap_or(0.0),
            dust_outer: star.dust_outer_limit().to_au(),
            planet_inner: star.planet_inner_limit(config.inner_planet_factor).to_au(),
            planet_outer,
            dust_density_coeff: config.dust_density_coeff,
            gas: config.gas_accretion,
        }
    }

    /// Dust density at orbital radius `a`: A·√M·exp(−α a^(1/n))
    pub fn dust_density(&self, a: f64) -> f64 {
        self.dust_density_coeff * self.central_mass.sqrt() * (-ALPHA * a.powf(1.0 / N)).exp()
    }

    /// Mass past which a body at this orbit captures gas
    ///
    /// Infinite on a gas-free disk, so nothing ever becomes a gas giant there.
    pub fn critical_mass(&self, a: f64, e: f64) -> f64 {
        if self.gas {
            critical_mass(a, e, self.central_luminosity)
        } else {
            f64::INFINITY
        }
    }

    pub fn contains_orbit(&self, a: f64) -> bool {
        a >= self.planet_inner && a <= self.planet_outer
    }

    /// A disk with no injection range or no dust produces nothing
    pub fn is_degenerate(&self) -> bool {
        !(self.planet_outer > self.planet_inner)
            || !(self.dust_outer > self.dust_inner)
            || !(self.central_mass > 0.0)
            || !self.planet_inner.is_finite()
            || !self.planet_outer.is_finite()
    }
}
