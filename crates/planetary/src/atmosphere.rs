//! Volatile inventory, surface pressure and atmosphere classification
//!
//! A body keeps volatiles only if its escape velocity comfortably exceeds
//! the thermal velocity of nitrogen at its exosphere. The inventory then
//! scales with mass and with the volatile richness of the orbital zone.

use std::fmt;

use serde::{Deserialize, Serialize};
use units::{EARTH_MASSES_PER_SOLAR_MASS, EARTH_RADIUS_KM, EARTH_SURFACE_PRESSURE_MB};

use crate::constants::{
    EARTH_CONVECTION_FACTOR, FREEZING_POINT_OF_WATER, GAS_RETENTION_THRESHOLD, MILLIBARS_PER_BAR,
    albedo, molecule,
};
use crate::temperature::effective_temperature;

/// Surface pressure range of a breathable candidate (millibars)
const MIN_BREATHABLE_PRESSURE: f64 = 0.25 * EARTH_SURFACE_PRESSURE_MB;
const MAX_BREATHABLE_PRESSURE: f64 = 4.0 * EARTH_SURFACE_PRESSURE_MB;

/// Warmest surface a breathable candidate may have (K)
const MAX_BREATHABLE_TEMP: f64 = FREEZING_POINT_OF_WATER + 50.0;

/// Below this pressure (millibars) a body counts as airless
const AIRLESS_PRESSURE: f64 = 1.0;

/// Broad atmospheric regime of a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AtmosphereClass {
    /// Deep hydrogen-helium envelope, no surface
    GasGiant,

    /// Too little gas retained to matter
    Airless,

    /// Oceans boiled into a greenhouse atmosphere (Venus-like)
    RunawayGreenhouse,

    /// Earth-like pressure and temperature, nitrogen retained
    BreathableCandidate,

    /// Any other atmosphere
    Unbreathable,
}

impl AtmosphereClass {
    /// Classify a solid body's atmosphere from its surface state
    pub fn from_surface(
        surface_pressure: f64,
        surface_temperature: f64,
        boiling_point: f64,
        greenhouse_effect: bool,
        molecule_limit: f64,
    ) -> Self {
        if surface_pressure < AIRLESS_PRESSURE {
            return Self::Airless;
        }
        if greenhouse_effect && surface_temperature > boiling_point {
            return Self::RunawayGreenhouse;
        }

        let breathable = (MIN_BREATHABLE_PRESSURE..=MAX_BREATHABLE_PRESSURE)
            .contains(&surface_pressure)
            && (FREEZING_POINT_OF_WATER..=MAX_BREATHABLE_TEMP).contains(&surface_temperature)
            && molecule_limit <= molecule::MOL_NITROGEN;

        if breathable {
            Self::BreathableCandidate
        } else {
            Self::Unbreathable
        }
    }

    pub fn is_breathable_candidate(&self) -> bool {
        matches!(self, Self::BreathableCandidate)
    }
}

impl fmt::Display for AtmosphereClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GasGiant => write!(f, "Gas giant envelope"),
            Self::Airless => write!(f, "Airless"),
            Self::RunawayGreenhouse => write!(f, "Runaway greenhouse"),
            Self::BreathableCandidate => write!(f, "Breathable candidate"),
            Self::Unbreathable => write!(f, "Unbreathable"),
        }
    }
}

/// Whether insolation alone would push the surface past freezing
///
/// Bodies this warm trap enough water vapour to run away, so they keep their
/// full volatile inventory as atmosphere.
pub fn greenhouse_effect(ecosphere_radius: f64, orbital_radius: f64) -> bool {
    effective_temperature(ecosphere_radius, orbital_radius, albedo::GREENHOUSE_TRIGGER)
        > FREEZING_POINT_OF_WATER
}

/// Volatile gas inventory, dimensionless (Earth ≈ 1000)
///
/// Zero unless escape velocity exceeds the RMS velocity by the retention
/// threshold. Zone 1 is volatile-rich relative to zone 3. Only bodies in a
/// greenhouse state, or that accreted gas, keep the full inventory airborne.
pub fn volatile_inventory(
    mass: f64,
    escape_velocity: f64,
    rms_velocity: f64,
    stellar_mass: f64,
    zone: u8,
    greenhouse_effect: bool,
    accreted_gas: bool,
) -> f64 {
    if escape_velocity / rms_velocity < GAS_RETENTION_THRESHOLD {
        return 0.0;
    }

    let proportion = match zone {
        1 => 140_000.0,
        2 => 75_000.0,
        _ => 250.0,
    };
    let inventory = proportion * mass * EARTH_MASSES_PER_SOLAR_MASS / stellar_mass;

    if greenhouse_effect || accreted_gas {
        inventory
    } else {
        inventory / 140.0
    }
}

/// Surface pressure in millibars
pub fn surface_pressure(volatile_inventory: f64, radius: f64, gravity: f64) -> f64 {
    let radius_ratio = EARTH_RADIUS_KM / radius;
    volatile_inventory * gravity * (EARTH_SURFACE_PRESSURE_MB / MILLIBARS_PER_BAR)
        / radius_ratio.powi(2)
}

/// Boiling point of water in K at `surface_pressure` millibars
pub fn boiling_point(surface_pressure: f64) -> f64 {
    let bars = surface_pressure / MILLIBARS_PER_BAR;
    1.0 / (bars.ln() / -5050.5 + 1.0 / 373.0)
}

/// Optical depth of an atmosphere whose lightest retained gas has `molecular_weight`
///
/// Light atmospheres are more opaque; thick ones multiply the effect.
pub fn opacity(molecular_weight: f64, surface_pressure: f64) -> f64 {
    let base = match molecular_weight {
        w if (0.0..10.0).contains(&w) => 3.0,
        w if (10.0..20.0).contains(&w) => 2.34,
        w if (20.0..30.0).contains(&w) => 1.0,
        w if (30.0..45.0).contains(&w) => 0.15,
        w if (45.0..100.0).contains(&w) => 0.05,
        _ => 0.0,
    };

    let atmospheres = surface_pressure / EARTH_SURFACE_PRESSURE_MB;
    let multiplier = match atmospheres {
        p if p >= 70.0 => 8.333,
        p if p >= 50.0 => 6.666,
        p if p >= 30.0 => 3.333,
        p if p >= 10.0 => 2.0,
        p if p >= 5.0 => 1.5,
        _ => 1.0,
    };

    base * multiplier
}

/// Temperature rise in K from the greenhouse effect
pub fn greenhouse_rise(optical_depth: f64, effective_temperature: f64, surface_pressure: f64) -> f64 {
    let convection =
        EARTH_CONVECTION_FACTOR * (surface_pressure / EARTH_SURFACE_PRESSURE_MB).powf(0.4);
    let rise = ((1.0 + 0.75 * optical_depth).powf(0.25) - 1.0) * effective_temperature * convection;
    rise.max(0.0)
}
