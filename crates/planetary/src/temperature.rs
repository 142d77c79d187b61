//! Surface temperature and the hydrosphere, cloud and ice feedback loop
//!
//! Water cover, cloud cover and ice cover set the albedo, the albedo sets
//! the temperature, and the temperature sets the covers again. The loop is
//! relaxed by blending each new state with the previous one until the
//! temperature settles.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use units::EARTH_RADIUS_KM;

use crate::atmosphere::{greenhouse_rise, opacity};
use crate::constants::{
    CLOUD_COVERAGE_FACTOR, EARTH_AVERAGE_KELVIN, EARTH_EFFECTIVE_TEMP, EARTH_WATER_MASS_PER_AREA,
    FREEZING_POINT_OF_WATER, Q2_36, albedo, molecule,
};

/// Relaxation passes after the initial estimate
pub const MAX_ITERATIONS: usize = 25;

/// Temperature change (K) below which the surface counts as settled
pub const SETTLED_DELTA: f64 = 0.25;

/// Water freezes out of the hydrosphere this far below freezing (K)
const FREEZE_OUT_MARGIN: f64 = 3.0;

/// Ice cover saturates at this temperature and vanishes above 328 K
const ICE_MELT_TEMP: f64 = 328.0;

// ========== Radiative balance ==========

/// Effective (no-greenhouse) temperature in K
pub fn effective_temperature(ecosphere_radius: f64, orbital_radius: f64, albedo: f64) -> f64 {
    (ecosphere_radius / orbital_radius).sqrt()
        * ((1.0 - albedo) / (1.0 - albedo::EARTH)).powf(0.25)
        * EARTH_EFFECTIVE_TEMP
}

/// Mean surface temperature in K estimated from Earth's
pub fn estimated_temperature(ecosphere_radius: f64, orbital_radius: f64, albedo: f64) -> f64 {
    (ecosphere_radius / orbital_radius).sqrt()
        * ((1.0 - albedo) / (1.0 - albedo::EARTH)).powf(0.25)
        * EARTH_AVERAGE_KELVIN
}

// ========== Surface covers ==========

/// Fraction of the surface under liquid water
pub fn hydro_fraction(volatile_inventory: f64, radius: f64) -> f64 {
    let fraction = 0.71 * volatile_inventory / 1000.0 * (EARTH_RADIUS_KM / radius).powi(2);
    fraction.min(1.0)
}

/// Fraction of the surface under cloud
///
/// Zero when water vapour itself escapes. Otherwise grows exponentially with
/// temperature from the evaporating hydrosphere.
pub fn cloud_fraction(
    surface_temperature: f64,
    molecule_limit: f64,
    radius: f64,
    hydro_fraction: f64,
) -> f64 {
    if molecule_limit > molecule::WATER_VAPOR {
        return 0.0;
    }

    let surface_area = 4.0 * PI * radius.powi(2);
    let hydro_mass = hydro_fraction * surface_area * EARTH_WATER_MASS_PER_AREA;
    let vapor_kg = 1.0e-8 * hydro_mass * (Q2_36 * (surface_temperature - EARTH_AVERAGE_KELVIN)).exp();
    let fraction = CLOUD_COVERAGE_FACTOR * vapor_kg / surface_area;
    fraction.min(1.0)
}

/// Fraction of the surface under ice, capped by the available water
pub fn ice_fraction(hydro_fraction: f64, surface_temperature: f64) -> f64 {
    let temperature = surface_temperature.min(ICE_MELT_TEMP);
    let fraction = ((ICE_MELT_TEMP - temperature) / 90.0).powi(5);
    fraction.min(1.5 * hydro_fraction).min(1.0)
}

/// Bond albedo of a surface with the given covers
///
/// Cloud is shared out evenly over the surface kinds present. Airless
/// surfaces reflect differently from weathered ones.
pub fn planet_albedo(water: f64, cloud: f64, ice: f64, surface_pressure: f64) -> f64 {
    let mut rock = 1.0 - water - ice;
    let mut water = water;
    let mut ice = ice;

    let components = [water, ice, rock].iter().filter(|part| **part > 0.0).count();
    let cloud_share = if components > 0 {
        cloud / components as f64
    } else {
        0.0
    };

    for part in [&mut rock, &mut water, &mut ice] {
        *part = if *part >= cloud_share {
            *part - cloud_share
        } else {
            0.0
        };
    }

    let cloud_part = cloud * albedo::CLOUD;
    if surface_pressure <= 0.0 {
        cloud_part + rock * albedo::ROCKY_AIRLESS + ice * albedo::AIRLESS_ICE
    } else {
        cloud_part + rock * albedo::ROCKY + water * albedo::WATER + ice * albedo::ICE
    }
}

// ========== Relaxation ==========

/// What the feedback loop needs to know about a solid body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceInputs {
    /// AU
    pub ecosphere_radius: f64,
    /// AU
    pub orbital_radius: f64,
    /// km
    pub radius: f64,
    pub molecule_limit: f64,
    /// millibars
    pub surface_pressure: f64,
    pub volatile_inventory: f64,
    pub greenhouse_effect: bool,
    /// K; only meaningful with a positive surface pressure
    pub boiling_point: f64,
}

/// Settled surface state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceConditions {
    /// K
    pub temperature: f64,
    /// K
    pub greenhouse_rise: f64,
    pub albedo: f64,
    pub hydrosphere: f64,
    pub cloud_cover: f64,
    pub ice_cover: f64,
    /// The hydrosphere boiled away on the last pass
    pub boiled_off: bool,
    pub iterations: usize,
}

/// Relax the surface temperature until it changes by less than 0.25 K
///
/// Starts from an Earth-albedo estimate, then runs at most 25 blended passes.
///
/// # Examples
/// ```
/// use planetary::temperature::{SurfaceInputs, relax_surface};
///
/// // An Earth twin
/// let surface = relax_surface(&SurfaceInputs {
///     ecosphere_radius: 1.0,
///     orbital_radius: 1.0,
///     radius: 6378.0,
///     molecule_limit: 5.0,
///     surface_pressure: 1013.25,
///     volatile_inventory: 1000.0,
///     greenhouse_effect: false,
///     boiling_point: 373.0,
/// });
/// assert!(surface.temperature > 250.0 && surface.temperature < 320.0);
/// assert!(surface.iterations <= 25);
/// ```
pub fn relax_surface(inputs: &SurfaceInputs) -> SurfaceConditions {
    let optical_depth = opacity(inputs.molecule_limit, inputs.surface_pressure);
    let effective = effective_temperature(inputs.ecosphere_radius, inputs.orbital_radius, albedo::EARTH);
    let rise = greenhouse_rise(optical_depth, effective, inputs.surface_pressure);

    let seed = SurfaceConditions {
        temperature: effective + rise,
        greenhouse_rise: rise,
        albedo: albedo::EARTH,
        hydrosphere: 0.0,
        cloud_cover: 0.0,
        ice_cover: 0.0,
        boiled_off: false,
        iterations: 0,
    };

    let mut state = step(inputs, optical_depth, &seed, false);

    for _ in 0..MAX_ITERATIONS {
        let next = step(inputs, optical_depth, &state, true);
        let delta = (next.temperature - state.temperature).abs();
        state = SurfaceConditions {
            iterations: state.iterations + 1,
            ..next
        };
        if delta < SETTLED_DELTA {
            break;
        }
    }

    state
}

/// One pass of the feedback loop, blended 1:2 with `last` when `blend` is set
fn step(
    inputs: &SurfaceInputs,
    optical_depth: f64,
    last: &SurfaceConditions,
    blend: bool,
) -> SurfaceConditions {
    let mut hydrosphere = hydro_fraction(inputs.volatile_inventory, inputs.radius);
    let mut cloud_cover =
        cloud_fraction(last.temperature, inputs.molecule_limit, inputs.radius, hydrosphere);
    let ice_cover = ice_fraction(hydrosphere, last.temperature);
    let has_air = inputs.surface_pressure > 0.0;

    if inputs.greenhouse_effect && has_air {
        cloud_cover = 1.0;
    }

    let boiled_off = blend && has_air && last.temperature >= inputs.boiling_point;
    if boiled_off {
        hydrosphere = 0.0;
        cloud_cover = if inputs.molecule_limit > molecule::WATER_VAPOR {
            0.0
        } else {
            1.0
        };
    }

    if last.temperature < FREEZING_POINT_OF_WATER - FREEZE_OUT_MARGIN {
        hydrosphere = 0.0;
    }

    let albedo = planet_albedo(hydrosphere, cloud_cover, ice_cover, inputs.surface_pressure);
    let effective = effective_temperature(inputs.ecosphere_radius, inputs.orbital_radius, albedo);
    let rise = greenhouse_rise(optical_depth, effective, inputs.surface_pressure);
    let temperature = effective + rise;

    if !blend {
        return SurfaceConditions {
            temperature,
            greenhouse_rise: rise,
            albedo,
            hydrosphere,
            cloud_cover,
            ice_cover,
            boiled_off,
            iterations: last.iterations,
        };
    }

    let mix = |new: f64, old: f64| (new + 2.0 * old) / 3.0;
    SurfaceConditions {
        temperature: mix(temperature, last.temperature),
        greenhouse_rise: rise,
        albedo: mix(albedo, last.albedo),
        hydrosphere: if boiled_off {
            hydrosphere
        } else {
            mix(hydrosphere, last.hydrosphere)
        },
        cloud_cover: mix(cloud_cover, last.cloud_cover),
        ice_cover: mix(ice_cover, last.ice_cover),
        boiled_off,
        iterations: last.iterations,
    }
}
