//! Bulk structure: size, density, gravity and gas retention
//!
//! Terrestrial radii come from Kothari's mass-radius relation for cold
//! bodies, with composition set by the orbital zone. Gas giant densities
//! are empirical. All masses in M☉, radii in km, velocities in cm/s.

use std::f64::consts::PI;

use units::{EARTH_MASSES_PER_SOLAR_MASS, SOLAR_MASS_G};

use crate::constants::{
    CM_PER_KM, CM_PER_METER, EARTH_ACCELERATION, EARTH_EXOSPHERE_TEMP, GAS_RETENTION_THRESHOLD,
    GRAV_CONSTANT, MOLAR_GAS_CONST,
};

// Kothari's constants, cgs
const A1_20: f64 = 6.485e12;
const A2_20: f64 = 4.0032e-8;
const BETA_20: f64 = 5.71e12;
const JIMS_FUDGE: f64 = 1.004;

/// Compositional zone of an orbit: 1 inside 4√L AU, 2 inside 15√L AU, 3 beyond
///
/// # Examples
/// ```
/// use planetary::structure::orbital_zone;
///
/// assert_eq!(orbital_zone(1.0, 1.0), 1);
/// assert_eq!(orbital_zone(1.0, 5.2), 2);
/// assert_eq!(orbital_zone(1.0, 30.0), 3);
/// ```
pub fn orbital_zone(luminosity: f64, orbital_radius: f64) -> u8 {
    let scale = luminosity.sqrt();
    if orbital_radius < 4.0 * scale {
        1
    } else if orbital_radius < 15.0 * scale {
        2
    } else {
        3
    }
}

/// Equatorial radius in km of a cold body of `mass` M☉
///
/// Mean atomic weight and number depend on the zone: rock and metal close
/// in, ices further out, hydrogen-helium for giants.
pub fn kothari_radius(mass: f64, gas_giant: bool, zone: u8) -> f64 {
    let (atomic_weight, atomic_num): (f64, f64) = match (zone, gas_giant) {
        (1, true) => (9.5, 4.5),
        (1, false) => (15.0, 8.0),
        (2, true) => (2.47, 2.0),
        (2, false) => (10.0, 5.0),
        (_, true) => (7.0, 4.0),
        (_, false) => (10.0, 5.0),
    };

    let solar_mass_cbrt = SOLAR_MASS_G.cbrt();
    let numerator =
        2.0 * BETA_20 * solar_mass_cbrt / (A1_20 * (atomic_weight * atomic_num).cbrt());
    let pressure_term = A2_20 * atomic_weight.powf(4.0 / 3.0) * solar_mass_cbrt.powi(2)
        * mass.powf(2.0 / 3.0)
        / (A1_20 * atomic_num.powi(2));

    numerator / (1.0 + pressure_term) * mass.cbrt() / CM_PER_KM / JIMS_FUDGE
}

/// Empirical density in g/cm³ from mass and insolation
pub fn empirical_density(mass: f64, orbital_radius: f64, ecosphere_radius: f64, gas_giant: bool) -> f64 {
    let density = (mass * EARTH_MASSES_PER_SOLAR_MASS).powf(1.0 / 8.0)
        * (ecosphere_radius / orbital_radius).powf(0.25);
    if gas_giant { density * 1.2 } else { density * 5.5 }
}

/// Radius in km of a sphere of `mass` M☉ at `density` g/cm³
pub fn volume_radius(mass: f64, density: f64) -> f64 {
    let volume = mass * SOLAR_MASS_G / density;
    (3.0 * volume / (4.0 * PI)).cbrt() / CM_PER_KM
}

/// Density in g/cm³ of a sphere of `mass` M☉ and radius `radius` km
pub fn volume_density(mass: f64, radius: f64) -> f64 {
    let radius_cm = radius * CM_PER_KM;
    mass * SOLAR_MASS_G / (4.0 / 3.0 * PI * radius_cm.powi(3))
}

/// Escape velocity in cm/s
pub fn escape_velocity(mass: f64, radius: f64) -> f64 {
    (2.0 * GRAV_CONSTANT * mass * SOLAR_MASS_G / (radius * CM_PER_KM)).sqrt()
}

/// Surface acceleration in cm/s²
pub fn acceleration(mass: f64, radius: f64) -> f64 {
    GRAV_CONSTANT * mass * SOLAR_MASS_G / (radius * CM_PER_KM).powi(2)
}

/// Surface gravity in Earth gravities
pub fn gravity(acceleration: f64) -> f64 {
    acceleration / EARTH_ACCELERATION
}

/// Exospheric temperature in K, scaled from Earth's by insolation
pub fn exospheric_temperature(orbital_radius: f64, ecosphere_radius: f64) -> f64 {
    EARTH_EXOSPHERE_TEMP / (orbital_radius / ecosphere_radius).powi(2)
}

/// RMS velocity in cm/s of a gas of `molecular_weight` at `temperature` K
pub fn rms_velocity(molecular_weight: f64, temperature: f64) -> f64 {
    (3.0 * MOLAR_GAS_CONST * temperature / molecular_weight).sqrt() * CM_PER_METER
}

/// Smallest molecular weight a body holds on to over geological time
pub fn molecule_limit(escape_velocity: f64, exospheric_temperature: f64) -> f64 {
    let retained = escape_velocity / GAS_RETENTION_THRESHOLD / CM_PER_METER;
    3.0 * MOLAR_GAS_CONST * exospheric_temperature / retained.powi(2)
}
