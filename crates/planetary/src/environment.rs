//! Environment classification of an accreted body
//!
//! [`classify`] is a pure function of the body and its star: no random
//! draws, no shared state, identical inputs give identical output.

use accrete::Protoplanet;
use serde::{Deserialize, Serialize};
use stellar::Star;
use units::{Length, Mass, Pressure, Temperature};

use crate::atmosphere::{
    AtmosphereClass, boiling_point, greenhouse_effect, surface_pressure, volatile_inventory,
};
use crate::constants::{albedo, molecule};
use crate::planet_type::{PlanetType, SurfaceTraits};
use crate::structure::{
    acceleration, empirical_density, escape_velocity, exospheric_temperature, gravity,
    kothari_radius, molecule_limit, orbital_zone, rms_velocity, volume_density, volume_radius,
};
use crate::temperature::{SurfaceInputs, estimated_temperature, relax_surface};

/// Gas share of total mass above which a body counts as having accreted gas
const ACCRETED_GAS_FRACTION: f64 = 1.0e-6;

/// A body to classify
///
/// `orbital_radius` is the distance from the star. Moons pass their parent
/// planet's orbit since that sets their insolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyInputs {
    pub mass: Mass,
    pub dust_mass: Mass,
    pub gas_mass: Mass,
    pub orbital_radius: Length,
    pub is_gas_giant: bool,
    pub is_moon: bool,
}

impl BodyInputs {
    pub fn gas_fraction(&self) -> f64 {
        if self.mass.is_positive() {
            self.gas_mass / self.mass
        } else {
            0.0
        }
    }
}

impl From<&Protoplanet> for BodyInputs {
    fn from(body: &Protoplanet) -> Self {
        Self {
            mass: Mass::from_solar_masses(body.mass),
            dust_mass: Mass::from_solar_masses(body.dust_mass),
            gas_mass: Mass::from_solar_masses(body.gas_mass),
            orbital_radius: Length::from_au(body.orbital_radius),
            is_gas_giant: body.is_gas_giant,
            is_moon: false,
        }
    }
}

/// Derived physical and environmental properties of a body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    /// 1 (rocky) to 3 (icy), by distance relative to √L
    pub orbital_zone: u8,
    pub is_gas_giant: bool,
    pub radius: Length,
    /// g/cm³
    pub density: f64,
    /// cm/s
    pub escape_velocity: f64,
    /// cm/s²
    pub surface_acceleration: f64,
    /// Earth gravities
    pub surface_gravity: f64,
    pub exospheric_temperature: Temperature,
    /// RMS velocity of N₂ at the exosphere, cm/s
    pub rms_velocity: f64,
    /// Smallest molecular weight retained
    pub molecule_limit: f64,
    /// Dimensionless, Earth ≈ 1000; zero for gas giants
    pub volatile_inventory: f64,
    /// None for bodies without a solid surface
    pub surface_pressure: Option<Pressure>,
    /// None without a surface or an atmosphere
    pub boiling_point: Option<Temperature>,
    pub greenhouse_effect: bool,
    /// Gas giants report their estimated cloud-top temperature
    pub surface_temperature: Temperature,
    /// K
    pub greenhouse_rise: f64,
    pub albedo: f64,
    pub hydrosphere: f64,
    pub cloud_cover: f64,
    pub ice_cover: f64,
    pub atmosphere: AtmosphereClass,
    pub planet_type: PlanetType,
    pub habitable: bool,
}

/// Classify a body orbiting `star`
///
/// # Examples
/// ```
/// use planetary::{BodyInputs, classify};
/// use stellar::StarConfig;
/// use units::{Length, Mass};
///
/// let star = StarConfig::solar().resolve();
/// let earth = BodyInputs {
///     mass: Mass::from_earth_masses(1.0),
///     dust_mass: Mass::from_earth_masses(1.0),
///     gas_mass: Mass::zero(),
///     orbital_radius: Length::from_au(1.0),
///     is_gas_giant: false,
///     is_moon: false,
/// };
///
/// let env = classify(&earth, &star);
/// assert_eq!(env, classify(&earth, &star));
/// assert!(env.radius.to_km() > 5000.0 && env.radius.to_km() < 8000.0);
/// ```
pub fn classify(body: &BodyInputs, star: &Star) -> Environment {
    let mass = body.mass.to_solar_masses();
    let a = body.orbital_radius.to_au();
    let ecosphere = star.ecosphere_radius.to_au();
    let zone = orbital_zone(star.luminosity, a);

    let (radius, density) = if body.is_gas_giant {
        let density = empirical_density(mass, a, ecosphere, true);
        (volume_radius(mass, density), density)
    } else {
        let radius = kothari_radius(mass, false, zone);
        (radius, volume_density(mass, radius))
    };

    let escape = escape_velocity(mass, radius);
    let surface_acceleration = acceleration(mass, radius);
    let surface_gravity = gravity(surface_acceleration);
    let exosphere = exospheric_temperature(a, ecosphere);
    let rms = rms_velocity(molecule::MOL_NITROGEN, exosphere);
    let retained = molecule_limit(escape, exosphere);

    let structure = Structure {
        zone,
        radius,
        density,
        escape,
        surface_acceleration,
        surface_gravity,
        exosphere,
        rms,
        retained,
    };

    if body.is_gas_giant {
        gas_giant(body, ecosphere, a, structure)
    } else {
        solid_body(body, star, ecosphere, a, structure)
    }
}

/// Bulk properties shared by both branches
struct Structure {
    zone: u8,
    radius: f64,
    density: f64,
    escape: f64,
    surface_acceleration: f64,
    surface_gravity: f64,
    exosphere: f64,
    rms: f64,
    retained: f64,
}

fn gas_giant(body: &BodyInputs, ecosphere: f64, a: f64, s: Structure) -> Environment {
    Environment {
        orbital_zone: s.zone,
        is_gas_giant: true,
        radius: Length::from_km(s.radius),
        density: s.density,
        escape_velocity: s.escape,
        surface_acceleration: s.surface_acceleration,
        surface_gravity: s.surface_gravity,
        exospheric_temperature: Temperature::from_kelvin(s.exosphere),
        rms_velocity: s.rms,
        molecule_limit: s.retained,
        volatile_inventory: 0.0,
        surface_pressure: None,
        boiling_point: None,
        greenhouse_effect: false,
        surface_temperature: Temperature::from_kelvin(estimated_temperature(
            ecosphere,
            a,
            albedo::GAS_GIANT,
        )),
        greenhouse_rise: 0.0,
        albedo: albedo::GAS_GIANT,
        hydrosphere: 0.0,
        cloud_cover: 0.0,
        ice_cover: 0.0,
        atmosphere: AtmosphereClass::GasGiant,
        planet_type: PlanetType::gas_giant(body.gas_fraction(), body.mass.to_earth_masses()),
        habitable: false,
    }
}

fn solid_body(
    body: &BodyInputs,
    star: &Star,
    ecosphere: f64,
    a: f64,
    s: Structure,
) -> Environment {
    let mass = body.mass.to_solar_masses();
    let greenhouse = greenhouse_effect(ecosphere, a);
    let inventory = volatile_inventory(
        mass,
        s.escape,
        s.rms,
        star.mass.to_solar_masses(),
        s.zone,
        greenhouse,
        body.gas_fraction() > ACCRETED_GAS_FRACTION,
    );
    let pressure = surface_pressure(inventory, s.radius, s.surface_gravity);
    let boiling = if pressure > 0.0 {
        boiling_point(pressure)
    } else {
        0.0
    };

    let surface = relax_surface(&SurfaceInputs {
        ecosphere_radius: ecosphere,
        orbital_radius: a,
        radius: s.radius,
        molecule_limit: s.retained,
        surface_pressure: pressure,
        volatile_inventory: inventory,
        greenhouse_effect: greenhouse,
        boiling_point: boiling,
    });

    let planet_type = PlanetType::solid(&SurfaceTraits {
        earth_masses: body.mass.to_earth_masses(),
        gas_fraction: body.gas_fraction(),
        surface_pressure: pressure,
        molecule_limit: s.retained,
        hydrosphere: surface.hydrosphere,
        ice_cover: surface.ice_cover,
        surface_temperature: surface.temperature,
        boiling_point: boiling,
        is_moon: body.is_moon,
    });

    let atmosphere = AtmosphereClass::from_surface(
        pressure,
        surface.temperature,
        boiling,
        greenhouse,
        s.retained,
    );
    let habitable = atmosphere.is_breathable_candidate() && surface.hydrosphere > 0.05;

    Environment {
        orbital_zone: s.zone,
        is_gas_giant: false,
        radius: Length::from_km(s.radius),
        density: s.density,
        escape_velocity: s.escape,
        surface_acceleration: s.surface_acceleration,
        surface_gravity: s.surface_gravity,
        exospheric_temperature: Temperature::from_kelvin(s.exosphere),
        rms_velocity: s.rms,
        molecule_limit: s.retained,
        volatile_inventory: inventory,
        surface_pressure: Some(Pressure::from_millibars(pressure)),
        boiling_point: (pressure > 0.0).then(|| Temperature::from_kelvin(boiling)),
        greenhouse_effect: greenhouse,
        surface_temperature: Temperature::from_kelvin(surface.temperature),
        greenhouse_rise: surface.greenhouse_rise,
        albedo: surface.albedo,
        hydrosphere: surface.hydrosphere,
        cloud_cover: surface.cloud_cover,
        ice_cover: surface.ice_cover,
        atmosphere,
        planet_type,
        habitable,
    }
}
