//! Final planets of a generated system

use accrete::Protoplanet;
use serde::{Deserialize, Serialize};
use stellar::Star;
use units::{Length, Mass};

use crate::environment::{BodyInputs, Environment, classify};
use crate::moon::Moon;
use crate::planet_type::PlanetType;

/// A classified planet and its moons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    /// Semi-major axis
    pub orbital_radius: Length,
    pub eccentricity: f64,
    pub mass: Mass,
    pub dust_mass: Mass,
    pub gas_mass: Mass,
    pub environment: Environment,
    /// Ordered by orbit around the planet
    pub moons: Vec<Moon>,
}

impl Planet {
    /// Classify an accreted body as a planet of `star`, without moons
    pub fn from_protoplanet(body: &Protoplanet, star: &Star) -> Self {
        let inputs = BodyInputs::from(body);
        Self {
            orbital_radius: inputs.orbital_radius,
            eccentricity: body.eccentricity,
            mass: inputs.mass,
            dust_mass: inputs.dust_mass,
            gas_mass: inputs.gas_mass,
            environment: classify(&inputs, star),
            moons: Vec::new(),
        }
    }

    /// Attach moons, sorted by orbit
    pub fn with_moons(mut self, mut moons: Vec<Moon>) -> Self {
        moons.sort_by(|a, b| a.orbital_radius.to_au().total_cmp(&b.orbital_radius.to_au()));
        self.moons = moons;
        self
    }

    pub fn moons(&self) -> &[Moon] {
        &self.moons
    }

    pub fn is_gas_giant(&self) -> bool {
        self.environment.is_gas_giant
    }

    pub fn planet_type(&self) -> PlanetType {
        self.environment.planet_type
    }

    pub fn radius(&self) -> Length {
        self.environment.radius
    }

    pub fn perihelion(&self) -> Length {
        self.orbital_radius * (1.0 - self.eccentricity)
    }

    pub fn aphelion(&self) -> Length {
        self.orbital_radius * (1.0 + self.eccentricity)
    }

    /// The planet's inputs to [`classify`], reused when classifying its moons
    pub fn body_inputs(&self) -> BodyInputs {
        BodyInputs {
            mass: self.mass,
            dust_mass: self.dust_mass,
            gas_mass: self.gas_mass,
            orbital_radius: self.orbital_radius,
            is_gas_giant: self.environment.is_gas_giant,
            is_moon: false,
        }
    }
}
