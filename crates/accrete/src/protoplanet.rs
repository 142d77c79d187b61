//! Growing bodies and their orbital footprint

use serde::{Deserialize, Serialize};

use crate::constants::B;

/// Material a body has captured whole rather than merged with
///
/// Kept alongside the captor so the moon pass can place it later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedBody {
    pub mass: f64,
    pub dust_mass: f64,
    pub gas_mass: f64,
}

/// A body accreting in the disk
///
/// `mass` always equals `dust_mass + gas_mass` up to rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Protoplanet {
    /// Semi-major axis in AU
    pub orbital_radius: f64,
    pub eccentricity: f64,
    pub mass: f64,
    pub dust_mass: f64,
    pub gas_mass: f64,
    /// Mass past which the body sweeps gas at its current orbit
    pub critical_mass: f64,
    pub is_gas_giant: bool,
    pub captured: Vec<CapturedBody>,
}

impl Protoplanet {
    /// A freshly injected nucleus made entirely of dust
    pub fn nucleus(orbital_radius: f64, eccentricity: f64, mass: f64, critical_mass: f64) -> Self {
        Self {
            orbital_radius,
            eccentricity,
            mass,
            dust_mass: mass,
            gas_mass: 0.0,
            critical_mass,
            is_gas_giant: false,
            captured: Vec::new(),
        }
    }

    /// Periapsis to apoapsis
    pub fn zone(&self) -> OrbitalZone {
        OrbitalZone::of_orbit(self.orbital_radius, self.eccentricity)
    }

    /// Zone widened by the reduced mass, the range the body perturbs
    pub fn gravitational_zone(&self, central_mass: f64) -> OrbitalZone {
        let mu = reduced_mass(self.mass, central_mass);
        OrbitalZone {
            perihelion: self.orbital_radius * (1.0 - self.eccentricity) * (1.0 - mu),
            aphelion: self.orbital_radius * (1.0 + self.eccentricity) * (1.0 + mu),
        }
    }

    /// Range of the disk this body sweeps material from
    pub fn sweep_zone(&self, central_mass: f64, cloud_eccentricity: f64) -> OrbitalZone {
        sweep_zone(
            self.orbital_radius,
            self.eccentricity,
            reduced_mass(self.mass, central_mass),
            cloud_eccentricity,
        )
    }

    pub fn captured_mass(&self) -> f64 {
        self.captured.iter().map(|body| body.mass).sum()
    }

    /// Whether the body is physically meaningful within [inner, outer]
    pub fn is_valid_within(&self, inner: f64, outer: f64) -> bool {
        self.mass.is_finite()
            && self.mass > 0.0
            && self.orbital_radius >= inner
            && self.orbital_radius <= outer
            && (0.0..1.0).contains(&self.eccentricity)
    }
}

/// Radial extent [perihelion, aphelion] in AU
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitalZone {
    pub perihelion: f64,
    pub aphelion: f64,
}

impl OrbitalZone {
    pub fn of_orbit(a: f64, e: f64) -> Self {
        Self {
            perihelion: a * (1.0 - e),
            aphelion: a * (1.0 + e),
        }
    }

    pub fn intersects(&self, other: &OrbitalZone) -> bool {
        self.perihelion <= other.aphelion && other.perihelion <= self.aphelion
    }

    pub fn contains(&self, r: f64) -> bool {
        r >= self.perihelion && r <= self.aphelion
    }
}

/// Swept range of a body at (a, e) with reduced mass `mu`
///
/// The cloud eccentricity widens the range: dust on eccentric orbits of its
/// own crosses the body's path from further out.
pub fn sweep_zone(a: f64, e: f64, mu: f64, cloud_eccentricity: f64) -> OrbitalZone {
    OrbitalZone {
        perihelion: (a * (1.0 - e) * (1.0 - mu) / (1.0 + cloud_eccentricity)).max(0.0),
        aphelion: a * (1.0 + e) * (1.0 + mu) / (1.0 - cloud_eccentricity),
    }
}

/// Reduced mass μ = (m / (M + m))^(1/4) of a body orbiting a central mass M
pub fn reduced_mass(mass: f64, central_mass: f64) -> f64 {
    let total = central_mass + mass;
    if total > 0.0 {
        (mass / total).max(0.0).powf(0.25)
    } else {
        0.0
    }
}

/// Critical mass for gas accretion: B · (a(1 − e) · √L)^(−3/4)
///
/// Bodies closer in or around brighter stars need more mass before they can
/// hold on to gas.
pub fn critical_mass(a: f64, e: f64, luminosity: f64) -> f64 {
    let perihelion = a * (1.0 - e);
    B * (perihelion * luminosity.sqrt()).powf(-0.75)
}
