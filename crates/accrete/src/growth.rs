//! Growing a body by sweeping the disk within its reach

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::AccretionConfig;
use crate::constants::K;
use crate::disk::Disk;
use crate::dust::BandTable;
use crate::protoplanet::{OrbitalZone, Protoplanet, reduced_mass, sweep_zone};

/// Material within a swept range, split by kind
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collected {
    pub mass: f64,
    pub dust: f64,
    pub gas: f64,
    pub zone: OrbitalZone,
}

/// Outcome of one growth phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Growth {
    pub mass_before: f64,
    pub mass_after: f64,
    pub dust_accreted: f64,
    pub gas_accreted: f64,
    /// Material the final swept range held before it was depleted
    pub available: f64,
    /// Range cleared from the band table
    pub swept: OrbitalZone,
    pub iterations: usize,
    pub converged: bool,
}

impl Growth {
    pub fn accreted(&self) -> f64 {
        self.mass_after - self.mass_before
    }
}

/// Mass a body of `mass` at (a, e) would sweep out of the current table
///
/// Each band overlapping the swept range contributes the volume of the
/// overlap times its density. Bands without dust contribute nothing; bands
/// with gas add gas once the body is past `critical_mass`, approaching the
/// full gas-to-dust ratio K as the body grows.
pub fn collect_dust(
    bands: &BandTable,
    disk: &Disk,
    cloud_eccentricity: f64,
    mass: f64,
    a: f64,
    e: f64,
    critical_mass: f64,
) -> Collected {
    let mu = reduced_mass(mass, disk.central_mass);
    let zone = sweep_zone(a, e, mu, cloud_eccentricity);
    let bandwidth = zone.aphelion - zone.perihelion;
    let mut collected = Collected {
        zone,
        ..Collected::default()
    };

    if !(bandwidth > 0.0) {
        return collected;
    }

    let density = disk.dust_density(a);

    for band in bands.bands() {
        if !band.overlaps(zone.perihelion, zone.aphelion) {
            continue;
        }

        let dust_density = if band.dust_present { density } else { 0.0 };
        let (mass_density, gas_density) = if mass < critical_mass || !band.gas_present {
            (dust_density, 0.0)
        } else {
            let total = K * dust_density / (1.0 + (critical_mass / mass).sqrt() * (K - 1.0));
            (total, total - dust_density)
        };

        let outside_outer = (zone.aphelion - band.outer_edge).max(0.0);
        let outside_inner = (band.inner_edge - zone.perihelion).max(0.0);
        let width = bandwidth - outside_outer - outside_inner;
        let volume = 4.0
            * PI
            * a.powi(2)
            * mu
            * (1.0 - e * (outside_outer - outside_inner) / bandwidth)
            * width;

        collected.mass += volume * mass_density;
        collected.gas += volume * gas_density;
        collected.dust += volume * (mass_density - gas_density);
    }

    collected
}

/// Grow `body` until its swept mass converges, then deplete what it took
///
/// The swept range is recomputed from the mass found on the previous pass
/// until the relative change drops under the configured convergence (or the
/// iteration cap is hit). The body gains the converged mass; dust is cleared
/// over the final range, and gas too when the body is past critical mass.
pub fn grow(
    bands: &mut BandTable,
    disk: &Disk,
    config: &AccretionConfig,
    body: &mut Protoplanet,
) -> Growth {
    let mass_before = body.mass;
    let mut found = mass_before;
    let mut collected;
    let mut iterations = 0;
    let mut converged = false;

    loop {
        let previous = found;
        collected = collect_dust(
            bands,
            disk,
            config.cloud_eccentricity,
            previous,
            body.orbital_radius,
            body.eccentricity,
            body.critical_mass,
        );
        found = collected.mass;
        iterations += 1;

        if found - previous < config.convergence * previous {
            converged = true;
            break;
        }
        if iterations >= config.max_growth_iterations {
            break;
        }
    }

    body.mass = mass_before + found;
    body.dust_mass += collected.dust;
    body.gas_mass += collected.gas;

    let sweeps_gas = body.mass > body.critical_mass;
    bands.deplete(
        collected.zone.perihelion,
        collected.zone.aphelion,
        true,
        sweeps_gas,
    );

    trace!(
        a = body.orbital_radius,
        mass = body.mass,
        iterations,
        converged,
        "grew protoplanet"
    );

    Growth {
        mass_before,
        mass_after: body.mass,
        dust_accreted: collected.dust,
        gas_accreted: collected.gas,
        available: collected.mass,
        swept: collected.zone,
        iterations,
        converged,
    }
}
