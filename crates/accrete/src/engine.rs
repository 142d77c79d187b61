//! The accretion run: inject nuclei until the disk is exhausted

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::collision::{capture, find_contact, merge, qualifies_for_capture};
use crate::config::AccretionConfig;
use crate::disk::Disk;
use crate::dust::BandTable;
use crate::growth::grow;
use crate::protoplanet::Protoplanet;
use crate::random::RandomSource;

/// Counters describing how a run went
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccretionStats {
    pub injections: usize,
    /// Injections that found no dust in reach, or gained nothing
    pub failed_injections: usize,
    pub merges: usize,
    pub captures: usize,
    /// Bodies dropped for leaving the disk or ending up massless
    pub discarded: usize,
    /// Whether the run stopped on the consecutive-failure limit
    /// rather than on dust exhaustion
    pub gave_up: bool,
}

/// Final bodies, sorted by semi-major axis, and what is left of the disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccretionOutcome {
    pub bodies: Vec<Protoplanet>,
    pub bands: BandTable,
    pub stats: AccretionStats,
}

/// Drives one accretion run over a disk
///
/// # Examples
/// ```
/// use accrete::{AccretionConfig, AccretionEngine, Disk, RandomSource};
/// use stellar::StarConfig;
///
/// let star = StarConfig::with_mass(0.8).unwrap().resolve();
/// let config = AccretionConfig::default();
/// let disk = Disk::around_star(&star, &config);
///
/// let outcome = AccretionEngine::new(disk, config).run(&mut RandomSource::seeded(1));
/// let radii: Vec<f64> = outcome.bodies.iter().map(|b| b.orbital_radius).collect();
/// assert!(radii.windows(2).all(|w| w[0] < w[1]));
/// ```
#[derive(Debug)]
pub struct AccretionEngine {
    disk: Disk,
    config: AccretionConfig,
    bands: BandTable,
    bodies: Vec<Protoplanet>,
    captures: bool,
    stats: AccretionStats,
}

impl AccretionEngine {
    pub fn new(disk: Disk, config: AccretionConfig) -> Self {
        let bands = BandTable::with_gas(disk.dust_inner, disk.dust_outer, disk.gas);
        Self {
            disk,
            config,
            bands,
            bodies: Vec::new(),
            captures: false,
            stats: AccretionStats::default(),
        }
    }

    /// Let contacts that qualify become captured moons instead of merging
    pub fn with_captures(mut self, enabled: bool) -> Self {
        self.captures = enabled;
        self
    }

    pub fn disk(&self) -> &Disk {
        &self.disk
    }

    /// Run to completion
    ///
    /// Each injection draws an orbit then an eccentricity, in that order. The
    /// run ends once no dust remains within the injection range, or after
    /// `max_failed_injections` consecutive injections found nothing to grow on.
    pub fn run(mut self, rng: &mut RandomSource) -> AccretionOutcome {
        if self.disk.is_degenerate() {
            debug!(
                inner = self.disk.planet_inner,
                outer = self.disk.planet_outer,
                "degenerate disk, nothing to accrete"
            );
            return self.finish();
        }

        let mut consecutive_failures = 0;
        let mut dust_left = self.dust_left();

        while dust_left && consecutive_failures < self.config.max_failed_injections {
            let a = rng.orbital_radius(
                self.disk.planet_inner,
                self.disk.planet_outer,
                self.disk.ecosphere_radius,
                self.config.ecosphere_weight,
                self.config.ecosphere_spread,
            );
            let e = rng.eccentricity(self.config.eccentricity_coeff);
            self.stats.injections += 1;

            let mut nucleus = Protoplanet::nucleus(
                a,
                e,
                self.config.protoplanet_mass,
                self.disk.critical_mass(a, e),
            );

            let reach = nucleus.sweep_zone(self.disk.central_mass, self.config.cloud_eccentricity);
            if !self.bands.sweep(reach.perihelion, reach.aphelion).dust {
                trace!(a, e, "no dust in reach");
                consecutive_failures += 1;
                self.stats.failed_injections += 1;
                continue;
            }

            let growth = grow(&mut self.bands, &self.disk, &self.config, &mut nucleus);
            dust_left = self.dust_left();

            if growth.accreted() <= 0.0 {
                consecutive_failures += 1;
                self.stats.failed_injections += 1;
                continue;
            }

            consecutive_failures = 0;
            nucleus.is_gas_giant = nucleus.mass >= nucleus.critical_mass;
            self.settle(nucleus);
        }

        self.stats.gave_up = dust_left;
        debug!(
            bodies = self.bodies.len(),
            injections = self.stats.injections,
            merges = self.stats.merges,
            captures = self.stats.captures,
            gave_up = self.stats.gave_up,
            "accretion finished"
        );

        self.finish()
    }

    fn dust_left(&self) -> bool {
        self.bands
            .dust_remaining(self.disk.planet_inner, self.disk.planet_outer)
    }

    /// Resolve every contact of `candidate`, then keep whatever survives
    fn settle(&mut self, mut candidate: Protoplanet) {
        while let Some(contact) = find_contact(&candidate, &self.bodies, self.disk.central_mass) {
            if self.captures && qualifies_for_capture(&candidate, &self.bodies[contact.index]) {
                debug!(
                    a = candidate.orbital_radius,
                    captor = self.bodies[contact.index].orbital_radius,
                    "captured"
                );
                capture(&mut self.bodies[contact.index], candidate);
                self.stats.captures += 1;
                return;
            }

            let existing = self.bodies.remove(contact.index);
            let mut merged = merge(&existing, &candidate);
            merged.critical_mass = self
                .disk
                .critical_mass(merged.orbital_radius, merged.eccentricity);
            grow(&mut self.bands, &self.disk, &self.config, &mut merged);
            merged.is_gas_giant = merged.mass >= merged.critical_mass;

            debug!(
                from = existing.orbital_radius,
                with = candidate.orbital_radius,
                into = merged.orbital_radius,
                mass = merged.mass,
                "merged"
            );
            self.stats.merges += 1;
            candidate = merged;
        }

        if !candidate.is_valid_within(self.disk.planet_inner, self.disk.planet_outer) {
            trace!(a = candidate.orbital_radius, "discarded");
            self.stats.discarded += 1;
            return;
        }

        let at = self
            .bodies
            .partition_point(|body| body.orbital_radius < candidate.orbital_radius);
        self.bodies.insert(at, candidate);
    }

    fn finish(self) -> AccretionOutcome {
        AccretionOutcome {
            bodies: self.bodies,
            bands: self.bands,
            stats: self.stats,
        }
    }
}
