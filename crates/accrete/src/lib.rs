//! Dust/gas accretion model for growing planets out of a protoplanetary disk
//!
//! Nuclei are injected into a disk of depletable material, grow by sweeping
//! the dust (and, past a critical mass, the gas) within their gravitational
//! reach, and merge whenever their orbits come to overlap. The run ends once
//! the disk is exhausted.
//!
//! Every stochastic decision draws from one [`RandomSource`], in a fixed order,
//! so a seed reproduces a run exactly.
//!
//! # Example
//! ```
//! use accrete::{AccretionConfig, AccretionEngine, Disk, RandomSource};
//! use stellar::StarConfig;
//!
//! let star = StarConfig::solar().resolve();
//! let config = AccretionConfig::default();
//! let disk = Disk::around_star(&star, &config);
//!
//! let mut rng = RandomSource::seeded(7);
//! let outcome = AccretionEngine::new(disk, config).run(&mut rng);
//! assert!(!outcome.bodies.is_empty());
//! ```

pub mod collision;
pub mod config;
pub mod constants;
pub mod disk;
pub mod dust;
pub mod engine;
pub mod growth;
pub mod protoplanet;
pub mod random;

#[cfg(test)]
mod collision_test;
#[cfg(test)]
mod config_test;
#[cfg(test)]
mod engine_test;

pub use collision::{Contact, capture, find_contact, in_contact, merge, qualifies_for_capture};
pub use config::{AccretionConfig, ConfigError};
pub use disk::Disk;
pub use dust::{BandTable, DustBand, Sweep};
pub use engine::{AccretionEngine, AccretionOutcome, AccretionStats};
pub use growth::{Collected, Growth, collect_dust, grow};
pub use protoplanet::{
    CapturedBody, OrbitalZone, Protoplanet, critical_mass, reduced_mass, sweep_zone,
};
pub use random::RandomSource;
