//! Host star configuration and the stellar quantities the accretion model
//! derives from it.
//!
//! A star is described by its mass and luminosity; either one may be omitted
//! and is then derived from the other through the main-sequence
//! mass-luminosity relation.

pub mod error;
pub mod luminosity;
pub mod star;

#[cfg(test)]
mod luminosity_test;
#[cfg(test)]
mod star_test;

pub use error::StarError;
pub use luminosity::{luminosity_from_mass, mass_from_luminosity};
pub use star::{Star, StarConfig};
