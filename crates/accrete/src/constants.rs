//! Constants of the dust accretion model
//!
//! Masses are in units of the central body's mass unit (solar masses for a
//! star), distances in AU.

/// Mass of a freshly injected nucleus
pub const PROTOPLANET_MASS: f64 = 1.0e-15;

/// Dust density coefficient `A` of the disk density law
pub const DUST_DENSITY_COEFF: f64 = 2.0e-3;

/// Radial falloff of dust density: ρ ∝ exp(−ALPHA · r^(1/N))
pub const ALPHA: f64 = 5.0;
pub const N: f64 = 3.0;

/// Gas to dust ratio of the disk
pub const K: f64 = 50.0;

/// Critical mass coefficient for gas capture
pub const B: f64 = 1.2e-5;

/// Exponent of the eccentricity law e = 1 − u^ECCENTRICITY_COEFF
pub const ECCENTRICITY_COEFF: f64 = 0.077;

/// Eccentricity of the dust cloud particles themselves
pub const CLOUD_ECCENTRICITY: f64 = 0.2;

/// Eccentricities are capped just below unbound
pub const MAX_ECCENTRICITY: f64 = 0.99;

/// Innermost injection orbit per cube-root solar mass (AU)
pub const INNER_PLANET_FACTOR: f64 = 0.3;
