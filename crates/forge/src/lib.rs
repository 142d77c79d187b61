//! Planetary system generation
//!
//! Ties the pieces together: a star from [`stellar`], planets grown by the
//! [`accrete`] engine and classified by [`planetary`], and optionally the
//! moons of each planet, grown in a disk of their own.
//!
//! # Example
//! ```
//! use forge::{System, SystemConfig};
//! use stellar::StarConfig;
//!
//! let star = StarConfig::with_mass_and_luminosity(1.0, 1.0).unwrap();
//! let config = SystemConfig::new(star).with_seed(24).with_moons(true);
//!
//! let mut system = System::new(config).unwrap();
//! system.generate().unwrap();
//!
//! for planet in system.planets().unwrap() {
//!     assert!(planet.mass.is_positive());
//!     let moons = planet.moons();
//!     assert!(moons.windows(2).all(|w| w[0].orbital_radius <= w[1].orbital_radius));
//! }
//! ```

pub mod config;
pub mod error;
pub mod moons;
pub mod system;


pub use config::SystemConfig;
pub use error::Error;
pub use moons::{MoonZone, generate_moons, hill_radius, roche_limit};
pub use system::{GenerationState, System};
