//! Physical and environmental classification of accreted bodies
//!
//! Takes the bodies an accretion run leaves behind and derives their size,
//! gravity, atmosphere, surface temperature and type. Everything here is
//! deterministic: classification draws no random numbers.

pub mod atmosphere;
pub mod constants;
pub mod environment;
pub mod moon;
pub mod planet;
pub mod planet_type;
pub mod structure;
pub mod temperature;

pub use atmosphere::AtmosphereClass;
pub use environment::{BodyInputs, Environment, classify};
pub use moon::{Moon, MoonOrigin};
pub use planet::Planet;
pub use planet_type::PlanetType;
pub use temperature::SurfaceConditions;

#[cfg(test)]
mod planet_type_test;
#[cfg(test)]
mod temperature_test;
