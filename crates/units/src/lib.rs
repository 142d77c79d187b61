//! Typed physical quantities shared by the accretion, classification and
//! assembly crates.
//!
//! Each quantity wraps an `f64` in a fixed base unit (solar masses, AU,
//! Kelvin, millibars) and converts on the way in and out.

/// Arithmetic shared by the scalar quantities
///
/// Like quantities add and subtract; scaling takes a plain number; dividing
/// two like quantities gives their ratio.
macro_rules! scalar_ops {
    ($quantity:ident) => {
        impl std::ops::Add for $quantity {
            type Output = $quantity;

            fn add(self, rhs: $quantity) -> $quantity {
                $quantity(self.0 + rhs.0)
            }
        }

        impl std::ops::Sub for $quantity {
            type Output = $quantity;

            fn sub(self, rhs: $quantity) -> $quantity {
                $quantity(self.0 - rhs.0)
            }
        }

        impl std::ops::Mul<f64> for $quantity {
            type Output = $quantity;

            fn mul(self, rhs: f64) -> $quantity {
                $quantity(self.0 * rhs)
            }
        }

        impl std::ops::Div<f64> for $quantity {
            type Output = $quantity;

            fn div(self, rhs: f64) -> $quantity {
                $quantity(self.0 / rhs)
            }
        }

        /// Dimensionless ratio
        impl std::ops::Div for $quantity {
            type Output = f64;

            fn div(self, rhs: $quantity) -> f64 {
                self.0 / rhs.0
            }
        }
    };
}

pub mod length;
pub mod mass;
pub mod pressure;
pub mod temperature;


pub use length::{AU_TO_KM, EARTH_RADIUS_KM, Length};
pub use mass::{EARTH_MASS_G, EARTH_MASSES_PER_SOLAR_MASS, Mass, SOLAR_MASS_G};
pub use pressure::{EARTH_SURFACE_PRESSURE_MB, Pressure};
pub use temperature::Temperature;
