//! Physical constants of the environment model (cgs unless noted)

/// Gravitational constant (dyn·cm²/g²)
pub const GRAV_CONSTANT: f64 = 6.672e-8;

/// Molar gas constant (g·m²/(s²·K·mol))
pub const MOLAR_GAS_CONST: f64 = 8314.41;

/// Escape velocity must exceed the RMS velocity by this factor for a gas to stay
pub const GAS_RETENTION_THRESHOLD: f64 = 6.0;

/// Earth's surface acceleration (cm/s²)
pub const EARTH_ACCELERATION: f64 = 980.7;

pub const EARTH_AVERAGE_KELVIN: f64 = 287.15;
pub const EARTH_EFFECTIVE_TEMP: f64 = 250.0;
pub const EARTH_EXOSPHERE_TEMP: f64 = 1273.0;
pub const FREEZING_POINT_OF_WATER: f64 = 273.15;

/// Grams of water per square kilometre of Earth's surface
pub const EARTH_WATER_MASS_PER_AREA: f64 = 3.83e15;

pub const EARTH_CONVECTION_FACTOR: f64 = 0.43;

/// Cloud cover per kilogram of water vapour per square kilometre
pub const CLOUD_COVERAGE_FACTOR: f64 = 1.839e-8;

/// Growth rate of water vapour with temperature (1/K)
pub const Q2_36: f64 = 0.0698;

pub const CM_PER_KM: f64 = 1.0e5;
pub const CM_PER_METER: f64 = 100.0;
pub const MILLIBARS_PER_BAR: f64 = 1000.0;

/// Bodies lighter than this (Earth masses) without atmosphere are asteroid belts
pub const ASTEROID_MASS_LIMIT: f64 = 0.001;

/// Molecular weights (g/mol)
pub mod molecule {
    pub const MOL_HYDROGEN: f64 = 2.0;
    pub const HELIUM: f64 = 4.0;
    pub const WATER_VAPOR: f64 = 18.0;
    pub const MOL_NITROGEN: f64 = 28.0;
    pub const MOL_OXYGEN: f64 = 32.0;
    pub const CARBON_DIOXIDE: f64 = 44.0;
}

/// Bond albedos of surface and cloud components
pub mod albedo {
    pub const EARTH: f64 = 0.3;
    pub const GREENHOUSE_TRIGGER: f64 = 0.2;
    pub const CLOUD: f64 = 0.52;
    pub const ICE: f64 = 0.7;
    pub const AIRLESS_ICE: f64 = 0.5;
    pub const ROCKY: f64 = 0.15;
    pub const ROCKY_AIRLESS: f64 = 0.07;
    pub const WATER: f64 = 0.04;
    pub const GAS_GIANT: f64 = 0.5;
}
