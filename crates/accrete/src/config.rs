//! Tunable parameters of an accretion run

use serde::{Deserialize, Serialize};

use crate::constants::{
    CLOUD_ECCENTRICITY, DUST_DENSITY_COEFF, ECCENTRICITY_COEFF, INNER_PLANET_FACTOR,
    PROTOPLANET_MASS,
};

/// A parameter set that would make the run meaningless.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("accretion parameter `{field}` is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("accretion parameter `{field}` must be at least 1")]
    Zero { field: &'static str },
}

/// Disk and growth parameters
///
/// The defaults reproduce the classic dust accretion model. Unknown fields
/// are rejected when deserializing; missing ones take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AccretionConfig {
    /// Dust density coefficient `A` of ρ = A·√M·exp(−α r^(1/n))
    pub dust_density_coeff: f64,
    /// Exponent of the eccentricity law e = 1 − u^q
    pub eccentricity_coeff: f64,
    /// Eccentricity of the dust cloud particles
    pub cloud_eccentricity: f64,
    /// Innermost injection orbit per cube-root solar mass (AU)
    pub inner_planet_factor: f64,
    /// Inner edge of the dust disk in AU (0 when unset)
    pub inner_dust_limit: Option<f64>,
    /// Outermost injection orbit in AU (50·M^(1/3) when unset)
    pub outer_planet_limit: Option<f64>,
    /// Share of injections drawn around the ecosphere instead of uniformly
    pub ecosphere_weight: f64,
    /// Logistic scale of the ecosphere-centred draw, in ln(AU)
    pub ecosphere_spread: f64,
    /// Consecutive dust-less injections after which the run gives up
    pub max_failed_injections: usize,
    /// Relative mass change below which a growth loop has converged
    pub convergence: f64,
    /// Hard cap on growth iterations per nucleus
    pub max_growth_iterations: usize,
    /// Seed mass of each injected nucleus, in central-mass units
    pub protoplanet_mass: f64,
    /// Whether bodies past critical mass sweep gas
    pub gas_accretion: bool,
}

impl Default for AccretionConfig {
    fn default() -> Self {
        Self {
            dust_density_coeff: DUST_DENSITY_COEFF,
            eccentricity_coeff: ECCENTRICITY_COEFF,
            cloud_eccentricity: CLOUD_ECCENTRICITY,
            inner_planet_factor: INNER_PLANET_FACTOR,
            inner_dust_limit: None,
            outer_planet_limit: None,
            ecosphere_weight: 0.5,
            ecosphere_spread: 0.75,
            max_failed_injections: 512,
            convergence: 1.0e-4,
            max_growth_iterations: 10_000,
            protoplanet_mass: PROTOPLANET_MASS,
            gas_accretion: true,
        }
    }
}

impl AccretionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("dustDensityCoeff", self.dust_density_coeff)?;
        non_negative("eccentricityCoeff", self.eccentricity_coeff)?;
        within("cloudEccentricity", self.cloud_eccentricity, 0.0, 1.0)?;
        positive("innerPlanetFactor", self.inner_planet_factor)?;
        if let Some(limit) = self.inner_dust_limit {
            non_negative("innerDustLimit", limit)?;
        }
        if let Some(limit) = self.outer_planet_limit {
            positive("outerPlanetLimit", limit)?;
        }
        if !(0.0..=1.0).contains(&self.ecosphere_weight) {
            return Err(ConfigError::OutOfRange {
                field: "ecosphereWeight",
                value: self.ecosphere_weight,
            });
        }
        positive("ecosphereSpread", self.ecosphere_spread)?;
        within("convergence", self.convergence, 0.0, 1.0)?;
        positive("protoplanetMass", self.protoplanet_mass)?;
        if self.max_failed_injections == 0 {
            return Err(ConfigError::Zero {
                field: "maxFailedInjections",
            });
        }
        if self.max_growth_iterations == 0 {
            return Err(ConfigError::Zero {
                field: "maxGrowthIterations",
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

/// Half-open range [low, high)
fn within(field: &'static str, value: f64, low: f64, high: f64) -> Result<(), ConfigError> {
    if value >= low && value < high {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}
