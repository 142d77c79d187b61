//! What a system is generated from

use accrete::AccretionConfig;
use serde::{Deserialize, Serialize};
use stellar::StarConfig;

use crate::error::Error;

/// Inputs of a generation run
///
/// The default is a solar star, a fresh random seed and no moons.
///
/// # Examples
/// ```
/// use forge::SystemConfig;
///
/// let config = SystemConfig::default().with_seed(24).with_moons(true);
/// assert_eq!(config.seed, Some(24));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemConfig {
    pub star: StarConfig,
    /// Drawn from entropy when unset
    pub seed: Option<u64>,
    /// Generate moons, and let planets capture smaller bodies as moons
    pub moons: bool,
    pub accretion: AccretionConfig,
}

impl SystemConfig {
    pub fn new(star: StarConfig) -> Self {
        Self {
            star,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_moons(mut self, moons: bool) -> Self {
        self.moons = moons;
        self
    }

    pub fn with_accretion(mut self, accretion: AccretionConfig) -> Self {
        self.accretion = accretion;
        self
    }

    /// Reject the configuration before any generation work happens
    pub fn validate(&self) -> Result<(), Error> {
        self.star.validate()?;
        self.accretion.validate()?;

        if let Some(outer) = self.accretion.outer_planet_limit {
            let inner = self
                .star
                .resolve()
                .planet_inner_limit(self.accretion.inner_planet_factor)
                .to_au();
            if outer <= inner {
                return Err(Error::InvalidAccretionConfig(format!(
                    "outer planet limit {outer} AU is inside the inner limit {inner} AU"
                )));
            }
        }
        Ok(())
    }
}
