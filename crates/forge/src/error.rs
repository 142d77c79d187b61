//! Errors raised while configuring or reading a system

use accrete::ConfigError;
use stellar::StarError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The star configuration was rejected
    #[error("invalid star configuration: {0}")]
    Config(#[from] StarError),

    /// The accretion parameters were rejected
    #[error("invalid accretion configuration: {0}")]
    InvalidAccretionConfig(String),

    /// `generate` was called on a system that already holds planets
    #[error("system has already been generated")]
    AlreadyGenerated,

    /// A result was read before `generate` ran
    #[error("cannot read {0} before the system is generated")]
    NotGenerated(&'static str),
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::InvalidAccretionConfig(err.to_string())
    }
}
