/// Rejections raised while validating a star configuration.
///
/// These are configuration errors: they are reported synchronously when a
/// configuration is built, before any generation work happens.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StarError {
    /// Neither a mass nor a luminosity was supplied.
    #[error("a star needs a mass, a luminosity, or both")]
    MissingParameters,

    /// A supplied value was zero, negative, or not finite.
    #[error("stellar {parameter} must be a positive finite number, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },
}
