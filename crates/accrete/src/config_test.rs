use crate::config::{AccretionConfig, ConfigError};

#[test]
fn test_defaults_match_classic_model() {
    let config = AccretionConfig::default();
    assert_eq!(config.dust_density_coeff, 2.0e-3);
    assert_eq!(config.eccentricity_coeff, 0.077);
    assert_eq!(config.cloud_eccentricity, 0.2);
    assert_eq!(config.inner_planet_factor, 0.3);
    assert_eq!(config.protoplanet_mass, 1.0e-15);
    assert_eq!(config.max_failed_injections, 512);
    assert!(config.gas_accretion);
    assert!(config.validate().is_ok());
}

#[test]
fn test_rejects_out_of_range_parameters() {
    let config = AccretionConfig {
        cloud_eccentricity: 1.0,
        ..AccretionConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::OutOfRange {
            field: "cloudEccentricity",
            value: 1.0
        })
    );

    let config = AccretionConfig {
        dust_density_coeff: -1.0,
        ..AccretionConfig::default()
    };
    assert!(config.validate().is_err());

    let config = AccretionConfig {
        ecosphere_weight: 1.5,
        ..AccretionConfig::default()
    };
    assert!(config.validate().is_err());

    let config = AccretionConfig {
        outer_planet_limit: Some(f64::NAN),
        ..AccretionConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_rejects_zero_counts() {
    let config = AccretionConfig {
        max_failed_injections: 0,
        ..AccretionConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::Zero {
            field: "maxFailedInjections"
        })
    );
}

#[test]
fn test_deserialize_fills_defaults() {
    let config: AccretionConfig =
        serde_json::from_str(r#"{"eccentricityCoeff": 0.1, "innerDustLimit": 0.2}"#).unwrap();
    assert_eq!(config.eccentricity_coeff, 0.1);
    assert_eq!(config.inner_dust_limit, Some(0.2));
    assert_eq!(config.dust_density_coeff, 2.0e-3);
}

#[test]
fn test_deserialize_rejects_unknown_fields() {
    let result: Result<AccretionConfig, _> = serde_json::from_str(r#"{"dustDensity": 1.0}"#);
    assert!(result.is_err());
}
