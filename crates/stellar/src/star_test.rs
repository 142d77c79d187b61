//! Tests for star configuration and derived quantities

use approx::assert_relative_eq;

use crate::error::StarError;
use crate::luminosity::luminosity_from_mass;
use crate::star::{Star, StarConfig};

#[test]
fn test_config_requires_mass_or_luminosity() {
    assert_eq!(StarConfig::new(None, None), Err(StarError::MissingParameters));
}

#[test]
fn test_config_rejects_non_positive_values() {
    assert!(matches!(
        StarConfig::with_mass(0.0),
        Err(StarError::NonPositive { parameter: "mass", .. })
    ));
    assert!(matches!(
        StarConfig::with_luminosity(-1.0),
        Err(StarError::NonPositive {
            parameter: "luminosity",
            ..
        })
    ));
    assert!(StarConfig::with_mass(f64::NAN).is_err());
    assert!(StarConfig::with_mass_and_luminosity(1.0, f64::INFINITY).is_err());
}

#[test]
fn test_supplied_values_pass_through_exactly() {
    let star = StarConfig::with_mass_and_luminosity(0.43, 0.31)
        .unwrap()
        .resolve();
    assert_eq!(star.mass.to_solar_masses(), 0.43);
    assert_eq!(star.luminosity, 0.31);
}

#[test]
fn test_mass_only_derives_luminosity() {
    let star = StarConfig::with_mass(0.8).unwrap().resolve();
    assert_eq!(star.mass.to_solar_masses(), 0.8);
    assert_relative_eq!(star.luminosity, luminosity_from_mass(0.8));
}

#[test]
fn test_luminosity_only_derives_mass() {
    let star = StarConfig::with_luminosity(1.0).unwrap().resolve();
    assert_eq!(star.luminosity, 1.0);
    assert_relative_eq!(star.mass.to_solar_masses(), 1.0, max_relative = 1e-9);
}

#[test]
fn test_default_config_is_solar() {
    let star = StarConfig::default().resolve();
    assert_eq!(star.mass.to_solar_masses(), 1.0);
    assert_eq!(star.luminosity, 1.0);
}

#[test]
fn test_solar_disk_dimensions() {
    let sun = Star::new(1.0, 1.0);
    assert_relative_eq!(sun.ecosphere_radius.to_au(), 1.0);
    assert_relative_eq!(sun.dust_outer_limit().to_au(), 200.0);
    assert_relative_eq!(sun.planet_inner_limit(0.3).to_au(), 0.3);
    assert_relative_eq!(sun.planet_outer_limit().to_au(), 50.0);
    assert_relative_eq!(sun.lifetime_years, 1.0e10);
}

#[test]
fn test_disk_scales_with_cube_root_of_mass() {
    let star = Star::new(0.125, 0.01);
    assert_relative_eq!(star.planet_outer_limit().to_au(), 25.0, epsilon = 1e-9);
    assert_relative_eq!(star.ecosphere_radius.to_au(), 0.1, epsilon = 1e-12);
}

#[test]
fn test_config_accessors() {
    let config = StarConfig::with_mass(0.9).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.mass(), Some(0.9));
    assert_eq!(config.luminosity(), None);
}
