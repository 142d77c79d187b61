//! Tests for the surface temperature feedback loop

use approx::assert_relative_eq;

use crate::temperature::{
    MAX_ITERATIONS, SurfaceInputs, cloud_fraction, effective_temperature, estimated_temperature,
    hydro_fraction, ice_fraction, planet_albedo, relax_surface,
};

fn earth_twin() -> SurfaceInputs {
    SurfaceInputs {
        ecosphere_radius: 1.0,
        orbital_radius: 1.0,
        radius: 6378.0,
        molecule_limit: 9.1,
        surface_pressure: 1013.0,
        volatile_inventory: 1000.0,
        greenhouse_effect: false,
        boiling_point: 373.35,
    }
}

// ========== Radiative balance ==========

#[test]
fn test_effective_temperature_of_earth() {
    assert_relative_eq!(effective_temperature(1.0, 1.0, 0.3), 250.0);
    assert_relative_eq!(estimated_temperature(1.0, 1.0, 0.3), 287.15);
    assert_relative_eq!(effective_temperature(1.0, 4.0, 0.3), 125.0);
}

#[test]
fn test_brighter_surfaces_are_colder() {
    assert!(effective_temperature(1.0, 1.0, 0.7) < effective_temperature(1.0, 1.0, 0.1));
}

// ========== Surface covers ==========

#[test]
fn test_hydro_fraction() {
    assert_relative_eq!(hydro_fraction(1000.0, 6378.0), 0.71);
    assert_eq!(hydro_fraction(1.0e6, 6378.0), 1.0);
    assert_eq!(hydro_fraction(0.0, 6378.0), 0.0);
}

#[test]
fn test_cloud_fraction() {
    let earth = cloud_fraction(287.0, 9.0, 6378.0, 0.71);
    assert_relative_eq!(earth, 0.5, max_relative = 0.05);
    // Warmer means cloudier, until saturation
    assert!(cloud_fraction(300.0, 9.0, 6378.0, 0.71) > earth);
    assert_eq!(cloud_fraction(400.0, 9.0, 6378.0, 0.71), 1.0);
    // No water vapour retained, no clouds
    assert_eq!(cloud_fraction(287.0, 20.0, 6378.0, 0.71), 0.0);
}

#[test]
fn test_ice_fraction() {
    assert_eq!(ice_fraction(0.7, 330.0), 0.0);
    assert_relative_eq!(ice_fraction(0.7, 287.0), (41.0f64 / 90.0).powi(5));
    // Capped by the water available
    assert_relative_eq!(ice_fraction(0.1, 150.0), 0.15);
    assert_eq!(ice_fraction(1.0, 100.0), 1.0);
}

#[test]
fn test_albedo_components() {
    assert_relative_eq!(planet_albedo(0.0, 0.0, 0.0, 0.0), 0.07);
    assert_relative_eq!(planet_albedo(0.0, 0.0, 0.0, 1000.0), 0.15);
    assert_relative_eq!(planet_albedo(1.0, 0.0, 0.0, 1000.0), 0.04);
    assert_relative_eq!(planet_albedo(0.0, 1.0, 0.0, 1000.0), 0.52);
}

// ========== Relaxation ==========

#[test]
fn test_earth_twin_settles_near_288_k() {
    let surface = relax_surface(&earth_twin());
    assert_relative_eq!(surface.temperature, 287.1, epsilon = 1.0);
    assert_relative_eq!(surface.hydrosphere, 0.71, epsilon = 0.01);
    assert_relative_eq!(surface.albedo, 0.3, epsilon = 0.02);
    assert!(!surface.boiled_off);
}

#[test]
fn test_relaxation_is_bounded() {
    let inputs = SurfaceInputs {
        orbital_radius: 0.7,
        surface_pressure: 141_800.0,
        volatile_inventory: 140_000.0,
        greenhouse_effect: true,
        boiling_point: 588.0,
        molecule_limit: 18.7,
        ..earth_twin()
    };
    let surface = relax_surface(&inputs);
    assert!(surface.iterations <= MAX_ITERATIONS);
    assert!(surface.temperature.is_finite());
}

#[test]
fn test_runaway_greenhouse_boils_oceans() {
    let venus = SurfaceInputs {
        orbital_radius: 0.723,
        radius: 5967.0,
        molecule_limit: 20.1,
        surface_pressure: 94_188.0,
        volatile_inventory: 114_100.0,
        greenhouse_effect: true,
        boiling_point: 561.5,
        ..earth_twin()
    };
    let surface = relax_surface(&venus);
    assert!(surface.boiled_off);
    assert_eq!(surface.hydrosphere, 0.0);
    assert!(surface.temperature > venus.boiling_point);
}

#[test]
fn test_airless_surface_has_no_greenhouse() {
    let mercury = SurfaceInputs {
        orbital_radius: 0.387,
        radius: 2450.0,
        molecule_limit: 426.0,
        surface_pressure: 0.0,
        volatile_inventory: 0.0,
        greenhouse_effect: true,
        boiling_point: 0.0,
        ..earth_twin()
    };
    let surface = relax_surface(&mercury);
    assert_eq!(surface.greenhouse_rise, 0.0);
    assert_relative_eq!(surface.albedo, 0.07, epsilon = 1e-9);
    assert_relative_eq!(surface.temperature, 431.4, epsilon = 1.0);
}

#[test]
fn test_relaxation_is_deterministic() {
    assert_eq!(relax_surface(&earth_twin()), relax_surface(&earth_twin()));
}
