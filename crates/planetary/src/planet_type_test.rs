//! Tests for planet type rules

use crate::planet_type::{PlanetType, SurfaceTraits};

fn earth() -> SurfaceTraits {
    SurfaceTraits {
        earth_masses: 1.0,
        gas_fraction: 0.0,
        surface_pressure: 1013.0,
        molecule_limit: 9.1,
        hydrosphere: 0.71,
        ice_cover: 0.02,
        surface_temperature: 287.0,
        boiling_point: 373.0,
        is_moon: false,
    }
}

#[test]
fn test_gas_giant_types() {
    assert_eq!(PlanetType::gas_giant(0.9, 317.8), PlanetType::GasGiant);
    assert_eq!(PlanetType::gas_giant(0.8, 17.0), PlanetType::SubGasGiant);
    assert_eq!(PlanetType::gas_giant(0.1, 50.0), PlanetType::SubSubGasGiant);
    assert!(PlanetType::GasGiant.is_gaseous());
    assert!(!PlanetType::Rock.is_gaseous());
}

#[test]
fn test_airless_bodies() {
    let mercury = SurfaceTraits {
        earth_masses: 0.055,
        surface_pressure: 0.0,
        hydrosphere: 0.0,
        ..earth()
    };
    assert_eq!(PlanetType::solid(&mercury), PlanetType::Rock);

    let rubble = SurfaceTraits {
        earth_masses: 0.0005,
        ..mercury
    };
    assert_eq!(PlanetType::solid(&rubble), PlanetType::Asteroids);

    // A moon is never an asteroid belt
    let small_moon = SurfaceTraits {
        is_moon: true,
        ..rubble
    };
    assert_eq!(PlanetType::solid(&small_moon), PlanetType::Rock);
}

#[test]
fn test_surface_types() {
    assert_eq!(PlanetType::solid(&earth()), PlanetType::Terrestrial);

    let ocean = SurfaceTraits {
        hydrosphere: 1.0,
        ..earth()
    };
    assert_eq!(PlanetType::solid(&ocean), PlanetType::Water);

    let venus = SurfaceTraits {
        hydrosphere: 0.0,
        surface_pressure: 94_000.0,
        surface_temperature: 830.0,
        boiling_point: 561.0,
        molecule_limit: 20.0,
        ..earth()
    };
    assert_eq!(PlanetType::solid(&venus), PlanetType::Venusian);

    let mars = SurfaceTraits {
        earth_masses: 0.107,
        hydrosphere: 0.0,
        ice_cover: 0.5,
        surface_pressure: 11.6,
        surface_temperature: 197.0,
        boiling_point: 280.0,
        ..earth()
    };
    assert_eq!(PlanetType::solid(&mars), PlanetType::Martian);

    let frozen = SurfaceTraits {
        hydrosphere: 0.0,
        ice_cover: 0.96,
        surface_temperature: 135.0,
        ..earth()
    };
    assert_eq!(PlanetType::solid(&frozen), PlanetType::Ice);
}

#[test]
fn test_hydrogen_rich_solid_is_gas_dwarf() {
    let dwarf = SurfaceTraits {
        surface_pressure: 25_000.0,
        molecule_limit: 1.5,
        ..earth()
    };
    assert_eq!(PlanetType::solid(&dwarf), PlanetType::SubSubGasGiant);
}

#[test]
fn test_display() {
    assert_eq!(PlanetType::SubSubGasGiant.to_string(), "Gas dwarf");
    assert_eq!(PlanetType::Terrestrial.to_string(), "Terrestrial");
}
