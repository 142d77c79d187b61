//! Tests for the mass-luminosity relation

use approx::assert_relative_eq;

use crate::luminosity::{luminosity_from_mass, mass_from_luminosity};

#[test]
fn test_solar_mass_gives_solar_luminosity() {
    assert_relative_eq!(luminosity_from_mass(1.0), 1.0, epsilon = 1e-12);
}

#[test]
fn test_branches_meet_at_one_solar_mass() {
    let below = luminosity_from_mass(1.0 - 1e-9);
    let above = luminosity_from_mass(1.0 + 1e-9);
    assert_relative_eq!(below, above, epsilon = 1e-6);
}

#[test]
fn test_luminosity_rises_with_mass() {
    let masses = [0.1, 0.3, 0.5, 0.8, 1.0, 1.5, 2.0, 3.0];
    for pair in masses.windows(2) {
        assert!(
            luminosity_from_mass(pair[0]) < luminosity_from_mass(pair[1]),
            "L({}) should be below L({})",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_red_dwarf_is_dim() {
    // 0.43 M☉ should be well under a tenth of solar
    let l = luminosity_from_mass(0.43);
    assert!(l > 0.01 && l < 0.1, "L(0.43) = {}", l);
}

#[test]
fn test_inversion_recovers_mass() {
    for mass in [0.08, 0.2, 0.43, 0.7, 1.0, 1.3, 2.5, 3.5] {
        let recovered = mass_from_luminosity(luminosity_from_mass(mass));
        assert_relative_eq!(recovered, mass, max_relative = 1e-9);
    }
}

#[test]
fn test_inversion_clamps_out_of_range() {
    assert_relative_eq!(mass_from_luminosity(1e-20), 1.0e-3);
    assert_relative_eq!(mass_from_luminosity(1e6), 4.0);
}
