use approx::assert_relative_eq;
use units::EARTH_MASSES_PER_SOLAR_MASS;

use crate::collision::{capture, find_contact, in_contact, merge, qualifies_for_capture};
use crate::protoplanet::{CapturedBody, Protoplanet};

const EARTH: f64 = 1.0 / EARTH_MASSES_PER_SOLAR_MASS;

fn body(a: f64, e: f64, mass: f64) -> Protoplanet {
    Protoplanet::nucleus(a, e, mass, 1.0)
}

#[test]
fn test_intersecting_orbits_are_in_contact() {
    let inner = body(1.0, 0.2, 1.0e-9);
    let outer = body(1.3, 0.1, 1.0e-9);
    assert!(in_contact(&inner, &outer, 1.0));
    assert!(in_contact(&outer, &inner, 1.0));
}

#[test]
fn test_distant_light_bodies_are_not_in_contact() {
    let inner = body(1.0, 0.0, 1.0e-12);
    let outer = body(2.0, 0.0, 1.0e-12);
    assert!(!in_contact(&inner, &outer, 1.0));
}

#[test]
fn test_gravitational_reach_creates_contact() {
    // Circular orbits 10% apart; a Jupiter-mass body reaches across
    let giant = body(5.0, 0.0, 1.0e-3);
    let small = body(5.5, 0.0, 1.0e-9);
    assert!(!giant.zone().intersects(&small.zone()));
    assert!(in_contact(&small, &giant, 1.0));
}

#[test]
fn test_find_contact_prefers_nearest() {
    let bodies = vec![body(0.9, 0.3, 1.0e-9), body(1.05, 0.1, 1.0e-9), body(5.0, 0.0, 1.0e-9)];
    let candidate = body(1.0, 0.1, 1.0e-9);

    let contact = find_contact(&candidate, &bodies, 1.0).unwrap();
    assert_eq!(contact.index, 1);
    assert_relative_eq!(contact.separation, 0.05, epsilon = 1e-12);

    assert!(find_contact(&body(20.0, 0.0, 1.0e-12), &bodies, 1.0).is_none());
}

#[test]
fn test_merge_conserves_mass() {
    let mut first = body(1.0, 0.1, 2.0e-6);
    first.gas_mass = 5.0e-7;
    first.dust_mass = 1.5e-6;
    let second = body(1.2, 0.05, 1.0e-6);

    let merged = merge(&first, &second);

    assert_relative_eq!(merged.mass, 3.0e-6);
    assert_relative_eq!(merged.dust_mass, 2.5e-6);
    assert_relative_eq!(merged.gas_mass, 5.0e-7);
}

#[test]
fn test_merge_orbit_lies_between_parents() {
    let first = body(1.0, 0.1, 2.0e-6);
    let second = body(1.2, 0.05, 1.0e-6);
    let merged = merge(&first, &second);

    // Harmonic mean weighted by mass: 3 / (2/1 + 1/1.2)
    assert_relative_eq!(merged.orbital_radius, 3.0 / (2.0 + 1.0 / 1.2));
    assert!(merged.orbital_radius > 1.0 && merged.orbital_radius < 1.2);
    assert!((0.0..1.0).contains(&merged.eccentricity));
}

#[test]
fn test_merge_of_identical_circular_orbits_stays_circular() {
    let merged = merge(&body(1.0, 0.0, 1.0e-6), &body(1.0, 0.0, 1.0e-6));
    assert_relative_eq!(merged.orbital_radius, 1.0);
    assert!(merged.eccentricity < 1.0e-6);
}

#[test]
fn test_merge_carries_captured_material() {
    let mut first = body(1.0, 0.0, 1.0e-6);
    first.captured.push(CapturedBody {
        mass: 1.0e-9,
        dust_mass: 1.0e-9,
        gas_mass: 0.0,
    });
    let mut second = body(1.1, 0.0, 1.0e-6);
    second.captured.push(CapturedBody {
        mass: 2.0e-9,
        dust_mass: 2.0e-9,
        gas_mass: 0.0,
    });

    let merged = merge(&first, &second);
    assert_eq!(merged.captured.len(), 2);
    assert_relative_eq!(merged.captured_mass(), 3.0e-9);
}

#[test]
fn test_capture_qualification() {
    let captor = body(1.0, 0.0, 300.0 * EARTH);
    assert!(qualifies_for_capture(&body(1.1, 0.0, 0.1 * EARTH), &captor));
    // Too light, too heavy
    assert!(!qualifies_for_capture(&body(1.1, 0.0, 1.0e-5 * EARTH), &captor));
    assert!(!qualifies_for_capture(&body(1.1, 0.0, 3.0 * EARTH), &captor));

    // Gas-rich candidates merge instead
    let mut gassy = body(1.1, 0.0, 0.1 * EARTH);
    gassy.critical_mass = 0.01 * EARTH;
    assert!(!qualifies_for_capture(&gassy, &captor));

    // The captor already holds its share
    let mut full = captor.clone();
    full.captured.push(CapturedBody {
        mass: 20.0 * EARTH,
        dust_mass: 20.0 * EARTH,
        gas_mass: 0.0,
    });
    assert!(!qualifies_for_capture(&body(1.1, 0.0, 0.1 * EARTH), &full));
}

#[test]
fn test_capture_keeps_heavier_body_on_orbit() {
    let mut captor = body(1.0, 0.0, 0.5 * EARTH);
    let candidate = body(1.1, 0.0, 2.0 * EARTH);

    capture(&mut captor, candidate);

    assert_relative_eq!(captor.mass, 2.0 * EARTH);
    assert_relative_eq!(captor.orbital_radius, 1.0);
    assert_eq!(captor.captured.len(), 1);
    assert_relative_eq!(captor.captured[0].mass, 0.5 * EARTH);
}

#[test]
fn test_capture_swap_updates_giant_flag() {
    // A light captor flagged as a giant takes on a heavier rocky candidate's
    // material, which sits below the captor's critical mass
    let mut captor = Protoplanet::nucleus(1.0, 0.0, 0.5 * EARTH, 5.0 * EARTH);
    captor.gas_mass = 0.4 * EARTH;
    captor.dust_mass = 0.1 * EARTH;
    captor.is_gas_giant = true;
    let candidate = Protoplanet::nucleus(1.1, 0.0, 2.0 * EARTH, 10.0 * EARTH);

    capture(&mut captor, candidate);

    assert_relative_eq!(captor.mass, 2.0 * EARTH);
    assert_eq!(captor.gas_mass, 0.0);
    assert!(!captor.is_gas_giant);

    // Heavier material past the critical mass makes the captor a giant
    let mut rocky = body(1.0, 0.0, 0.5 * EARTH);
    rocky.critical_mass = 1.0 * EARTH;
    let gassy = Protoplanet::nucleus(1.1, 0.0, 2.0 * EARTH, 10.0 * EARTH);
    capture(&mut rocky, gassy);
    assert!(rocky.is_gas_giant);
}

#[test]
fn test_capture_without_swap_keeps_flag() {
    let mut captor = body(1.0, 0.0, 2.0 * EARTH);
    captor.is_gas_giant = true;
    capture(&mut captor, body(1.1, 0.0, 0.5 * EARTH));
    assert!(captor.is_gas_giant);
    assert_relative_eq!(captor.mass, 2.0 * EARTH);
}
