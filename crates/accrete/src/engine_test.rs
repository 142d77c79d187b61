use stellar::StarConfig;

use crate::config::AccretionConfig;
use crate::disk::Disk;
use crate::engine::{AccretionEngine, AccretionOutcome};
use crate::random::RandomSource;

fn run_solar(seed: u64) -> AccretionOutcome {
    let config = AccretionConfig::default();
    let disk = Disk::around_star(&StarConfig::solar().resolve(), &config);
    AccretionEngine::new(disk, config)
        .with_captures(true)
        .run(&mut RandomSource::seeded(seed))
}

#[test]
fn test_solar_run_produces_planets() {
    let outcome = run_solar(24);
    assert!(!outcome.bodies.is_empty());
    assert!(outcome.stats.injections >= outcome.bodies.len());
}

#[test]
fn test_bodies_sorted_and_within_bounds() {
    for seed in [1, 2, 3, 24, 99] {
        let outcome = run_solar(seed);
        for pair in outcome.bodies.windows(2) {
            assert!(pair[0].orbital_radius < pair[1].orbital_radius);
        }
        for body in &outcome.bodies {
            assert!(body.orbital_radius >= 0.3 && body.orbital_radius <= 50.0);
            assert!((0.0..1.0).contains(&body.eccentricity));
            assert!(body.mass > 0.0);
        }
    }
}

#[test]
fn test_final_orbits_do_not_overlap() {
    for seed in [5, 6, 7, 8] {
        let outcome = run_solar(seed);
        for (i, a) in outcome.bodies.iter().enumerate() {
            for b in &outcome.bodies[i + 1..] {
                assert!(
                    !a.zone().intersects(&b.zone()),
                    "seed {}: {:?} overlaps {:?}",
                    seed,
                    a.zone(),
                    b.zone()
                );
            }
        }
    }
}

#[test]
fn test_mass_budget_balances() {
    let outcome = run_solar(11);
    for body in &outcome.bodies {
        let parts = body.dust_mass + body.gas_mass;
        assert!(
            (body.mass - parts).abs() <= 1e-9 * body.mass,
            "mass {} vs dust+gas {}",
            body.mass,
            parts
        );
    }
}

#[test]
fn test_gas_giant_flag_matches_critical_mass() {
    let outcome = run_solar(24);
    for body in &outcome.bodies {
        assert_eq!(body.is_gas_giant, body.mass >= body.critical_mass);
    }
}

#[test]
fn test_same_seed_same_system() {
    assert_eq!(run_solar(31), run_solar(31));
}

#[test]
fn test_run_ends_with_dust_exhausted_or_limit_reached() {
    let outcome = run_solar(12);
    if !outcome.stats.gave_up {
        assert!(!outcome.bands.dust_remaining(0.3, 50.0));
    }
}

#[test]
fn test_degenerate_disk_yields_nothing() {
    let config = AccretionConfig {
        outer_planet_limit: Some(0.1),
        ..AccretionConfig::default()
    };
    let disk = Disk::around_star(&StarConfig::solar().resolve(), &config);
    let outcome = AccretionEngine::new(disk, config).run(&mut RandomSource::seeded(1));
    assert!(outcome.bodies.is_empty());
    assert_eq!(outcome.stats.injections, 0);
}

#[test]
fn test_gas_free_disk_makes_no_giants() {
    let config = AccretionConfig {
        gas_accretion: false,
        ..AccretionConfig::default()
    };
    let disk = Disk::around_star(&StarConfig::solar().resolve(), &config);
    let outcome = AccretionEngine::new(disk, config).run(&mut RandomSource::seeded(4));

    assert!(!outcome.bodies.is_empty());
    for body in &outcome.bodies {
        assert!(!body.is_gas_giant);
        assert_eq!(body.gas_mass, 0.0);
    }
}

#[test]
fn test_failure_limit_bounds_the_run() {
    let config = AccretionConfig {
        max_failed_injections: 1,
        ..AccretionConfig::default()
    };
    let disk = Disk::around_star(&StarConfig::solar().resolve(), &config);
    let outcome = AccretionEngine::new(disk, config).run(&mut RandomSource::seeded(4));
    assert!(outcome.stats.failed_injections <= 1);
}
