//! Property-based tests for the dust band table and the accretion run.
//!
//! Random depletion sequences must leave the table ordered, contiguous and
//! coalesced; random seeds must yield well-formed planetary systems.

use accrete::{
    AccretionConfig, AccretionEngine, BandTable, Disk, Protoplanet, RandomSource, merge,
};
use proptest::prelude::*;
use stellar::StarConfig;

// ===========================================================================
// Generators
// ===========================================================================

#[derive(Debug, Clone)]
struct Depletion {
    inner: f64,
    outer: f64,
    dust: bool,
    gas: bool,
}

fn arb_depletion() -> impl Strategy<Value = Depletion> {
    (0.0..250.0f64, 0.001..40.0f64, any::<bool>(), any::<bool>()).prop_map(
        |(inner, width, dust, gas)| Depletion {
            inner,
            outer: inner + width,
            dust,
            gas,
        },
    )
}

fn arb_body() -> impl Strategy<Value = Protoplanet> {
    (0.3..50.0f64, 0.0..0.9f64, 1.0e-12..1.0e-3f64)
        .prop_map(|(a, e, mass)| Protoplanet::nucleus(a, e, mass, 1.0))
}

// ===========================================================================
// Band table invariants
// ===========================================================================

proptest! {
    #[test]
    fn depletion_keeps_table_contiguous(
        depletions in proptest::collection::vec(arb_depletion(), 0..40)
    ) {
        let mut table = BandTable::new(0.0, 200.0);
        for d in &depletions {
            table.deplete(d.inner, d.outer, d.dust, d.gas);
        }

        let bands = table.bands();
        prop_assert!(!bands.is_empty());
        prop_assert_eq!(bands[0].inner_edge, 0.0);
        prop_assert_eq!(bands[bands.len() - 1].outer_edge, 200.0);

        for band in bands {
            prop_assert!(band.outer_edge > band.inner_edge);
        }
        for pair in bands.windows(2) {
            prop_assert_eq!(pair[0].outer_edge, pair[1].inner_edge);
            prop_assert!(
                pair[0].dust_present != pair[1].dust_present
                    || pair[0].gas_present != pair[1].gas_present
            );
        }
    }

    #[test]
    fn depleted_range_holds_no_dust(d in arb_depletion()) {
        let mut table = BandTable::new(0.0, 200.0);
        table.deplete(d.inner, d.outer, true, d.gas);
        prop_assert!(!table.sweep(d.inner, d.outer).dust);
    }

    #[test]
    fn merge_conserves_mass_and_bounds_orbit(first in arb_body(), second in arb_body()) {
        let merged = merge(&first, &second);
        let low = first.orbital_radius.min(second.orbital_radius);
        let high = first.orbital_radius.max(second.orbital_radius);

        prop_assert!((merged.mass - (first.mass + second.mass)).abs() <= 1e-12 * merged.mass);
        prop_assert!(merged.orbital_radius >= low * (1.0 - 1e-12));
        prop_assert!(merged.orbital_radius <= high * (1.0 + 1e-12));
        prop_assert!((0.0..1.0).contains(&merged.eccentricity));
    }
}

// ===========================================================================
// Whole runs
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn runs_yield_sorted_disjoint_orbits(seed in any::<u64>(), mass in 0.3..2.0f64) {
        let star = StarConfig::with_mass(mass).unwrap().resolve();
        let config = AccretionConfig::default();
        let disk = Disk::around_star(&star, &config);
        let (inner, outer) = (disk.planet_inner, disk.planet_outer);

        let outcome = AccretionEngine::new(disk, config)
            .with_captures(true)
            .run(&mut RandomSource::seeded(seed));

        for body in &outcome.bodies {
            prop_assert!(body.orbital_radius >= inner && body.orbital_radius <= outer);
            prop_assert!(body.mass > 0.0 && body.mass.is_finite());
        }
        for pair in outcome.bodies.windows(2) {
            prop_assert!(pair[0].orbital_radius < pair[1].orbital_radius);
            prop_assert!(!pair[0].zone().intersects(&pair[1].zone()));
        }
    }
}
