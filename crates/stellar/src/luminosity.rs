//! Main-sequence mass-luminosity relation
//!
//! Uses the piecewise power law `L = M^n` with a mass-dependent exponent:
//! - M < 1 M☉: n = 1.75 (M − 0.1) + 3.325
//! - M ≥ 1 M☉: n = 0.5 (2 − M) + 4.4
//!
//! Both branches give L = 1 at M = 1. The relation rises monotonically up to
//! roughly 4 M☉, which bounds the range [`mass_from_luminosity`] can invert.

/// Lightest mass considered when inverting the relation (M☉)
const MIN_INVERTIBLE_MASS: f64 = 1.0e-3;

/// Heaviest mass considered when inverting the relation (M☉)
const MAX_INVERTIBLE_MASS: f64 = 4.0;

/// Bisection steps; 200 halvings of [1e-3, 4] reach machine precision
const BISECTION_STEPS: usize = 200;

/// Luminosity in L☉ of a main-sequence star of the given mass in M☉
///
/// # Examples
/// ```
/// use stellar::luminosity_from_mass;
///
/// assert!((luminosity_from_mass(1.0) - 1.0).abs() < 1e-12);
/// assert!(luminosity_from_mass(0.5) < 0.1);
/// ```
pub fn luminosity_from_mass(mass: f64) -> f64 {
    let exponent = if mass < 1.0 {
        1.75 * (mass - 0.1) + 3.325
    } else {
        0.5 * (2.0 - mass) + 4.4
    };
    mass.powf(exponent)
}

/// Mass in M☉ of the main-sequence star with the given luminosity in L☉
///
/// Inverts [`luminosity_from_mass`] by bisection. Luminosities outside the
/// invertible range clamp to its end points (1e-3 M☉ and 4 M☉).
pub fn mass_from_luminosity(luminosity: f64) -> f64 {
    let mut low = MIN_INVERTIBLE_MASS;
    let mut high = MAX_INVERTIBLE_MASS;

    if luminosity <= luminosity_from_mass(low) {
        return low;
    }
    if luminosity >= luminosity_from_mass(high) {
        return high;
    }

    for _ in 0..BISECTION_STEPS {
        let mid = 0.5 * (low + high);
        if luminosity_from_mass(mid) < luminosity {
            low = mid;
        } else {
            high = mid;
        }
        if high - low <= f64::EPSILON * high {
            break;
        }
    }

    0.5 * (low + high)
}
