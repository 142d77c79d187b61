//! Detecting orbital contact between bodies and combining them
//!
//! Two bodies are in contact when their periapsis-apoapsis ranges intersect,
//! or when either body's gravitational reach covers the other's orbit. The
//! caller resolves contacts one at a time, nearest orbit first, and re-tests
//! the merged product against the remaining bodies.

use units::EARTH_MASSES_PER_SOLAR_MASS;

use crate::protoplanet::{CapturedBody, Protoplanet};

/// Smallest body a captor will take as a moon, in Earth masses
const MIN_CAPTURE_EARTH_MASSES: f64 = 1.0e-4;

/// Largest body a captor will take as a moon, in Earth masses
const MAX_CAPTURE_EARTH_MASSES: f64 = 2.5;

/// Captured material may not exceed this share of the captor's mass
const MAX_CAPTURED_FRACTION: f64 = 0.05;

/// An existing body the candidate is in contact with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub index: usize,
    pub separation: f64,
}

/// Whether `candidate` and `existing` are close enough to interact
pub fn in_contact(candidate: &Protoplanet, existing: &Protoplanet, central_mass: f64) -> bool {
    if candidate.zone().intersects(&existing.zone()) {
        return true;
    }

    let candidate_reach = candidate.gravitational_zone(central_mass);
    let existing_reach = existing.gravitational_zone(central_mass);
    candidate_reach.contains(existing.orbital_radius)
        || existing_reach.contains(candidate.orbital_radius)
}

/// The body nearest in semi-major axis that `candidate` is in contact with
///
/// Ties go to the lower index, which is the inner body since the list is
/// kept sorted.
pub fn find_contact(
    candidate: &Protoplanet,
    bodies: &[Protoplanet],
    central_mass: f64,
) -> Option<Contact> {
    bodies
        .iter()
        .enumerate()
        .filter(|(_, existing)| in_contact(candidate, existing, central_mass))
        .map(|(index, existing)| Contact {
            index,
            separation: (existing.orbital_radius - candidate.orbital_radius).abs(),
        })
        .fold(None, |nearest: Option<Contact>, contact| match nearest {
            Some(best) if best.separation <= contact.separation => Some(best),
            _ => Some(contact),
        })
}

/// Combine two bodies into one, conserving mass and angular momentum
///
/// The new semi-major axis is the mass-weighted harmonic mean. The new
/// eccentricity follows from the summed orbital angular momentum
/// m·√(a(1 − e²)); a result outside [0, 1) falls back to a circular orbit.
/// Captured material of both bodies carries over. The caller refreshes the
/// critical mass and gas giant flag once the product has regrown.
pub fn merge(first: &Protoplanet, second: &Protoplanet) -> Protoplanet {
    let mass = first.mass + second.mass;
    let a = mass / (first.mass / first.orbital_radius + second.mass / second.orbital_radius);

    let momentum = |body: &Protoplanet| {
        body.mass * body.orbital_radius.sqrt() * (1.0 - body.eccentricity.powi(2)).sqrt()
    };
    let ratio = (momentum(first) + momentum(second)) / (mass * a.sqrt());
    let squared = 1.0 - ratio.powi(2);
    let eccentricity = if squared.is_finite() && squared > 0.0 && squared < 1.0 {
        squared.sqrt()
    } else {
        0.0
    };

    let mut captured = first.captured.clone();
    captured.extend(second.captured.iter().cloned());

    Protoplanet {
        orbital_radius: a,
        eccentricity,
        mass,
        dust_mass: first.dust_mass + second.dust_mass,
        gas_mass: first.gas_mass + second.gas_mass,
        critical_mass: first.critical_mass.max(second.critical_mass),
        is_gas_giant: first.is_gas_giant || second.is_gas_giant,
        captured,
    }
}

/// Whether `captor` can take `candidate` whole as a moon instead of merging
///
/// The candidate must be rocky (below its critical mass), lie between 1e-4
/// and 2.5 Earth masses, and the captor's existing catch must stay under 5%
/// of its own mass.
pub fn qualifies_for_capture(candidate: &Protoplanet, captor: &Protoplanet) -> bool {
    let earth_masses = candidate.mass * EARTH_MASSES_PER_SOLAR_MASS;
    candidate.mass < candidate.critical_mass
        && earth_masses > MIN_CAPTURE_EARTH_MASSES
        && earth_masses < MAX_CAPTURE_EARTH_MASSES
        && captor.captured_mass() < MAX_CAPTURED_FRACTION * captor.mass
}

/// Attach `candidate` to `captor` as captured material
///
/// When the candidate outweighs the captor the two swap composition: the
/// heavier material stays on the orbit and the lighter is captured. The
/// captor's giant flag then follows its new mass against the critical mass
/// of its unchanged orbit.
pub fn capture(captor: &mut Protoplanet, candidate: Protoplanet) {
    let mut moon = CapturedBody {
        mass: candidate.mass,
        dust_mass: candidate.dust_mass,
        gas_mass: candidate.gas_mass,
    };

    if moon.mass > captor.mass {
        std::mem::swap(&mut moon.mass, &mut captor.mass);
        std::mem::swap(&mut moon.dust_mass, &mut captor.dust_mass);
        std::mem::swap(&mut moon.gas_mass, &mut captor.gas_mass);
        captor.is_gas_giant = captor.mass >= captor.critical_mass;
    }

    captor.captured.push(moon);
    captor.captured.extend(candidate.captured);
}
