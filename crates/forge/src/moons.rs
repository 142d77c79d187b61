//! Moon systems around finished planets
//!
//! Each planet gets an accretion disk of its own, run through the same
//! engine as the stellar disk but in normalized units: the planet is the unit
//! of mass, and lengths are scaled so the outermost injection orbit sits at
//! half the planet's Hill radius. The inner edge is the Roche limit, inside
//! which no moon survives tides.
//!
//! Bodies the planet captured during accretion are placed afterwards at a
//! random orbit within the stable zone.

use accrete::{AccretionConfig, AccretionEngine, CapturedBody, Disk, RandomSource};
use planetary::{BodyInputs, Moon, MoonOrigin, Planet};
use stellar::Star;
use tracing::{debug, trace};
use units::{Length, Mass};

// ============================================================================
// Constants
// ============================================================================

/// Planets lighter than this many Earth masses get no moons
pub const MIN_PARENT_EARTH_MASSES: f64 = 1.0e-3;

/// Outermost injection orbit of the normalized disk
pub const NORMALIZED_OUTER_LIMIT: f64 = 50.0;

/// Share of the Hill sphere where prograde moon orbits stay stable
pub const STABLE_HILL_FRACTION: f64 = 0.5;

/// Assumed bulk density of a moon in g/cm³ (rock and ice)
pub const MOON_DENSITY: f64 = 2.5;

/// Captured bodies settle no closer than this many Roche limits
pub const CAPTURE_ROCHE_FACTOR: f64 = 1.5;

// ============================================================================
// Orbital limits
// ============================================================================

/// Hill radius: a·(m_p / 3M_☉)^(1/3)
///
/// # Examples
/// ```
/// use forge::moons::hill_radius;
/// use units::{Length, Mass};
///
/// // Earth's Hill sphere reaches about 0.01 AU
/// let hill = hill_radius(
///     Length::from_au(1.0),
///     Mass::from_earth_masses(1.0),
///     Mass::from_solar_masses(1.0),
/// );
/// assert!((hill.to_au() - 0.01).abs() < 0.001);
/// ```
pub fn hill_radius(orbital_radius: Length, planet_mass: Mass, stellar_mass: Mass) -> Length {
    orbital_radius * (planet_mass / (stellar_mass * 3.0)).cbrt()
}

/// Fluid Roche limit: 2.44·R_p·(ρ_p/ρ_m)^(1/3)
///
/// Densities in g/cm³.
pub fn roche_limit(planet_radius: Length, planet_density: f64, moon_density: f64) -> Length {
    planet_radius * (2.44 * (planet_density / moon_density).cbrt())
}

/// The band around a planet where moons can orbit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonZone {
    pub roche_limit: Length,
    pub hill_radius: Length,
}

impl MoonZone {
    pub fn around(planet: &Planet, star: &Star) -> Self {
        Self {
            roche_limit: roche_limit(
                planet.radius(),
                planet.environment.density,
                MOON_DENSITY,
            ),
            hill_radius: hill_radius(planet.orbital_radius, planet.mass, star.mass),
        }
    }

    /// Outermost stable moon orbit
    pub fn stable_limit(&self) -> Length {
        self.hill_radius * STABLE_HILL_FRACTION
    }

    /// Length of one normalized disk unit
    pub fn length_unit(&self) -> Length {
        self.stable_limit() / NORMALIZED_OUTER_LIMIT
    }

    /// Range captured bodies are placed in, if the zone leaves any room
    pub fn capture_range(&self) -> Option<(Length, Length)> {
        let inner = self.roche_limit * CAPTURE_ROCHE_FACTOR;
        let outer = self.stable_limit();
        (outer.to_au() > inner.to_au()).then_some((inner, outer))
    }
}

/// The normalized circumplanetary disk of `planet`
///
/// Dust is scaled by the planet's own dust fraction and there is no gas.
/// A zone whose Roche limit lies past the stable limit gives a degenerate
/// disk, which accretes nothing.
pub fn circumplanetary_disk(planet: &Planet, zone: &MoonZone, config: &AccretionConfig) -> Disk {
    let dust_fraction = if planet.mass.is_positive() {
        planet.dust_mass / planet.mass
    } else {
        0.0
    };
    let unit = zone.length_unit();

    Disk {
        central_mass: 1.0,
        central_luminosity: 0.0,
        ecosphere_radius: 0.0,
        dust_inner: 0.0,
        dust_outer: NORMALIZED_OUTER_LIMIT,
        planet_inner: zone.roche_limit / unit,
        planet_outer: NORMALIZED_OUTER_LIMIT,
        dust_density_coeff: config.dust_density_coeff * dust_fraction,
        gas: false,
    }
}

/// Accretion parameters of the moon disk: uniform injection, no gas
fn moon_config(config: &AccretionConfig) -> AccretionConfig {
    AccretionConfig {
        ecosphere_weight: 0.0,
        gas_accretion: false,
        inner_dust_limit: None,
        outer_planet_limit: None,
        ..config.clone()
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Grow the moons of `planet` and place its captured bodies
///
/// Draws from `rng` only when the planet is heavy enough to hold moons.
/// Accreted moons are drawn first, then one orbit and one eccentricity per
/// captured body. The result is sorted by orbit.
pub fn generate_moons(
    planet: &Planet,
    captured: &[CapturedBody],
    star: &Star,
    config: &AccretionConfig,
    rng: &mut RandomSource,
) -> Vec<Moon> {
    if planet.mass.to_earth_masses() < MIN_PARENT_EARTH_MASSES {
        return Vec::new();
    }

    let zone = MoonZone::around(planet, star);
    let disk = circumplanetary_disk(planet, &zone, config);
    let unit = zone.length_unit();
    let parent = planet.body_inputs();

    let outcome = AccretionEngine::new(disk, moon_config(config)).run(rng);

    let mut moons: Vec<Moon> = outcome
        .bodies
        .iter()
        .map(|body| {
            let inputs = BodyInputs {
                mass: planet.mass * body.mass,
                dust_mass: planet.mass * body.dust_mass,
                gas_mass: planet.mass * body.gas_mass,
                is_gas_giant: false,
                ..parent
            };
            Moon::new(
                inputs,
                unit * body.orbital_radius,
                body.eccentricity,
                MoonOrigin::Accreted,
                star,
            )
        })
        .collect();
    let accreted = moons.len();

    for body in captured {
        let Some((inner, outer)) = zone.capture_range() else {
            trace!(
                planet = planet.orbital_radius.to_au(),
                mass = body.mass,
                "no room for captured body"
            );
            continue;
        };
        let radius = rng.uniform_range(inner.to_au(), outer.to_au());
        let eccentricity = rng.eccentricity(config.eccentricity_coeff);

        let inputs = BodyInputs {
            mass: Mass::from_solar_masses(body.mass),
            dust_mass: Mass::from_solar_masses(body.dust_mass),
            gas_mass: Mass::from_solar_masses(body.gas_mass),
            is_gas_giant: false,
            ..parent
        };
        moons.push(Moon::new(
            inputs,
            Length::from_au(radius),
            eccentricity,
            MoonOrigin::Captured,
            star,
        ));
    }

    debug!(
        planet = planet.orbital_radius.to_au(),
        accreted,
        captured = moons.len() - accreted,
        "moons generated"
    );

    moons.sort_by(|a, b| a.orbital_radius.to_au().total_cmp(&b.orbital_radius.to_au()));
    moons
}
