//! Generate one system and print a summary
//!
//! Usage: cargo run -p forge --example generate_system -- [seed] [stellar mass]
//!
//! Set RUST_LOG=forge=info,accrete=debug to watch the run.

use forge::{System, SystemConfig};
use stellar::StarConfig;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().map(|s| s.parse::<u64>()).transpose()?.unwrap_or(24);
    let mass = args.next().map(|s| s.parse::<f64>()).transpose()?.unwrap_or(1.0);

    let config = SystemConfig::new(StarConfig::with_mass(mass)?)
        .with_seed(seed)
        .with_moons(true);
    let mut system = System::new(config)?;
    system.generate()?;

    let star = system.star()?;
    println!(
        "Star: {:.3} M☉, {:.3} L☉, ecosphere {:.3} AU, seed {}",
        star.mass.to_solar_masses(),
        star.luminosity,
        star.ecosphere_radius.to_au(),
        system.seed()?
    );

    for (i, planet) in system.planets()?.iter().enumerate() {
        let env = &planet.environment;
        println!(
            "{:>2}  {:>8.3} AU  e={:.3}  {:>10.3} M⊕  {:>8.0} km  {:>6.1} K  {:<14} {}{}",
            i + 1,
            planet.orbital_radius.to_au(),
            planet.eccentricity,
            planet.mass.to_earth_masses(),
            env.radius.to_km(),
            env.surface_temperature.to_kelvin(),
            planet.planet_type().to_string(),
            env.atmosphere,
            if env.habitable { "  (habitable)" } else { "" },
        );
        for moon in planet.moons() {
            println!(
                "      moon {:>10.0} km  {:>10.5} M⊕  {:<14} {}",
                moon.orbital_radius.to_km(),
                moon.mass.to_earth_masses(),
                moon.environment.planet_type.to_string(),
                moon.origin,
            );
        }
    }

    Ok(())
}
