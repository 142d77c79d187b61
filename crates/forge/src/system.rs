//! A star system generated once from a configuration

use accrete::{AccretionEngine, Disk, RandomSource};
use planetary::Planet;
use serde::{Deserialize, Serialize};
use stellar::Star;
use tracing::info;

use crate::config::SystemConfig;
use crate::error::Error;
use crate::moons::generate_moons;

/// Whether a system holds results yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "state")]
pub enum GenerationState {
    Pending,
    Generated {
        star: Star,
        seed: u64,
        planets: Vec<Planet>,
    },
}

/// A planetary system
///
/// Built from a validated [`SystemConfig`], then generated exactly once.
/// Results are read through shared references only.
///
/// # Examples
/// ```
/// use forge::{Error, System, SystemConfig};
///
/// let mut system = System::new(SystemConfig::default().with_seed(24)).unwrap();
/// assert_eq!(system.planets().unwrap_err(), Error::NotGenerated("planets"));
///
/// system.generate().unwrap();
/// assert!(system.is_generated());
/// assert_eq!(system.seed().unwrap(), 24);
/// assert_eq!(system.generate(), Err(Error::AlreadyGenerated));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct System {
    config: SystemConfig,
    state: GenerationState,
}

impl System {
    /// Validate `config` and prepare a pending system
    pub fn new(config: SystemConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            config,
            state: GenerationState::Pending,
        })
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    /// Run accretion, classify the survivors, then grow their moons
    ///
    /// Moons are drawn only once every planet is final, so the planets of a
    /// seed are the same with and without moons, capture aside.
    pub fn generate(&mut self) -> Result<(), Error> {
        if self.is_generated() {
            return Err(Error::AlreadyGenerated);
        }

        let star = self.config.star.resolve();
        let mut rng = match self.config.seed {
            Some(seed) => RandomSource::seeded(seed),
            None => RandomSource::from_entropy(),
        };

        let accretion = &self.config.accretion;
        let disk = Disk::around_star(&star, accretion);
        let outcome = AccretionEngine::new(disk, accretion.clone())
            .with_captures(self.config.moons)
            .run(&mut rng);

        let mut planets: Vec<Planet> = outcome
            .bodies
            .iter()
            .map(|body| Planet::from_protoplanet(body, &star))
            .collect();

        if self.config.moons {
            planets = planets
                .into_iter()
                .zip(&outcome.bodies)
                .map(|(planet, body)| {
                    let moons = generate_moons(&planet, &body.captured, &star, accretion, &mut rng);
                    planet.with_moons(moons)
                })
                .collect();
        }

        let moons: usize = planets.iter().map(|planet| planet.moons().len()).sum();
        info!(
            seed = rng.seed(),
            planets = planets.len(),
            moons,
            injections = outcome.stats.injections,
            "system generated"
        );

        self.state = GenerationState::Generated {
            star,
            seed: rng.seed(),
            planets,
        };
        Ok(())
    }

    pub fn is_generated(&self) -> bool {
        matches!(self.state, GenerationState::Generated { .. })
    }

    pub fn star(&self) -> Result<&Star, Error> {
        match &self.state {
            GenerationState::Generated { star, .. } => Ok(star),
            GenerationState::Pending => Err(Error::NotGenerated("star")),
        }
    }

    /// Planets in ascending orbital order
    pub fn planets(&self) -> Result<&[Planet], Error> {
        match &self.state {
            GenerationState::Generated { planets, .. } => Ok(planets),
            GenerationState::Pending => Err(Error::NotGenerated("planets")),
        }
    }

    /// The `index`th planet from the star, if there are that many
    pub fn planet(&self, index: usize) -> Result<Option<&Planet>, Error> {
        match &self.state {
            GenerationState::Generated { planets, .. } => Ok(planets.get(index)),
            GenerationState::Pending => Err(Error::NotGenerated("planet")),
        }
    }

    /// The seed the run drew from, chosen from entropy when none was configured
    pub fn seed(&self) -> Result<u64, Error> {
        match &self.state {
            GenerationState::Generated { seed, .. } => Ok(*seed),
            GenerationState::Pending => Err(Error::NotGenerated("seed")),
        }
    }
}
