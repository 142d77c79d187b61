//! Seeded random stream shared by every stochastic step of a run

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::constants::MAX_ECCENTRICITY;

/// Deterministic source of uniform draws
///
/// One source belongs to exactly one generation run and is passed down by
/// `&mut`; two runs must never draw from the same source. The type is
/// deliberately not `Clone`.
///
/// # Examples
/// ```
/// use accrete::RandomSource;
///
/// let mut a = RandomSource::seeded(24);
/// let mut b = RandomSource::seeded(24);
/// assert_eq!(a.next_uniform(), b.next_uniform());
/// ```
#[derive(Debug)]
pub struct RandomSource {
    rng: ChaChaRng,
    seed: u64,
}

impl RandomSource {
    /// A reproducible stream for the given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaChaRng::seed_from_u64(seed),
            seed,
        }
    }

    /// An unreproducible stream seeded from thread-local entropy
    ///
    /// The chosen seed is kept, so the run can still be replayed afterwards
    /// through [`RandomSource::seed`].
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    /// The seed this stream was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in [0, 1)
    pub fn next_uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform draw in [low, high)
    pub fn uniform_range(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_uniform()
    }

    /// Orbital eccentricity e = 1 − u^coefficient, capped at 0.99
    ///
    /// Small coefficients concentrate draws near circular orbits; the disk
    /// default of 0.077 gives a median of about 0.05.
    pub fn eccentricity(&mut self, coefficient: f64) -> f64 {
        let e = 1.0 - self.next_uniform().powf(coefficient);
        e.clamp(0.0, MAX_ECCENTRICITY)
    }

    /// Injection orbit within [inner, outer], weighted toward the ecosphere
    ///
    /// With probability `ecosphere_weight` the orbit comes from a logistic
    /// distribution in ln(r) centred on the ecosphere with scale `spread`,
    /// truncated to the bounds by inverse-CDF sampling. Otherwise it is
    /// uniform across the bounds. Always consumes exactly two draws.
    pub fn orbital_radius(
        &mut self,
        inner: f64,
        outer: f64,
        ecosphere: f64,
        ecosphere_weight: f64,
        spread: f64,
    ) -> f64 {
        let pick = self.next_uniform();
        let u = self.next_uniform();

        if !(outer > inner) {
            return inner;
        }

        if pick >= ecosphere_weight || !(ecosphere > 0.0) || !(inner > 0.0) || !(spread > 0.0) {
            return inner + (outer - inner) * u;
        }

        let centre = ecosphere.ln();
        let cdf = |x: f64| 1.0 / (1.0 + (-(x - centre) / spread).exp());
        let low = cdf(inner.ln());
        let high = cdf(outer.ln());
        let p = low + (high - low) * u;

        if !(p > 0.0 && p < 1.0) {
            return inner + (outer - inner) * u;
        }

        let log_radius = centre + spread * (p / (1.0 - p)).ln();
        log_radius.exp().clamp(inner, outer)
    }
}
