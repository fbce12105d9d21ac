use rand::distr::{Distribution as _, StandardUniform};
use rand::Rng;
use tracing::debug;

use crate::{
    catalogue::{Catalogue, Outcome},
    distribution::Distribution,
    error::RarityError,
    math::outcome_probabilities,
};

/// Draws single outcomes from a catalogue with luck applied, the same way a
/// live spin would.
#[derive(Debug, Clone)]
pub struct Spinner<'a> {
    catalogue: &'a Catalogue,
    luck_multiplier: f64,

    /// Running total of outcome probabilities, last entry is ~1.0.
    cumulative: Vec<f64>,
}

impl<'a> Spinner<'a> {
    pub fn new(catalogue: &'a Catalogue, luck_multiplier: f64) -> Result<Self, RarityError> {
        if !luck_multiplier.is_finite() {
            return Err(RarityError::InvalidLuckMultiplier(luck_multiplier));
        }

        let cumulative = outcome_probabilities(catalogue, luck_multiplier)
            .into_iter()
            .scan(0.0, |acc, p| {
                *acc += p;
                Some(*acc)
            })
            .collect();

        Ok(Self {
            catalogue,
            luck_multiplier,
            cumulative,
        })
    }

    /// Picks the outcome that a uniform roll `u` in [0, 1) lands on.
    /// Rolls past the final running total (rounding) land on the last outcome.
    pub fn pick(&self, u: f64) -> &'a Outcome {
        let outcomes = self.catalogue.outcomes();
        let index = self
            .cumulative
            .partition_point(|&edge| edge <= u)
            .min(outcomes.len() - 1);

        &outcomes[index]
    }

    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a Outcome {
        let u: f64 = StandardUniform.sample(rng);
        self.pick(u)
    }

    /// Spins `spins` times and returns how often each tier came up.
    pub fn simulate<R: Rng + ?Sized>(&self, rng: &mut R, spins: u64) -> Distribution {
        let mut counts = [0u64; 5];
        for _ in 0..spins {
            counts[self.spin(rng).rarity.index()] += 1;
        }

        debug!(spins, ?counts, "simulated spins");

        let total = spins.max(1) as f64;
        Distribution::from_probabilities(self.luck_multiplier, counts.map(|c| c as f64 / total))
    }
}
