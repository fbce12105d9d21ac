use serde::Serialize;
use tracing::debug;

use crate::{
    catalogue::Catalogue,
    error::RarityError,
    math::outcome_probabilities,
    rarity::{Rarity, RarityFlags},
};

/// Probability of landing in each rarity tier under one luck multiplier.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Distribution {
    /// The multiplier this was computed with.
    pub luck_multiplier: f64,

    /// Indexed by `Rarity::index()`. Sums to 1.
    probabilities: [f64; 5],
}

impl Distribution {
    /// Weights every outcome, then sums each tier's share of the total weight.
    /// Any finite multiplier gives finite probabilities, however large.
    pub fn new(catalogue: &Catalogue, luck_multiplier: f64) -> Result<Self, RarityError> {
        if !luck_multiplier.is_finite() {
            return Err(RarityError::InvalidLuckMultiplier(luck_multiplier));
        }

        let mut probabilities = [0.0; 5];
        for (outcome, p) in catalogue
            .outcomes()
            .iter()
            .zip(outcome_probabilities(catalogue, luck_multiplier))
        {
            probabilities[outcome.rarity.index()] += p;
        }

        debug!(luck_multiplier, ?probabilities, "computed distribution");

        Ok(Self {
            luck_multiplier,
            probabilities,
        })
    }

    /// Builds a distribution straight from per-tier probabilities.
    /// Used for empirical results, where nothing was weighted.
    pub(crate) fn from_probabilities(luck_multiplier: f64, probabilities: [f64; 5]) -> Self {
        Self {
            luck_multiplier,
            probabilities,
        }
    }

    #[inline]
    pub fn get(&self, rarity: Rarity) -> f64 {
        self.probabilities[rarity.index()]
    }

    /// Summed probability of every tier in `flags`.
    pub fn probability_of(&self, flags: RarityFlags) -> f64 {
        flags.rarities().map(|rarity| self.get(rarity)).sum()
    }

    /// Probability of landing on `rarity` or anything rarer.
    pub fn or_better(&self, rarity: Rarity) -> f64 {
        self.probability_of(rarity.or_better())
    }

    /// The rarest tier the distribution can actually land on.
    pub fn rarest_possible(&self) -> Option<Rarity> {
        Rarity::ALL
            .into_iter()
            .rev()
            .find(|&rarity| self.get(rarity) > 0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rarity, f64)> + '_ {
        Rarity::ALL
            .into_iter()
            .map(|rarity| (rarity, self.get(rarity)))
    }

    pub fn probabilities(&self) -> &[f64; 5] {
        &self.probabilities
    }
}

impl Catalogue {
    /// Shorthand for `Distribution::new(self, luck_multiplier)`.
    pub fn distribution(&self, luck_multiplier: f64) -> Result<Distribution, RarityError> {
        Distribution::new(self, luck_multiplier)
    }
}
