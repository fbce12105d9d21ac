use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::RarityError, rarity::Rarity};

/// The stock catalogue, as (odds, rarity) pairs.
pub const DEFAULT_OUTCOMES: [(f64, Rarity); 23] = [
    (2.0, Rarity::Common),
    (5.0, Rarity::Common),
    (7.0, Rarity::Common),
    (12.0, Rarity::Common),
    (20.0, Rarity::Common),
    (22.0, Rarity::Common),
    (40.0, Rarity::Rare),
    (50.0, Rarity::Rare),
    (100.0, Rarity::Rare),
    (200.0, Rarity::Rare),
    (500.0, Rarity::Rare),
    (1_000.0, Rarity::Rare),
    (2_000.0, Rarity::Epic),
    (5_000.0, Rarity::Epic),
    (8_500.0, Rarity::Epic),
    (13_000.0, Rarity::Epic),
    (23_000.0, Rarity::Epic),
    (36_000.0, Rarity::Epic),
    (100_000.0, Rarity::Legendary),
    (500_000.0, Rarity::Legendary),
    (1_000_000.0, Rarity::Legendary),
    (5_000_000.0, Rarity::Mythic),
    (10_000_000.0, Rarity::Mythic),
];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// "1 in N" denominator. Larger is rarer.
    pub odds: f64,

    pub rarity: Rarity,
}

impl Outcome {
    pub fn new(odds: f64, rarity: Rarity) -> Self {
        Self { odds, rarity }
    }
}

/// An ordered, non-empty list of outcomes whose odds are all finite and positive.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "Vec<Outcome>", into = "Vec<Outcome>")]
pub struct Catalogue {
    outcomes: Vec<Outcome>,
}

impl Catalogue {
    pub fn new(outcomes: Vec<Outcome>) -> Result<Self, RarityError> {
        if outcomes.is_empty() {
            return Err(RarityError::EmptyCatalogue);
        }

        if let Some((index, outcome)) = outcomes
            .iter()
            .enumerate()
            .find(|(_, o)| !o.odds.is_finite() || o.odds <= 0.0)
        {
            return Err(RarityError::InvalidOdds {
                index,
                odds: outcome.odds,
            });
        }

        debug!(outcomes = outcomes.len(), "built catalogue");

        Ok(Self { outcomes })
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Always false, a catalogue can't be built empty.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Every outcome of the given tier, in catalogue order.
    pub fn of_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(move |o| o.rarity == rarity)
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self {
            outcomes: DEFAULT_OUTCOMES
                .iter()
                .map(|&(odds, rarity)| Outcome::new(odds, rarity))
                .collect(),
        }
    }
}

impl TryFrom<Vec<Outcome>> for Catalogue {
    type Error = RarityError;

    fn try_from(outcomes: Vec<Outcome>) -> Result<Self, Self::Error> {
        Self::new(outcomes)
    }
}

impl From<Catalogue> for Vec<Outcome> {
    fn from(catalogue: Catalogue) -> Self {
        catalogue.outcomes
    }
}
