use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{catalogue::Catalogue, error::RarityError, luck::LuckPolicy};

pub const DEFAULT_MULTIPLIERS: [f64; 15] = [
    1.0, 1.5, 2.0, 2.5, 3.0, 3.55, 4.0, 5.0, 6.0, 8.0, 10.0, 15.0, 20.0, 30.0, 50.0,
];

pub const DEFAULT_PLAYER_LUCK: [u32; 13] = [
    0, 100, 200, 300, 400, 500, 600, 800, 1000, 1500, 2000, 3000, 5000,
];

/// Everything the tables are built from. Any field left out of a config file
/// falls back to the stock value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub catalogue: Catalogue,

    /// Luck multipliers for the first table.
    pub multipliers: Vec<f64>,

    /// Player luck stats for the second table, run through `policy`.
    pub player_luck: Vec<u32>,

    pub policy: LuckPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalogue: Catalogue::default(),
            multipliers: DEFAULT_MULTIPLIERS.to_vec(),
            player_luck: DEFAULT_PLAYER_LUCK.to_vec(),
            policy: LuckPolicy::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Rarity(#[from] RarityError),
}

impl Config {
    /// Parses and validates a config. The catalogue validates itself while
    /// deserializing, the rest is checked here.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("loading config from {}", path.display());

        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), RarityError> {
        self.policy.validate()?;

        if let Some(&bad) = self.multipliers.iter().find(|m| !m.is_finite()) {
            return Err(RarityError::InvalidLuckMultiplier(bad));
        }

        Ok(())
    }

    /// The player luck sweep, paired with the multiplier each value maps to.
    pub fn player_multipliers(&self) -> Vec<(u32, f64)> {
        self.player_luck
            .iter()
            .map(|&luck| (luck, self.policy.multiplier(luck)))
            .collect()
    }
}
