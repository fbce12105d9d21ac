use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::{error::RarityError, math::luck_to_percent};

/// Turns a player's luck stat into the multiplier fed to the calculator:
///
/// `base + floor(luck / luck_per_percent) / 100 + crate_bonus`
///
/// The default is the "Case 7" crate, which adds a flat 2.5 on top.
/// `luck_per_percent` can't be zero, so every policy maps every luck value.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct LuckPolicy {
    pub base: f64,
    pub luck_per_percent: NonZeroU32,
    pub crate_bonus: f64,
}

const DEFAULT_LUCK_PER_PERCENT: NonZeroU32 = match NonZeroU32::new(20) {
    Some(n) => n,
    None => unreachable!(),
};

impl Default for LuckPolicy {
    fn default() -> Self {
        Self {
            base: 1.0,
            luck_per_percent: DEFAULT_LUCK_PER_PERCENT,
            crate_bonus: 2.5,
        }
    }
}

impl LuckPolicy {
    pub fn new(base: f64, luck_per_percent: u32, crate_bonus: f64) -> Result<Self, RarityError> {
        let luck_per_percent = NonZeroU32::new(luck_per_percent).ok_or_else(|| {
            RarityError::InvalidPolicy("luck_per_percent must be greater than 0".to_string())
        })?;

        let policy = Self {
            base,
            luck_per_percent,
            crate_bonus,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// No crate bonus, only the player's own luck.
    pub fn without_crate() -> Self {
        Self {
            crate_bonus: 0.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), RarityError> {
        if !self.base.is_finite() || !self.crate_bonus.is_finite() {
            return Err(RarityError::InvalidPolicy(format!(
                "base and crate_bonus must be finite, got {} and {}",
                self.base, self.crate_bonus
            )));
        }

        Ok(())
    }

    /// ```
    /// use luckchance::luck::LuckPolicy;
    /// let policy = LuckPolicy::default();
    /// assert_eq!(policy.multiplier(0), 3.5);
    /// assert_eq!(policy.multiplier(2000), 4.5);
    /// ```
    pub fn multiplier(&self, luck: u32) -> f64 {
        self.base + luck_to_percent(luck, self.luck_per_percent) + self.crate_bonus
    }
}
