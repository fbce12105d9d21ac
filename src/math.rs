use std::num::NonZeroU32;

use crate::catalogue::Catalogue;

/// Odds at which the rarity factor tops out at 1.
/// The rarest stock outcome sits exactly here.
pub const MAX_ODDS: f64 = 1e7;

/// Where an outcome sits between "1 in 1" (0.0) and "1 in MAX_ODDS" (1.0), log-scaled.
/// ```
/// use luckchance::math::rarity_factor;
/// assert_eq!(rarity_factor(1.0), 0.0);
/// assert_eq!(rarity_factor(0.5), 0.0);
/// assert_eq!(rarity_factor(1e7), 1.0);
/// assert_eq!(rarity_factor(1e9), 1.0);
/// assert!((rarity_factor(1e3) - 3.0 / 7.0).abs() < 1e-12);
/// ```
#[inline]
pub fn rarity_factor(odds: f64) -> f64 {
    (odds.max(1.0).ln() / MAX_ODDS.ln()).clamp(0.0, 1.0)
}

/// The unnormalized weight of a "1 in `odds`" outcome under `luck_multiplier`.
///
/// Without luck the weight is `1 / odds`. Above a multiplier of 1 it gets scaled by
/// `L^(1 + rf)`, so common outcomes are boosted by about `L` and the rarest by about `L^2`.
/// At or below 1 the boost is skipped entirely.
///
/// `odds` must be positive, this doesn't check.
/// ```
/// use luckchance::math::weight;
/// assert_eq!(weight(4.0, 1.0), 0.25);
/// assert_eq!(weight(4.0, 0.0), 0.25);
/// assert_eq!(weight(1.0, 2.0), 2.0);
/// assert!((weight(1e7, 2.0) - 4e-7).abs() < 1e-18);
/// ```
#[inline]
pub fn weight(odds: f64, luck_multiplier: f64) -> f64 {
    let base = 1.0 / odds;

    if luck_multiplier > 1.0 {
        base * luck_multiplier.powf(1.0 + rarity_factor(odds))
    } else {
        base
    }
}

/// Weights for every outcome of the catalogue, in catalogue order.
pub fn outcome_weights(catalogue: &Catalogue, luck_multiplier: f64) -> Vec<f64> {
    catalogue
        .outcomes()
        .iter()
        .map(|outcome| weight(outcome.odds, luck_multiplier))
        .collect()
}

/// `ln(weight(odds, luck_multiplier))`, finite for any finite positive `odds`
/// and finite multiplier, even where `weight` itself over- or underflows.
/// ```
/// use luckchance::math::{log_weight, weight};
/// assert_eq!(log_weight(1.0, 1.0), 0.0);
/// assert!((log_weight(1e7, 3.0) - weight(1e7, 3.0).ln()).abs() < 1e-12);
/// assert!(log_weight(1e-310, 1.0).is_finite());
/// assert!(log_weight(1e7, 1e300).is_finite());
/// ```
#[inline]
pub fn log_weight(odds: f64, luck_multiplier: f64) -> f64 {
    let base = -odds.ln();

    if luck_multiplier > 1.0 {
        base + (1.0 + rarity_factor(odds)) * luck_multiplier.ln()
    } else {
        base
    }
}

/// Per-outcome probabilities, i.e. the weights divided by their total.
///
/// Normalized in log space against the heaviest outcome, so the largest term
/// is exactly 1 and the total can neither overflow nor vanish.
pub fn outcome_probabilities(catalogue: &Catalogue, luck_multiplier: f64) -> Vec<f64> {
    let log_weights: Vec<f64> = catalogue
        .outcomes()
        .iter()
        .map(|outcome| log_weight(outcome.odds, luck_multiplier))
        .collect();
    let max = log_weights
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    let scaled: Vec<f64> = log_weights.iter().map(|lw| (lw - max).exp()).collect();
    let total: f64 = scaled.iter().sum();

    scaled.into_iter().map(|w| w / total).collect()
}

/// Maps a player's luck stat into a bonus percentage, as a fraction.
/// Every `luck_per_percent` points of luck is worth one percent.
/// ```
/// use luckchance::math::luck_to_percent;
/// use std::num::NonZeroU32;
/// let step = NonZeroU32::new(20).unwrap();
/// assert_eq!(luck_to_percent(0, step), 0.0);
/// assert_eq!(luck_to_percent(19, step), 0.0);
/// assert_eq!(luck_to_percent(2000, step), 1.0);
/// assert_eq!(luck_to_percent(150, step), 0.07);
/// ```
#[inline]
pub fn luck_to_percent(luck: u32, luck_per_percent: NonZeroU32) -> f64 {
    (luck / luck_per_percent) as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Outcome;
    use crate::rarity::Rarity;

    #[test]
    fn test_rarity_factor_is_monotonic() {
        let factors: Vec<f64> = [1.0, 2.0, 40.0, 2_000.0, 100_000.0, 5_000_000.0, 1e7]
            .iter()
            .map(|&odds| rarity_factor(odds))
            .collect();

        assert!(factors.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_boost_grows_with_rarity() {
        let common_boost = weight(2.0, 3.0) / weight(2.0, 1.0);
        let mythic_boost = weight(1e7, 3.0) / weight(1e7, 1.0);

        assert!(mythic_boost > common_boost);
        assert!((mythic_boost - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_boost_at_or_below_one() {
        for odds in [1.0, 7.0, 36_000.0, 1e7] {
            assert_eq!(weight(odds, 1.0), 1.0 / odds);
            assert_eq!(weight(odds, 0.5), 1.0 / odds);
            assert_eq!(weight(odds, 0.0), 1.0 / odds);
            assert_eq!(weight(odds, -3.0), 1.0 / odds);
        }
    }

    #[test]
    fn test_outcome_probabilities_sum_to_one() {
        let catalogue = Catalogue::default();
        for luck_multiplier in [1.0, 3.55, 50.0] {
            let total: f64 = outcome_probabilities(&catalogue, luck_multiplier).iter().sum();
            assert!((total - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_log_weight_matches_weight() {
        for odds in [0.5, 2.0, 40.0, 36_000.0, 1e7, 1e9] {
            for luck_multiplier in [0.0, 1.0, 1.5, 3.55, 50.0] {
                let expected = weight(odds, luck_multiplier).ln();
                assert!((log_weight(odds, luck_multiplier) - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_outcome_probabilities_survive_huge_multiplier() {
        let probabilities = outcome_probabilities(&Catalogue::default(), f64::MAX);

        assert!(probabilities.iter().all(|p| p.is_finite() && *p >= 0.0));
        let total: f64 = probabilities.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_outcome_weights_order() {
        let catalogue = Catalogue::new(vec![
            Outcome::new(2.0, Rarity::Common),
            Outcome::new(4.0, Rarity::Rare),
        ])
        .unwrap();

        assert_eq!(outcome_weights(&catalogue, 1.0), vec![0.5, 0.25]);
    }
}
