use luckchance::catalogue::{Catalogue, Outcome};
use luckchance::config::{Config, ConfigError};
use luckchance::error::RarityError;
use luckchance::luck::LuckPolicy;
use luckchance::rarity::Rarity;

// Helper function to create a valid outcome list for testing.
fn get_base_outcomes() -> Vec<Outcome> {
    vec![
        Outcome::new(2.0, Rarity::Common),
        Outcome::new(40.0, Rarity::Rare),
        Outcome::new(2_000.0, Rarity::Epic),
        Outcome::new(100_000.0, Rarity::Legendary),
        Outcome::new(5_000_000.0, Rarity::Mythic),
    ]
}

#[test]
fn test_base_outcomes_are_valid() {
    assert!(Catalogue::new(get_base_outcomes()).is_ok());
}

#[test]
fn test_empty_catalogue() {
    assert_eq!(Catalogue::new(vec![]), Err(RarityError::EmptyCatalogue));
}

#[test]
fn test_zero_odds() {
    let mut outcomes = get_base_outcomes();
    outcomes[2].odds = 0.0;

    assert_eq!(
        Catalogue::new(outcomes),
        Err(RarityError::InvalidOdds {
            index: 2,
            odds: 0.0
        })
    );
}

#[test]
fn test_negative_odds() {
    let mut outcomes = get_base_outcomes();
    outcomes[4].odds = -10.0;

    assert!(matches!(
        Catalogue::new(outcomes),
        Err(RarityError::InvalidOdds { index: 4, .. })
    ));
}

#[test]
fn test_non_finite_odds() {
    for odds in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let mut outcomes = get_base_outcomes();
        outcomes[0].odds = odds;

        assert!(matches!(
            Catalogue::new(outcomes),
            Err(RarityError::InvalidOdds { index: 0, .. })
        ));
    }
}

#[test]
fn test_first_bad_outcome_is_reported() {
    let mut outcomes = get_base_outcomes();
    outcomes[1].odds = 0.0;
    outcomes[3].odds = -1.0;

    assert!(matches!(
        Catalogue::new(outcomes),
        Err(RarityError::InvalidOdds { index: 1, .. })
    ));
}

#[test]
fn test_non_finite_luck_multiplier() {
    let catalogue = Catalogue::new(get_base_outcomes()).unwrap();

    assert!(matches!(
        catalogue.distribution(f64::NAN),
        Err(RarityError::InvalidLuckMultiplier(_))
    ));
    assert_eq!(
        catalogue.distribution(f64::NEG_INFINITY),
        Err(RarityError::InvalidLuckMultiplier(f64::NEG_INFINITY))
    );
}

#[test]
fn test_negative_luck_multiplier_is_unboosted() {
    let catalogue = Catalogue::new(get_base_outcomes()).unwrap();

    assert_eq!(
        catalogue.distribution(-2.0).unwrap().probabilities(),
        catalogue.distribution(1.0).unwrap().probabilities()
    );
}

#[test]
fn test_invalid_policy() {
    assert!(matches!(
        LuckPolicy::new(1.0, 0, 2.5),
        Err(RarityError::InvalidPolicy(_))
    ));
}

#[test]
fn test_invalid_config_json() {
    assert!(matches!(
        Config::from_json("not json"),
        Err(ConfigError::Json(_))
    ));
    assert!(matches!(
        Config::from_json(r#"{"catalogue": []}"#),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn test_missing_config_file() {
    assert!(matches!(
        Config::from_path("/nonexistent/luckchance.json"),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        RarityError::EmptyCatalogue.to_string(),
        "Catalogue must contain at least one outcome."
    );
    assert_eq!(
        RarityError::InvalidOdds {
            index: 3,
            odds: -1.0
        }
        .to_string(),
        "Outcome 3 has invalid odds -1, odds must be finite and greater than 0."
    );
}

#[test]
fn test_subnormal_odds_stay_finite() {
    let catalogue = Catalogue::new(vec![
        Outcome::new(1e-310, Rarity::Common),
        Outcome::new(4.0, Rarity::Rare),
    ])
    .unwrap();

    let dist = catalogue.distribution(1.0).unwrap();
    assert!(dist.probabilities().iter().all(|p| p.is_finite()));
    assert!((dist.get(Rarity::Common) - 1.0).abs() < 1e-9);
    assert!(dist.get(Rarity::Rare) >= 0.0);
}

#[test]
fn test_zero_luck_per_percent_in_config() {
    assert!(matches!(
        Config::from_json(r#"{"policy": {"luck_per_percent": 0}}"#),
        Err(ConfigError::Json(_))
    ));
}
