/// Errors raised while building a catalogue or computing a distribution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RarityError {
    #[error("Catalogue must contain at least one outcome.")]
    EmptyCatalogue,

    #[error("Outcome {index} has invalid odds {odds}, odds must be finite and greater than 0.")]
    InvalidOdds { index: usize, odds: f64 },

    #[error("Luck multiplier must be finite, got {0}.")]
    InvalidLuckMultiplier(f64),

    #[error("Invalid luck policy: {0}")]
    InvalidPolicy(String),
}
