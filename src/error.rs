// src/error.rs

use thiserror::Error;

/// Result type alias using the crate's error.
pub type Result<T> = std::result::Result<T, CalcError>;

/// Errors raised by the calculators and their front-end.
///
/// Newton non-convergence is deliberately absent: it is an expected outcome
/// and is reported as `None` by the quintic solver.
#[derive(Error, Debug)]
pub enum CalcError {
    /// Leading coefficient is zero, so the equation has a lower degree.
    #[error("A cannot be equal to 0")]
    InvalidCoefficient,

    /// Sieve input exceeds the configured bound.
    #[error("{value} exceeds the sieve limit of {max}")]
    InputTooLarge { value: u64, max: u64 },

    /// Coefficient slice does not match the declared degree.
    #[error("expected {expected} coefficients, got {got}")]
    CoefficientCount { expected: usize, got: usize },

    /// Raw user input could not be parsed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
