//! Configuration violations and loading errors.

use thiserror::Error;

/// A single configuration rule that does not hold.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("precision {value} out of range (max {max})")]
    PrecisionOutOfRange { value: u32, max: u32 },

    #[error("max_input_length {value} out of range ({min}..={max})")]
    InputLengthOutOfRange { value: usize, min: usize, max: usize },

    #[error("display max_length {value} out of range ({min}..={max})")]
    DisplayLengthOutOfRange { value: usize, min: usize, max: usize },

    #[error("scientific_threshold must be finite and positive (got {value})")]
    InvalidScientificThreshold { value: f64 },

    #[error("scientific_digits {value} out of range (max {max})")]
    ScientificDigitsOutOfRange { value: usize, max: usize },

    #[error("{digits} scientific digits do not fit a {max_length}-character display")]
    ScientificWiderThanDisplay { digits: usize, max_length: usize },
}

/// Errors that can occur while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid configuration: {}", describe(.0))]
    Invalid(Vec<ConfigViolation>),
}

pub(crate) fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
