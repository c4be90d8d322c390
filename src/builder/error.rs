//! Build errors for the calculator builder.

use crate::config::violations::describe;
use crate::config::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid configuration: {}", describe(.0))]
    InvalidConfig(Vec<ConfigViolation>),
}
