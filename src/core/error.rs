//! Errors surfaced by calculator commands.

use thiserror::Error;

/// Recoverable conditions a command can report.
///
/// A command that returns one of these leaves the calculator state exactly
/// as it was before the command.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid digit {0}: expected 0-9")]
    InvalidDigit(u8),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result is not a finite number")]
    NonFiniteResult,
}
