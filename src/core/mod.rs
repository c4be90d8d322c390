//! Core calculator types and logic.
//!
//! This module contains the calculator's pure core:
//! - Phases via the `State` trait
//! - Guard predicates for configurable command policies
//! - Bounded phase history
//! - Numerals, arithmetic resolution and display formatting
//! - The state machine itself
//!
//! Nothing here performs I/O. Logging goes through `tracing` and feedback
//! through the observer trait, both owned by the embedding application.

mod command;
mod display;
mod error;
mod evaluate;
mod guard;
mod history;
mod machine;
pub mod numeral;
mod state;

pub use command::{Command, Operator};
pub use display::format_for_display;
pub use error::CalcError;
pub use evaluate::Arithmetic;
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use machine::{Calculator, CalculatorState, Snapshot};
pub use state::{Phase, State};
