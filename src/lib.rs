//! Pocketcalc: the state machine behind a four-function pocket calculator.
//!
//! The calculator is a small pure core driven by commands: digits, a decimal
//! point, operators, equals, clear, backspace, percent and the memory keys.
//! Every edge case that calculators disagree on (division by zero, the
//! percent key, editing a result) is an explicit, serde-loadable policy.
//!
//! # Core Concepts
//!
//! - **Phase**: Derived state of the machine via the `State` trait
//! - **Commands**: Typed inputs, translated from keys and buttons by `input`
//! - **Policies**: Validated configuration in `config`
//! - **Observer**: Optional feedback channel for the presentation layer
//!
//! # Example
//!
//! ```rust
//! use pocketcalc::{CalculatorBuilder, Command, Operator, Phase};
//! use pocketcalc::input::command_for_key;
//!
//! let mut calc = CalculatorBuilder::new().build().unwrap();
//!
//! for key in ["1", "2", "+", "3", "0", "Enter"] {
//!     if let Some(command) = command_for_key(key) {
//!         calc.apply(command).unwrap();
//!     }
//! }
//!
//! assert_eq!(calc.current_display_value(), "42");
//! assert_eq!(calc.phase(), Phase::JustCalculated);
//!
//! calc.apply(Command::Operator(Operator::Divide)).unwrap();
//! calc.input_digit(0).unwrap();
//! assert!(calc.calculate().is_err());
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod input;
pub mod memory;
pub mod observer;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use config::{CalculatorConfig, ConfigError};
pub use core::{CalcError, Calculator, Command, Operator, Phase, Snapshot};
pub use observer::CalculatorObserver;
