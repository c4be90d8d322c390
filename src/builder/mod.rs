//! Fluent construction of calculators.
//!
//! The builder starts from the default configuration, lets each policy be
//! overridden, and validates the result once in `build()`.
//!
//! # Example
//!
//! ```rust
//! use pocketcalc::builder::CalculatorBuilder;
//! use pocketcalc::config::{DivisionByZeroPolicy, PercentPolicy};
//!
//! let calc = CalculatorBuilder::new()
//!     .division_by_zero(DivisionByZeroPolicy::Zero)
//!     .percent(PercentPolicy::Simple)
//!     .grouping(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(calc.config().division_by_zero, DivisionByZeroPolicy::Zero);
//! ```

pub mod error;

pub use error::BuildError;

use crate::config::{
    validate, BackspacePolicy, CalculatorConfig, DisplayConfig, DivisionByZeroPolicy,
    PercentPolicy,
};
use crate::core::Calculator;
use crate::observer::CalculatorObserver;
use stillwater::Validation;

/// Builder for constructing calculators with a fluent API.
#[derive(Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
    observer: Option<Box<dyn CalculatorObserver>>,
}

impl CalculatorBuilder {
    /// Create a builder holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn division_by_zero(mut self, policy: DivisionByZeroPolicy) -> Self {
        self.config.division_by_zero = policy;
        self
    }

    pub fn percent(mut self, policy: PercentPolicy) -> Self {
        self.config.percent = policy;
        self
    }

    pub fn backspace(mut self, policy: BackspacePolicy) -> Self {
        self.config.backspace = policy;
        self
    }

    /// Decimal places results are rounded to.
    pub fn precision(mut self, places: u32) -> Self {
        self.config.precision = places;
        self
    }

    pub fn max_input_length(mut self, length: usize) -> Self {
        self.config.max_input_length = length;
        self
    }

    pub fn display(mut self, display: DisplayConfig) -> Self {
        self.config.display = display;
        self
    }

    /// Toggle `,` thousands separators on integer displays.
    pub fn grouping(mut self, enabled: bool) -> Self {
        self.config.display.grouping = enabled;
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Attach an observer notified after every command.
    pub fn observer<O>(mut self, observer: O) -> Self
    where
        O: CalculatorObserver + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Build the calculator.
    /// Returns every configuration violation if the configuration is invalid.
    pub fn build(self) -> Result<Calculator, BuildError> {
        match validate(&self.config) {
            Validation::Success(()) => Ok(Calculator::from_parts(self.config, self.observer)),
            Validation::Failure(violations) => {
                Err(BuildError::InvalidConfig(violations.into_vec()))
            }
        }
    }
}
