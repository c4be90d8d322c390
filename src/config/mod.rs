//! Calculator configuration.
//!
//! Calculators disagree on a handful of edge cases. Each one is an explicit
//! policy here, and the default is the behaviour documented on the policy
//! enum.
//!
//! Configurations are plain serde values. Missing JSON fields take their
//! defaults, and every configuration is validated before use with all
//! violations reported at once.
//!
//! # Example
//!
//! ```rust
//! use pocketcalc::config::{CalculatorConfig, DivisionByZeroPolicy};
//!
//! let config = CalculatorConfig::from_json(r#"{ "division_by_zero": "Zero" }"#).unwrap();
//! assert_eq!(config.division_by_zero, DivisionByZeroPolicy::Zero);
//! assert_eq!(config.precision, 8);
//! ```

pub mod validation;
pub mod violations;

use serde::{Deserialize, Serialize};
use stillwater::Validation;

pub use validation::validate;
pub use violations::{ConfigError, ConfigViolation};

/// What a division (or remainder) by zero produces.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum DivisionByZeroPolicy {
    /// Refuse the command and report `CalcError::DivisionByZero`.
    #[default]
    Error,
    /// Produce zero.
    Zero,
    /// Produce the left-hand operand unchanged.
    Dividend,
}

/// Meaning of the percent key and of a pending percent operator.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum PercentPolicy {
    /// Under a pending `+`/`-`, percent takes that share of the running
    /// total (`200 + 10 %` gives `20`). Otherwise it divides by 100. A
    /// pending percent operator resolves as `a * b / 100`.
    #[default]
    Contextual,
    /// Percent always divides the current operand by 100, and a pending
    /// percent operator resolves as `b / 100`.
    Simple,
    /// A pending percent operator is the remainder `a % b`; the percent key
    /// divides by 100.
    Remainder,
}

/// Whether backspace may edit a result that equals just produced.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum BackspacePolicy {
    #[default]
    BlockAfterResult,
    Allow,
}

/// How the current numeral is projected onto the display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Widest numeral shown literally.
    pub max_length: usize,
    /// Magnitude above which long numerals switch to scientific notation.
    pub scientific_threshold: f64,
    /// Fractional digits in scientific notation.
    pub scientific_digits: usize,
    /// Insert `,` thousands separators into integers.
    pub grouping: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_length: 12,
            scientific_threshold: 1e12,
            scientific_digits: 5,
            grouping: false,
        }
    }
}

/// Full calculator configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub division_by_zero: DivisionByZeroPolicy,
    pub percent: PercentPolicy,
    pub backspace: BackspacePolicy,
    /// Decimal places every result is rounded to.
    pub precision: u32,
    /// Longest numeral the user may type.
    pub max_input_length: usize,
    pub display: DisplayConfig,
    /// Phase transitions kept for diagnostics; zero disables the history.
    pub history_limit: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            division_by_zero: DivisionByZeroPolicy::default(),
            percent: PercentPolicy::default(),
            backspace: BackspacePolicy::default(),
            precision: 8,
            max_input_length: 16,
            display: DisplayConfig::default(),
            history_limit: 64,
        }
    }
}

impl CalculatorConfig {
    /// Parse a JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Validate, returning the configuration or every violation found.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match validate(&self) {
            Validation::Success(()) => Ok(self),
            Validation::Failure(violations) => Err(ConfigError::Invalid(violations.into_vec())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_behaviour() {
        let config = CalculatorConfig::default();
        assert_eq!(config.division_by_zero, DivisionByZeroPolicy::Error);
        assert_eq!(config.percent, PercentPolicy::Contextual);
        assert_eq!(config.backspace, BackspacePolicy::BlockAfterResult);
        assert_eq!(config.precision, 8);
        assert_eq!(config.display.max_length, 12);
        assert_eq!(config.display.scientific_digits, 5);
        assert!(!config.display.grouping);
    }

    #[test]
    fn empty_json_is_default() {
        let config = CalculatorConfig::from_json("{}").unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn nested_display_fields_default_individually() {
        let config = CalculatorConfig::from_json(r#"{ "display": { "grouping": true } }"#).unwrap();
        assert!(config.display.grouping);
        assert_eq!(config.display.max_length, 12);
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = CalculatorConfig::from_json("{ precision: ").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }

    #[test]
    fn unknown_policy_is_malformed() {
        let err = CalculatorConfig::from_json(r#"{ "percent": "Sideways" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }

    #[test]
    fn invalid_values_collect_every_violation() {
        let err = CalculatorConfig::from_json(r#"{ "precision": 40, "max_input_length": 0 }"#)
            .unwrap_err();
        match err {
            ConfigError::Invalid(violations) => assert_eq!(violations.len(), 2),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = CalculatorConfig {
            percent: PercentPolicy::Remainder,
            backspace: BackspacePolicy::Allow,
            ..CalculatorConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(CalculatorConfig::from_json(&json).unwrap(), config);
    }
}
