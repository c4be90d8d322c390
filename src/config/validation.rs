//! Accumulating validation of calculator configurations.
//!
//! Every rule runs, and all failures are returned together so a bad
//! configuration file can be fixed in one pass.

use crate::config::violations::ConfigViolation;
use crate::config::CalculatorConfig;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub const MAX_PRECISION: u32 = 15;
pub const MIN_INPUT_LENGTH: usize = 1;
pub const MAX_INPUT_LENGTH: usize = 300;
/// Fits the widest zero-digit scientific numeral, `-1e+308`.
pub const MIN_DISPLAY_LENGTH: usize = 7;
pub const MAX_DISPLAY_LENGTH: usize = 32;
pub const MAX_SCIENTIFIC_DIGITS: usize = 15;

/// Characters a positive two-digit-exponent scientific numeral needs beyond
/// its fractional digits: `d.` and `e+NN`. Signed or three-digit-exponent
/// values shed fractional digits to fit.
const SCIENTIFIC_OVERHEAD: usize = 6;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn check(ok: bool, violation: impl FnOnce() -> ConfigViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Check every configuration rule, accumulating ALL violations.
pub fn validate(config: &CalculatorConfig) -> Check {
    let display = &config.display;

    let checks = vec![
        check(config.precision <= MAX_PRECISION, || {
            ConfigViolation::PrecisionOutOfRange {
                value: config.precision,
                max: MAX_PRECISION,
            }
        }),
        check(
            (MIN_INPUT_LENGTH..=MAX_INPUT_LENGTH).contains(&config.max_input_length),
            || ConfigViolation::InputLengthOutOfRange {
                value: config.max_input_length,
                min: MIN_INPUT_LENGTH,
                max: MAX_INPUT_LENGTH,
            },
        ),
        check(
            (MIN_DISPLAY_LENGTH..=MAX_DISPLAY_LENGTH).contains(&display.max_length),
            || ConfigViolation::DisplayLengthOutOfRange {
                value: display.max_length,
                min: MIN_DISPLAY_LENGTH,
                max: MAX_DISPLAY_LENGTH,
            },
        ),
        check(
            display.scientific_threshold.is_finite() && display.scientific_threshold > 0.0,
            || ConfigViolation::InvalidScientificThreshold {
                value: display.scientific_threshold,
            },
        ),
        check(display.scientific_digits <= MAX_SCIENTIFIC_DIGITS, || {
            ConfigViolation::ScientificDigitsOutOfRange {
                value: display.scientific_digits,
                max: MAX_SCIENTIFIC_DIGITS,
            }
        }),
        check(
            display.scientific_digits + SCIENTIFIC_OVERHEAD <= display.max_length,
            || ConfigViolation::ScientificWiderThanDisplay {
                digits: display.scientific_digits,
                max_length: display.max_length,
            },
        ),
    ];

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&CalculatorConfig::default()).is_success());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = CalculatorConfig {
            precision: 99,
            max_input_length: 1000,
            display: DisplayConfig {
                max_length: 2,
                scientific_threshold: f64::NAN,
                scientific_digits: 40,
                grouping: false,
            },
            ..CalculatorConfig::default()
        };

        match validate(&config) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 6);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::PrecisionOutOfRange { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::InvalidScientificThreshold { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn scientific_digits_must_fit_display() {
        let config = CalculatorConfig {
            display: DisplayConfig {
                max_length: 8,
                scientific_digits: 5,
                ..DisplayConfig::default()
            },
            ..CalculatorConfig::default()
        };

        let result = validate(&config);
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.head(),
                &ConfigViolation::ScientificWiderThanDisplay {
                    digits: 5,
                    max_length: 8
                }
            );
        }
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let config = CalculatorConfig {
            display: DisplayConfig {
                scientific_threshold: -1.0,
                ..DisplayConfig::default()
            },
            ..CalculatorConfig::default()
        };
        assert!(validate(&config).is_failure());
    }

    #[test]
    fn display_narrower_than_signed_exponent_is_rejected() {
        let config = CalculatorConfig {
            display: DisplayConfig {
                max_length: 6,
                scientific_digits: 0,
                ..DisplayConfig::default()
            },
            ..CalculatorConfig::default()
        };

        match validate(&config) {
            Validation::Failure(errors) => assert_eq!(
                errors.head(),
                &ConfigViolation::DisplayLengthOutOfRange {
                    value: 6,
                    min: 7,
                    max: MAX_DISPLAY_LENGTH,
                }
            ),
            Validation::Success(_) => panic!("Expected failure, got success"),
        }
    }

    #[test]
    fn boundary_values_pass() {
        let config = CalculatorConfig {
            precision: MAX_PRECISION,
            max_input_length: MAX_INPUT_LENGTH,
            display: DisplayConfig {
                max_length: MIN_DISPLAY_LENGTH,
                scientific_digits: 0,
                ..DisplayConfig::default()
            },
            ..CalculatorConfig::default()
        };
        assert!(validate(&config).is_success());
    }
}
