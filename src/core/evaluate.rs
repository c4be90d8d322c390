//! Resolution of a pending operator against two operands.
//!
//! Everything here is a pure function of its arguments and the policies
//! passed in.

use super::command::Operator;
use super::error::CalcError;
use super::numeral::round_to;
use crate::config::{DivisionByZeroPolicy, PercentPolicy};

/// The policies that influence arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arithmetic {
    pub division_by_zero: DivisionByZeroPolicy,
    pub percent: PercentPolicy,
    pub precision: u32,
}

impl Default for Arithmetic {
    fn default() -> Self {
        Self {
            division_by_zero: DivisionByZeroPolicy::Error,
            percent: PercentPolicy::Contextual,
            precision: 8,
        }
    }
}

impl Arithmetic {
    /// Apply `op` to `lhs` and `rhs`, rounded to the configured precision.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pocketcalc::core::{Arithmetic, Operator};
    ///
    /// let arithmetic = Arithmetic::default();
    /// assert_eq!(arithmetic.resolve(Operator::Add, 0.1, 0.2), Ok(0.3));
    /// ```
    pub fn resolve(&self, op: Operator, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        let raw = match op {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => self.divide(lhs, rhs, |a, b| a / b)?,
            Operator::Percent => match self.percent {
                PercentPolicy::Contextual => lhs * rhs / 100.0,
                PercentPolicy::Simple => rhs / 100.0,
                PercentPolicy::Remainder => self.divide(lhs, rhs, |a, b| a % b)?,
            },
        };
        self.finish(raw)
    }

    /// Value of the percent key applied to `current`.
    ///
    /// `context` is the pending operator and captured left operand, present
    /// only when a right-hand operand has actually been typed.
    pub fn percent_of(
        &self,
        current: f64,
        context: Option<(Operator, f64)>,
    ) -> Result<f64, CalcError> {
        let raw = match (self.percent, context) {
            (PercentPolicy::Contextual, Some((op, previous))) if op.is_additive() => {
                previous * current / 100.0
            }
            _ => current / 100.0,
        };
        self.finish(raw)
    }

    fn divide(&self, lhs: f64, rhs: f64, op: impl Fn(f64, f64) -> f64) -> Result<f64, CalcError> {
        if rhs != 0.0 {
            return Ok(op(lhs, rhs));
        }
        match self.division_by_zero {
            DivisionByZeroPolicy::Error => Err(CalcError::DivisionByZero),
            DivisionByZeroPolicy::Zero => Ok(0.0),
            DivisionByZeroPolicy::Dividend => Ok(lhs),
        }
    }

    fn finish(&self, raw: f64) -> Result<f64, CalcError> {
        if !raw.is_finite() {
            return Err(CalcError::NonFiniteResult);
        }
        Ok(round_to(raw, self.precision))
    }
}
