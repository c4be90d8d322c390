//! Memory register (M+, M-, MR, MC).
//!
//! The register is independent of the arithmetic state: clearing the
//! calculator leaves it alone.

use crate::core::numeral::round_to;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Running accumulator behind the memory keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    value: f64,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value`, rounding to `precision` places. Non-finite input is
    /// ignored.
    pub fn add(&mut self, value: f64, precision: u32) {
        self.accumulate(value, precision);
    }

    /// Subtract `value`, rounding to `precision` places.
    pub fn subtract(&mut self, value: f64, precision: u32) {
        self.accumulate(-value, precision);
    }

    pub fn recall(&self) -> f64 {
        self.value
    }

    pub fn clear(&mut self) {
        self.value = 0.0;
    }

    /// True if the register holds something other than zero.
    pub fn is_set(&self) -> bool {
        self.value != 0.0
    }

    fn accumulate(&mut self, delta: f64, precision: u32) {
        let next = self.value + delta;
        if next.is_finite() {
            self.value = round_to(next, precision);
        } else {
            warn!(delta, "memory overflow ignored");
        }
    }
}
