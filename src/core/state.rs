//! The `State` trait and the calculator's conceptual phases.
//!
//! The calculator does not store its phase. A `Phase` is derived from the
//! flag combination held by the machine, which keeps the flags the single
//! source of truth while still giving guards and history something typed
//! to work with.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are small values describing where a
/// machine currently is.
///
/// # Required Traits
///
/// - `Clone`: states are copied into history records
/// - `PartialEq`: guards and history compare states
/// - `Debug`: states show up in diagnostics
/// - `Serialize` + `Deserialize`: snapshots and history serialize them
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Off,
///     Blinking,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::Blinking => "Blinking",
///         }
///     }
///
///     fn is_settled(&self) -> bool {
///         matches!(self, Self::Off)
///     }
/// }
///
/// assert!(Lamp::Off.is_settled());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if nothing is in flight in this state.
    ///
    /// A settled state has no half-entered operation: leaving the machine
    /// here loses nothing the user typed.
    ///
    /// Default implementation returns `false`.
    fn is_settled(&self) -> bool {
        false
    }
}

/// Conceptual phase of the calculator.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// No pending operator and nothing typed beyond the initial `0`.
    Idle,
    /// An operator was chosen; the next digit starts the right-hand operand.
    OperandPending,
    /// Digits are being typed into the current operand.
    Accumulating,
    /// Equals just produced a result; the next digit starts a fresh number.
    JustCalculated,
}

impl Phase {
    /// Derive the phase from the machine's flags.
    pub fn derive(
        current_input: &str,
        operator_pending: bool,
        waiting_for_operand: bool,
        just_calculated: bool,
    ) -> Self {
        if just_calculated {
            Self::JustCalculated
        } else if operator_pending && waiting_for_operand {
            Self::OperandPending
        } else if !operator_pending && current_input == "0" {
            Self::Idle
        } else {
            Self::Accumulating
        }
    }
}

impl State for Phase {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::OperandPending => "OperandPending",
            Self::Accumulating => "Accumulating",
            Self::JustCalculated => "JustCalculated",
        }
    }

    fn is_settled(&self) -> bool {
        matches!(self, Self::Idle | Self::JustCalculated)
    }
}
