//! The calculator state machine.
//!
//! [`CalculatorState`] holds the arithmetic state and implements every
//! transition as a plain method. [`Calculator`] wraps it with the
//! configuration, memory register, history, logging and observer
//! notifications.

use super::command::{Command, Operator};
use super::display::format_for_display;
use super::error::CalcError;
use super::evaluate::Arithmetic;
use super::guard::Guard;
use super::history::{StateHistory, StateTransition};
use super::numeral::{is_last_character, parse_number, to_numeral, ZERO};
use super::state::{Phase, State};
use crate::config::{BackspacePolicy, CalculatorConfig};
use crate::memory::Memory;
use crate::observer::CalculatorObserver;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace, warn};

/// Arithmetic state of the calculator.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    current_input: String,
    previous_input: Option<f64>,
    pending_operator: Option<Operator>,
    waiting_for_operand: bool,
    just_calculated: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_input: ZERO.to_string(),
            previous_input: None,
            pending_operator: None,
            waiting_for_operand: false,
            just_calculated: false,
        }
    }
}

impl CalculatorState {
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn previous_input(&self) -> Option<f64> {
        self.previous_input
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn is_waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    pub fn is_just_calculated(&self) -> bool {
        self.just_calculated
    }

    pub fn phase(&self) -> Phase {
        Phase::derive(
            &self.current_input,
            self.pending_operator.is_some(),
            self.waiting_for_operand,
            self.just_calculated,
        )
    }

    /// The current operand as a number.
    pub fn operand(&self) -> f64 {
        parse_number(&self.current_input)
    }

    fn start_fresh(&mut self, numeral: &str) {
        *self = Self {
            current_input: numeral.to_string(),
            ..Self::default()
        };
    }

    fn input_digit(&mut self, digit: u8, max_input_length: usize) -> Result<(), CalcError> {
        if digit > 9 {
            return Err(CalcError::InvalidDigit(digit));
        }
        let ch = char::from(b'0' + digit);

        if self.just_calculated {
            self.start_fresh(&ch.to_string());
        } else if self.waiting_for_operand {
            self.current_input = ch.to_string();
            self.waiting_for_operand = false;
        } else if self.current_input == ZERO {
            self.current_input = ch.to_string();
        } else if self.current_input.chars().count() < max_input_length {
            self.current_input.push(ch);
        }
        Ok(())
    }

    fn input_decimal_point(&mut self, max_input_length: usize) {
        if self.just_calculated {
            self.start_fresh("0.");
        } else if self.waiting_for_operand {
            self.current_input = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.current_input.contains('.')
            && self.current_input.chars().count() < max_input_length
        {
            self.current_input.push('.');
        }
    }

    fn input_operator(&mut self, op: Operator, arithmetic: &Arithmetic) -> Result<(), CalcError> {
        match (self.previous_input, self.pending_operator) {
            (None, _) => self.previous_input = Some(self.operand()),
            (Some(previous), Some(pending)) if !self.waiting_for_operand => {
                let result = arithmetic.resolve(pending, previous, self.operand())?;
                self.current_input = to_numeral(result);
                self.previous_input = Some(result);
            }
            _ => {}
        }
        self.pending_operator = Some(op);
        self.waiting_for_operand = true;
        self.just_calculated = false;
        Ok(())
    }

    fn calculate(&mut self, arithmetic: &Arithmetic) -> Result<Option<f64>, CalcError> {
        let (Some(op), Some(previous)) = (self.pending_operator, self.previous_input) else {
            return Ok(None);
        };
        if self.waiting_for_operand {
            return Ok(None);
        }

        let result = arithmetic.resolve(op, previous, self.operand())?;
        self.current_input = to_numeral(result);
        self.previous_input = None;
        self.pending_operator = None;
        self.waiting_for_operand = true;
        self.just_calculated = true;
        Ok(Some(result))
    }

    fn percent(&mut self, arithmetic: &Arithmetic) -> Result<(), CalcError> {
        let context = match (self.pending_operator, self.previous_input) {
            (Some(op), Some(previous)) if !self.waiting_for_operand => Some((op, previous)),
            _ => None,
        };
        let value = arithmetic.percent_of(self.operand(), context)?;
        self.current_input = to_numeral(value);
        if self.pending_operator.is_some() {
            self.waiting_for_operand = false;
        }
        Ok(())
    }

    fn backspace(&mut self) {
        if is_last_character(&self.current_input) {
            self.current_input = ZERO.to_string();
        } else {
            self.current_input.pop();
            if self.current_input == "-0" {
                self.current_input = ZERO.to_string();
            }
        }
        // An edited result becomes an operand being typed.
        if self.just_calculated {
            self.just_calculated = false;
            self.waiting_for_operand = false;
        }
    }

    fn load(&mut self, value: f64) {
        self.current_input = to_numeral(value);
        self.waiting_for_operand = false;
        self.just_calculated = false;
    }
}

/// Diagnostic view of the calculator at one point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub current: String,
    pub previous: Option<f64>,
    pub operator: Option<Operator>,
    pub waiting_for_operand: bool,
    pub just_calculated: bool,
    pub phase: Phase,
}

impl From<&CalculatorState> for Snapshot {
    fn from(state: &CalculatorState) -> Self {
        Self {
            current: state.current_input.clone(),
            previous: state.previous_input,
            operator: state.pending_operator,
            waiting_for_operand: state.waiting_for_operand,
            just_calculated: state.just_calculated,
            phase: state.phase(),
        }
    }
}

pub(crate) fn backspace_guard(policy: BackspacePolicy) -> Guard<Phase> {
    match policy {
        BackspacePolicy::BlockAfterResult => Guard::new(|p: &Phase| *p != Phase::JustCalculated),
        BackspacePolicy::Allow => Guard::always(),
    }
}

/// A calculator: arithmetic state plus configuration, memory, history and
/// an optional observer.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{Calculator, Operator};
///
/// let mut calc = Calculator::new();
/// calc.input_digit(5).unwrap();
/// calc.input_operator(Operator::Add).unwrap();
/// calc.input_digit(3).unwrap();
/// calc.input_operator(Operator::Add).unwrap();
/// calc.input_digit(2).unwrap();
/// calc.calculate().unwrap();
///
/// assert_eq!(calc.current_display_value(), "10");
/// ```
pub struct Calculator {
    state: CalculatorState,
    memory: Memory,
    config: CalculatorConfig,
    arithmetic: Arithmetic,
    backspace_guard: Guard<Phase>,
    history: StateHistory<Phase>,
    sequence: u64,
    observer: Option<Box<dyn CalculatorObserver>>,
}

impl Calculator {
    /// Calculator with the default configuration.
    pub fn new() -> Self {
        Self::from_parts(CalculatorConfig::default(), None)
    }

    /// Assemble a calculator from an already validated configuration.
    pub(crate) fn from_parts(
        config: CalculatorConfig,
        observer: Option<Box<dyn CalculatorObserver>>,
    ) -> Self {
        let arithmetic = Arithmetic {
            division_by_zero: config.division_by_zero,
            percent: config.percent,
            precision: config.precision,
        };
        Self {
            state: CalculatorState::default(),
            memory: Memory::new(),
            arithmetic,
            backspace_guard: backspace_guard(config.backspace),
            history: StateHistory::with_limit(config.history_limit),
            sequence: 0,
            observer,
            config,
        }
    }

    /* ------------------------ Commands ------------------------ */

    /// Type a digit (0-9).
    pub fn input_digit(&mut self, digit: u8) -> Result<(), CalcError> {
        let before = self.phase();
        let outcome = self
            .state
            .input_digit(digit, self.config.max_input_length);
        self.finish(Command::Digit(digit), before, outcome)
    }

    /// Type a decimal point; a second point in the same numeral is ignored.
    pub fn input_decimal_point(&mut self) {
        let before = self.phase();
        self.state.input_decimal_point(self.config.max_input_length);
        let _ = self.finish(Command::DecimalPoint, before, Ok(()));
    }

    /// Choose an operator, resolving a pending one first when a second
    /// operand was typed.
    pub fn input_operator(&mut self, op: Operator) -> Result<(), CalcError> {
        let before = self.phase();
        let outcome = self.state.input_operator(op, &self.arithmetic);
        self.finish(Command::Operator(op), before, outcome)
    }

    /// Equals. Returns the result, or `None` if there was nothing to resolve.
    pub fn calculate(&mut self) -> Result<Option<f64>, CalcError> {
        let before = self.phase();
        let outcome = self.state.calculate(&self.arithmetic);
        let outcome = self.finish(Command::Equals, before, outcome);
        if let (Ok(Some(result)), Some(observer)) = (&outcome, self.observer.as_mut()) {
            observer.on_calculated(*result);
        }
        outcome
    }

    /// Reset every arithmetic field to its default. Memory is kept.
    pub fn clear(&mut self) {
        let before = self.phase();
        self.state = CalculatorState::default();
        let _ = self.finish(Command::Clear, before, Ok(()));
        if let Some(observer) = self.observer.as_mut() {
            observer.on_cleared();
        }
    }

    /// Remove the last typed character. Returns `false` if the backspace
    /// policy refused the edit.
    pub fn backspace(&mut self) -> bool {
        let before = self.phase();
        let allowed = self.backspace_guard.check(&before);
        if allowed {
            self.state.backspace();
        } else {
            trace!(phase = before.name(), "backspace blocked");
        }
        let _ = self.finish(Command::Backspace, before, Ok(()));
        allowed
    }

    /// Apply the percent key to the current operand.
    pub fn percent(&mut self) -> Result<(), CalcError> {
        let before = self.phase();
        let outcome = self.state.percent(&self.arithmetic);
        self.finish(Command::Percent, before, outcome)
    }

    /// M+: add the current operand to memory.
    pub fn memory_add(&mut self) {
        let before = self.phase();
        self.memory.add(self.state.operand(), self.config.precision);
        let _ = self.finish(Command::MemoryAdd, before, Ok(()));
    }

    /// M-: subtract the current operand from memory.
    pub fn memory_subtract(&mut self) {
        let before = self.phase();
        self.memory.subtract(self.state.operand(), self.config.precision);
        let _ = self.finish(Command::MemorySubtract, before, Ok(()));
    }

    /// MR: enter the stored value as the current operand.
    pub fn memory_recall(&mut self) {
        let before = self.phase();
        self.state.load(self.memory.recall());
        let _ = self.finish(Command::MemoryRecall, before, Ok(()));
    }

    /// MC: reset memory to zero.
    pub fn memory_clear(&mut self) {
        let before = self.phase();
        self.memory.clear();
        let _ = self.finish(Command::MemoryClear, before, Ok(()));
    }

    /// Dispatch any command.
    pub fn apply(&mut self, command: Command) -> Result<(), CalcError> {
        match command {
            Command::Digit(d) => self.input_digit(d),
            Command::DecimalPoint => {
                self.input_decimal_point();
                Ok(())
            }
            Command::Operator(op) => self.input_operator(op),
            Command::Equals => self.calculate().map(|_| ()),
            Command::Clear => {
                self.clear();
                Ok(())
            }
            Command::Backspace => {
                self.backspace();
                Ok(())
            }
            Command::Percent => self.percent(),
            Command::MemoryAdd => {
                self.memory_add();
                Ok(())
            }
            Command::MemorySubtract => {
                self.memory_subtract();
                Ok(())
            }
            Command::MemoryRecall => {
                self.memory_recall();
                Ok(())
            }
            Command::MemoryClear => {
                self.memory_clear();
                Ok(())
            }
        }
    }

    /* ------------------------ Queries ------------------------ */

    /// The string the display should show.
    pub fn current_display_value(&self) -> String {
        format_for_display(&self.state.current_input, &self.config.display)
    }

    /// The current operand as a number.
    pub fn current_value(&self) -> f64 {
        self.state.operand()
    }

    pub fn snapshot_state(&self) -> Snapshot {
        Snapshot::from(&self.state)
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }

    /// Number of commands processed since construction.
    pub fn commands_processed(&self) -> u64 {
        self.sequence
    }

    /* ------------------------ Bookkeeping ------------------------ */

    fn finish<T>(
        &mut self,
        command: Command,
        before: Phase,
        outcome: Result<T, CalcError>,
    ) -> Result<T, CalcError> {
        self.sequence += 1;

        match &outcome {
            Ok(_) => debug!(
                %command,
                current = %self.state.current_input,
                "command applied"
            ),
            Err(error) => {
                warn!(%command, %error, "command refused");
                if let Some(observer) = self.observer.as_mut() {
                    observer.on_error(error);
                }
            }
        }

        let after = self.phase();
        if after != before {
            trace!(from = before.name(), to = after.name(), %command, "phase transition");
            self.history.record(StateTransition {
                from: before,
                to: after,
                trigger: command.to_string(),
                timestamp: Utc::now(),
                sequence: self.sequence,
            });
        }

        if let Some(observer) = self.observer.as_mut() {
            observer.on_state_changed(&Snapshot::from(&self.state));
        }

        outcome
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("state", &self.state)
            .field("memory", &self.memory)
            .field("config", &self.config)
            .field("sequence", &self.sequence)
            .field("observed", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}
