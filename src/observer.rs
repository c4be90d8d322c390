//! Notifications for the presentation layer.
//!
//! The calculator never logs to a UI or flashes a display itself. An
//! embedding application that wants feedback implements
//! [`CalculatorObserver`] and hands it to the builder; every method has a
//! no-op default so observers only implement what they use.

use crate::core::{CalcError, Snapshot};

/// Receives calculator events after the state has been updated.
pub trait CalculatorObserver {
    /// Called after every command that ran, including refused ones.
    fn on_state_changed(&mut self, _snapshot: &Snapshot) {}

    /// Called after `clear()`.
    fn on_cleared(&mut self) {}

    /// Called after equals produced `result`.
    fn on_calculated(&mut self, _result: f64) {}

    /// Called when a command was refused with `error`.
    fn on_error(&mut self, _error: &CalcError) {}
}

/// Observer that records every event, for tests and diagnostics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingObserver {
    pub snapshots: Vec<Snapshot>,
    pub cleared: usize,
    pub results: Vec<f64>,
    pub errors: Vec<CalcError>,
}

impl CalculatorObserver for RecordingObserver {
    fn on_state_changed(&mut self, snapshot: &Snapshot) {
        self.snapshots.push(snapshot.clone());
    }

    fn on_cleared(&mut self) {
        self.cleared += 1;
    }

    fn on_calculated(&mut self, result: f64) {
        self.results.push(result);
    }

    fn on_error(&mut self, error: &CalcError) {
        self.errors.push(*error);
    }
}

impl<T: CalculatorObserver + ?Sized> CalculatorObserver for std::rc::Rc<std::cell::RefCell<T>> {
    fn on_state_changed(&mut self, snapshot: &Snapshot) {
        self.borrow_mut().on_state_changed(snapshot);
    }

    fn on_cleared(&mut self) {
        self.borrow_mut().on_cleared();
    }

    fn on_calculated(&mut self, result: f64) {
        self.borrow_mut().on_calculated(result);
    }

    fn on_error(&mut self, error: &CalcError) {
        self.borrow_mut().on_error(error);
    }
}
