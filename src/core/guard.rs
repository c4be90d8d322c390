//! Guard predicates over machine states.
//!
//! Guards are pure boolean functions deciding whether a command may touch
//! the state in a given phase. Configurable policies (such as whether
//! backspace may edit a fresh result) are expressed as guards so the machine
//! itself never branches on policy enums for them.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Pure predicate that determines if a command can run in a state.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{Guard, Phase};
///
/// let not_after_result = Guard::new(|p: &Phase| *p != Phase::JustCalculated);
///
/// assert!(not_after_result.check(&Phase::Accumulating));
/// assert!(!not_after_result.check(&Phase::JustCalculated));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that lets every state through.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Check if the guard allows the command from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            _phantom: PhantomData,
        }
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
