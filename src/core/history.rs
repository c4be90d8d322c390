//! Phase transition history.
//!
//! The machine records one entry per command that moved it to a different
//! phase. The history is bounded; once full, the oldest record is dropped.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{Phase, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Phase::Idle,
///     to: Phase::Accumulating,
///     trigger: "digit 7".to_string(),
///     timestamp: Utc::now(),
///     sequence: 1,
/// };
/// assert_eq!(transition.sequence, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Label of the command that caused the transition
    pub trigger: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Monotonic command counter at the time of the transition
    pub sequence: u64,
}

/// Bounded, ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{Phase, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_limit(8);
/// history.record(StateTransition {
///     from: Phase::Idle,
///     to: Phase::Accumulating,
///     trigger: "digit 5".to_string(),
///     timestamp: Utc::now(),
///     sequence: 1,
/// });
/// history.record(StateTransition {
///     from: Phase::Accumulating,
///     to: Phase::OperandPending,
///     trigger: "operator +".to_string(),
///     timestamp: Utc::now(),
///     sequence: 2,
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Phase::Idle, &Phase::Accumulating, &Phase::OperandPending]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    limit: usize,
}

impl<S: State> StateHistory<S> {
    /// Create an empty history that keeps at most `limit` records.
    ///
    /// A limit of zero disables recording.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(64)),
            limit,
        }
    }

    /// Maximum number of records kept.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Record a transition, evicting the oldest one when full.
    pub fn record(&mut self, transition: StateTransition<S>) {
        if self.limit == 0 {
            return;
        }
        while self.transitions.len() >= self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest kept record, then the `to`
    /// state of each record.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Time between the oldest and newest kept record.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.front()?;
        let last = self.transitions.back()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    /// All kept transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Drop every record, keeping the limit.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}
