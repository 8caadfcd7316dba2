//! State transition history tracking.
//!
//! Keeps an ordered record of the events a machine processed. A history can
//! be capped so that only the most recent records are retained.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Record of a single processed event.
///
/// Every event a service handles produces one record, including events
/// that leave the state unchanged.
///
/// # Example
///
/// ```rust
/// use gumball::core::{State, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Off,
///     On,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "off",
///             Self::On => "on",
///         }
///     }
/// }
///
/// let transition = StateTransition {
///     from: Lamp::Off,
///     to: Lamp::On,
///     event: "TOGGLE".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert!(transition.changed());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Name of the event that caused the transition
    pub event: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Whether the transition moved to a different state.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of state transitions.
///
/// `record` returns a new history and leaves the original untouched.
/// A history created with [`with_limit`](Self::with_limit) keeps only the
/// most recent records, dropping the oldest first.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    #[serde(default)]
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history with no retention limit.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
        }
    }

    /// Create a new empty history that retains at most `limit` records.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(64)),
            limit: Some(limit),
        }
    }

    /// Maximum number of retained records, if capped.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a transition, returning a new history.
    ///
    /// This does not mutate the existing history but returns a new one
    /// with the transition added.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Append a transition in place, dropping the oldest records beyond
    /// the limit.
    pub(crate) fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push_back(transition);
        if let Some(limit) = self.limit {
            while self.transitions.len() > limit {
                self.transitions.pop_front();
            }
        }
    }

    /// Drop every record, keeping the limit.
    pub(crate) fn clear(&mut self) {
        self.transitions.clear();
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the `from` state of the
    /// oldest retained record, then the `to` state of each record.
    /// Self-transitions repeat the state they stayed in.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gumball::core::{State, StateHistory, StateTransition};
    /// use serde::{Deserialize, Serialize};
    /// use chrono::Utc;
    ///
    /// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    /// enum Phase { One, Two }
    ///
    /// impl State for Phase {
    ///     fn name(&self) -> &str {
    ///         match self {
    ///             Self::One => "one",
    ///             Self::Two => "two",
    ///         }
    ///     }
    /// }
    ///
    /// let history = StateHistory::new()
    ///     .record(StateTransition {
    ///         from: Phase::One,
    ///         to: Phase::Two,
    ///         event: "NEXT".to_string(),
    ///         timestamp: Utc::now(),
    ///     })
    ///     .record(StateTransition {
    ///         from: Phase::Two,
    ///         to: Phase::Two,
    ///         event: "NEXT".to_string(),
    ///         timestamp: Utc::now(),
    ///     });
    ///
    /// let path = history.get_path();
    /// assert_eq!(path, vec![&Phase::One, &Phase::Two, &Phase::Two]);
    /// ```
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Get all retained transitions, oldest first.
    pub fn transitions(&self) -> &VecDeque<StateTransition<S>> {
        &self.transitions
    }

    /// Number of retained transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
