//! Transition table entries.

use crate::core::{Event, State};
use thiserror::Error;

/// One row of a transition table.
///
/// A transition fires when the machine is in `from` and receives `event`.
/// It moves to `target`, or stays put when `target` is `None`, and runs
/// `actions` in order.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition<S: State, E: Event, A> {
    pub from: S,
    pub event: E,
    pub target: Option<S>,
    pub actions: Vec<A>,
}

/// Errors that can occur when computing a transition
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransitionError {
    #[error("Unhandled event '{event}' in state '{state}'")]
    Unhandled { state: String, event: String },
}

impl<S: State, E: Event, A> Transition<S, E, A> {
    /// Check if this transition handles `event` in `current` (pure)
    pub fn matches(&self, current: &S, event: &E) -> bool {
        self.from == *current && self.event == *event
    }

    /// State the machine ends up in after taking this transition (pure)
    pub fn next_state(&self, current: &S) -> S {
        self.target.clone().unwrap_or_else(|| current.clone())
    }

    /// Whether this transition leaves the state unchanged.
    pub fn is_self_transition(&self) -> bool {
        self.target.as_ref().is_none_or(|target| *target == self.from)
    }
}
