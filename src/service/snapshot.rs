//! Serializable view of a running service.

use crate::core::{Context, State};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current state and context of a service at one point in time.
///
/// Displays as the state name followed by the context as JSON, e.g.
/// `hasQuarterState {"count":1}`. A context that cannot be written as JSON
/// falls back to its `Debug` form, so formatting never fails.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<S: State, C: Context> {
    pub state: S,
    pub context: C,
}

impl<S: State, C: Context> Snapshot<S, C> {
    pub fn new(state: S, context: C) -> Self {
        Self { state, context }
    }

    /// Serialize the whole snapshot as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<S: State, C: Context> fmt::Display for Snapshot<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self.context) {
            Ok(context) => write!(f, "{} {}", self.state.name(), context),
            Err(_) => write!(f, "{} {:?}", self.state.name(), self.context),
        }
    }
}
