//! Events offered to a state machine.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Trait for events a state machine reacts to.
///
/// Events carry no behavior of their own; the machine's transition table
/// decides what each one means in each state.
pub trait Event:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name, as used for parsing and logging.
    fn name(&self) -> &str;
}

/// Error returned when an event name does not match any known event.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown event '{name}'")]
pub struct ParseEventError {
    pub name: String,
}

impl ParseEventError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
