//! Core state machine types and logic.
//!
//! This module contains the pure functional core of the state machine:
//! - State and event definitions via the `State` and `Event` traits
//! - Actions split into a pure context update and a notification
//! - Immutable history tracking
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod action;
mod event;
mod history;
mod state;

pub use action::{Action, Context};
pub use event::{Event, ParseEventError};
pub use history::{StateHistory, StateTransition};
pub use state::State;
