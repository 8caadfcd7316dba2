//! Machine definitions and the pure transition function.
//!
//! A machine is a lookup table from (state, event) to (next state, actions)
//! plus an initial state and context. Computing a transition never performs
//! side effects; see [`service`](crate::service) for the interpreter that does.

mod definition;
mod transition;

pub use definition::{Machine, Step};
pub use transition::{Transition, TransitionError};
