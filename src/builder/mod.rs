//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders and macros for defining transition
//! tables with minimal boilerplate while maintaining type safety.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Event, State};
use crate::machine::Transition;

/// Create a transition that moves to `to` and runs `actions`.
///
/// # Example
///
/// ```
/// use gumball::builder::goto;
/// use gumball::{event_enum, state_enum};
///
/// state_enum! {
///     enum Door {
///         Closed,
///         Open,
///     }
/// }
///
/// event_enum! {
///     enum DoorEvent {
///         Push as "PUSH",
///     }
/// }
///
/// let transition = goto(Door::Closed, DoorEvent::Push, Door::Open, vec!["creak"]);
/// assert_eq!(transition.target, Some(Door::Open));
/// ```
pub fn goto<S, E, A>(from: S, event: E, to: S, actions: Vec<A>) -> Transition<S, E, A>
where
    S: State,
    E: Event,
{
    Transition {
        from,
        event,
        target: Some(to),
        actions,
    }
}

/// Create a transition that stays in `from` and only runs `actions`.
///
/// # Example
///
/// ```
/// use gumball::builder::stay;
/// use gumball::{event_enum, state_enum};
///
/// state_enum! {
///     enum Door {
///         Closed,
///         Open,
///     }
/// }
///
/// event_enum! {
///     enum DoorEvent {
///         Knock as "KNOCK",
///     }
/// }
///
/// let transition = stay(Door::Closed, DoorEvent::Knock, vec!["who's there?"]);
/// assert!(transition.is_self_transition());
/// ```
pub fn stay<S, E, A>(from: S, event: E, actions: Vec<A>) -> Transition<S, E, A>
where
    S: State,
    E: Event,
{
    Transition {
        from,
        event,
        target: None,
        actions,
    }
}
