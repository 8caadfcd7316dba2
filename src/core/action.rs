//! Actions attached to transitions, and the context they update.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Auxiliary data carried alongside the current state.
///
/// Implemented for every type with the required bounds; there is nothing
/// to implement by hand.
pub trait Context:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

impl<T> Context for T where
    T: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

/// Procedure executed while taking a transition.
///
/// An action is split into a pure half and an effectful half:
/// - `assign` computes the next context from the current one, with no side effects
/// - `notification` names the message the interpreter should emit
///
/// The machine only ever calls `assign`. Emitting notifications is left to
/// the service, so the transition function stays pure.
///
/// # Example
///
/// ```rust
/// use gumball::core::Action;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum CounterAction {
///     Bump,
///     Greet,
/// }
///
/// impl Action<u32> for CounterAction {
///     fn name(&self) -> &str {
///         match self {
///             Self::Bump => "bump",
///             Self::Greet => "greet",
///         }
///     }
///
///     fn assign(&self, count: &u32) -> u32 {
///         match self {
///             Self::Bump => count + 1,
///             Self::Greet => *count,
///         }
///     }
///
///     fn notification(&self) -> Option<&str> {
///         match self {
///             Self::Bump => None,
///             Self::Greet => Some("hello"),
///         }
///     }
/// }
///
/// assert_eq!(CounterAction::Bump.assign(&1), 2);
/// assert_eq!(CounterAction::Greet.notification(), Some("hello"));
/// ```
pub trait Action<C>: Clone + PartialEq + Debug + Send + Sync {
    /// Get the action's name for logging.
    fn name(&self) -> &str;

    /// Compute the context after this action runs.
    ///
    /// Default implementation leaves the context unchanged.
    fn assign(&self, context: &C) -> C
    where
        C: Clone,
    {
        context.clone()
    }

    /// Message to emit when this action runs, if any.
    fn notification(&self) -> Option<&str> {
        None
    }
}
