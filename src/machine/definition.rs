//! Machine definition and the pure transition function.

use crate::core::{Action, Context, Event, State};
use crate::machine::transition::{Transition, TransitionError};

/// Outcome of processing one event, computed without side effects.
#[derive(Clone, Debug, PartialEq)]
pub struct Step<S, C, A> {
    pub from: S,
    pub to: S,
    pub context: C,
    pub actions: Vec<A>,
}

impl<S: State, C, A> Step<S, C, A> {
    /// Whether the step moved to a different state.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Immutable machine definition: initial state, initial context and the
/// transition table.
///
/// A `Machine` holds no current state. It answers "given this state and
/// context, what happens on this event?" and leaves running the answer to
/// a [`Service`](crate::service::Service).
#[derive(Clone, Debug)]
pub struct Machine<S: State, E: Event, C: Context, A: Action<C>> {
    id: String,
    initial: S,
    context: C,
    transitions: Vec<Transition<S, E, A>>,
}

impl<S: State, E: Event, C: Context, A: Action<C>> Machine<S, E, C, A> {
    pub(crate) fn new(
        id: String,
        initial: S,
        context: C,
        transitions: Vec<Transition<S, E, A>>,
    ) -> Self {
        Self {
            id,
            initial,
            context,
            transitions,
        }
    }

    /// Identifier used in logs.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    pub fn initial_context(&self) -> &C {
        &self.context
    }

    pub fn transitions(&self) -> &[Transition<S, E, A>] {
        &self.transitions
    }

    /// Find the transition handling `event` in `state` (pure)
    pub fn find(&self, state: &S, event: &E) -> Option<&Transition<S, E, A>> {
        self.transitions.iter().find(|t| t.matches(state, event))
    }

    /// Compute the result of sending `event` while in `state` with `context`.
    ///
    /// This is a pure function: the actions' context updates are folded in
    /// order, but their notifications are only returned, never emitted.
    pub fn transition(
        &self,
        state: &S,
        context: &C,
        event: &E,
    ) -> Result<Step<S, C, A>, TransitionError> {
        let transition = self
            .find(state, event)
            .ok_or_else(|| TransitionError::Unhandled {
                state: state.name().to_string(),
                event: event.name().to_string(),
            })?;

        let context = transition
            .actions
            .iter()
            .fold(context.clone(), |ctx, action| action.assign(&ctx));

        Ok(Step {
            from: state.clone(),
            to: transition.next_state(state),
            context,
            actions: transition.actions.clone(),
        })
    }

    /// List every (state, event) pair among those given that has no
    /// transition (pure)
    pub fn unhandled(&self, states: &[S], events: &[E]) -> Vec<(S, E)> {
        states
            .iter()
            .flat_map(|state| events.iter().map(move |event| (state, event)))
            .filter(|(state, event)| self.find(state, event).is_none())
            .map(|(state, event)| (state.clone(), event.clone()))
            .collect()
    }

    /// Check whether every listed pair has a transition (pure)
    pub fn is_exhaustive(&self, states: &[S], events: &[E]) -> bool {
        self.unhandled(states, events).is_empty()
    }
}
