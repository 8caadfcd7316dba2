//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Action, Context, Event, State};
use crate::machine::{Machine, Transition};
use tracing::debug;

const DEFAULT_ID: &str = "machine";

/// Builder for constructing machines with a fluent API.
pub struct MachineBuilder<S: State, E: Event, C: Context, A: Action<C>> {
    id: String,
    initial: Option<S>,
    context: Option<C>,
    transitions: Vec<Transition<S, E, A>>,
    exhaustive: Option<(Vec<S>, Vec<E>)>,
}

impl<S: State, E: Event, C: Context, A: Action<C>> MachineBuilder<S, E, C, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            id: DEFAULT_ID.to_string(),
            initial: None,
            context: None,
            transitions: Vec::new(),
            exhaustive: None,
        }
    }

    /// Set the machine identifier used in logs (defaults to `"machine"`).
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the initial context (required).
    pub fn context(mut self, context: C) -> Self {
        self.context = Some(context);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, E, A>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, E, A>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S, E, A>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Require every combination of `states` and `events` to be handled.
    /// Checked by `build()`.
    pub fn exhaustive(mut self, states: &[S], events: &[E]) -> Self {
        self.exhaustive = Some((states.to_vec(), events.to_vec()));
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing or the table is
    /// ambiguous or incomplete.
    pub fn build(self) -> Result<Machine<S, E, C, A>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let context = self.context.ok_or(BuildError::MissingContext)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        for (i, transition) in self.transitions.iter().enumerate() {
            let duplicated = self.transitions[..i]
                .iter()
                .any(|earlier| earlier.matches(&transition.from, &transition.event));
            if duplicated {
                return Err(BuildError::DuplicateTransition {
                    state: transition.from.name().to_string(),
                    event: transition.event.name().to_string(),
                });
            }
        }

        let machine = Machine::new(self.id, initial, context, self.transitions);

        if let Some((states, events)) = &self.exhaustive {
            if let Some((state, event)) = machine.unhandled(states, events).into_iter().next() {
                return Err(BuildError::UnhandledEvent {
                    state: state.name().to_string(),
                    event: event.name().to_string(),
                });
            }
        }

        debug!(
            machine = machine.id(),
            initial = machine.initial_state().name(),
            transitions = machine.transitions().len(),
            "Machine built"
        );

        Ok(machine)
    }
}

impl<S: State, E: Event, C: Context, A: Action<C>> Default for MachineBuilder<S, E, C, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{goto, stay};

    crate::state_enum! {
        enum Valve {
            Shut as "shut",
            Open as "open",
        }
    }

    crate::event_enum! {
        enum ValveEvent {
            Turn as "TURN",
            Knock as "KNOCK",
        }
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Clunk;

    impl Action<u8> for Clunk {
        fn name(&self) -> &str {
            "clunk"
        }
    }

    type Builder = MachineBuilder<Valve, ValveEvent, u8, Clunk>;

    #[test]
    fn builder_validates_required_fields() {
        let result = Builder::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_context() {
        let result = Builder::new().initial(Valve::Shut).build();

        assert!(matches!(result, Err(BuildError::MissingContext)));
    }

    #[test]
    fn builder_requires_transitions() {
        let result = Builder::new().initial(Valve::Shut).context(0).build();

        assert!(matches!(result, Err(BuildError::NoTransitions)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = Builder::new()
            .id("valve")
            .initial(Valve::Shut)
            .context(0)
            .transition(
                TransitionBuilder::new()
                    .from(Valve::Shut)
                    .on(ValveEvent::Turn)
                    .to(Valve::Open),
            )
            .unwrap()
            .add_transition(goto(Valve::Open, ValveEvent::Turn, Valve::Shut, vec![Clunk]))
            .build()
            .unwrap();

        assert_eq!(machine.id(), "valve");
        assert_eq!(machine.initial_state(), &Valve::Shut);
        assert_eq!(machine.initial_context(), &0);
        assert_eq!(machine.transitions().len(), 2);
    }

    #[test]
    fn invalid_transition_builder_is_rejected() {
        let result = Builder::new().transition(TransitionBuilder::new().from(Valve::Shut));

        assert!(matches!(result, Err(BuildError::MissingEvent)));
    }

    #[test]
    fn duplicate_pairs_are_rejected() {
        let result = Builder::new()
            .initial(Valve::Shut)
            .context(0)
            .transitions(vec![
                goto(Valve::Shut, ValveEvent::Turn, Valve::Open, Vec::new()),
                stay(Valve::Shut, ValveEvent::Turn, vec![Clunk]),
            ])
            .build();

        assert_eq!(
            result.err(),
            Some(BuildError::DuplicateTransition {
                state: "shut".to_string(),
                event: "TURN".to_string(),
            })
        );
    }

    #[test]
    fn exhaustive_reports_first_missing_pair() {
        let result = Builder::new()
            .initial(Valve::Shut)
            .context(0)
            .transitions(vec![
                goto(Valve::Shut, ValveEvent::Turn, Valve::Open, Vec::new()),
                stay(Valve::Shut, ValveEvent::Knock, vec![Clunk]),
                goto(Valve::Open, ValveEvent::Turn, Valve::Shut, Vec::new()),
            ])
            .exhaustive(Valve::ALL, ValveEvent::ALL)
            .build();

        assert_eq!(
            result.err(),
            Some(BuildError::UnhandledEvent {
                state: "open".to_string(),
                event: "KNOCK".to_string(),
            })
        );
    }

    #[test]
    fn exhaustive_accepts_complete_table() {
        let result = Builder::new()
            .initial(Valve::Shut)
            .context(0)
            .transitions(vec![
                goto(Valve::Shut, ValveEvent::Turn, Valve::Open, Vec::new()),
                stay(Valve::Shut, ValveEvent::Knock, vec![Clunk]),
                goto(Valve::Open, ValveEvent::Turn, Valve::Shut, Vec::new()),
                stay(Valve::Open, ValveEvent::Knock, vec![Clunk]),
            ])
            .exhaustive(Valve::ALL, ValveEvent::ALL)
            .build();

        assert!(result.is_ok());
    }
}
