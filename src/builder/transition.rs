//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Event, State};
use crate::machine::Transition;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State, E: Event, A> {
    from: Option<S>,
    event: Option<E>,
    target: Option<S>,
    actions: Vec<A>,
}

impl<S: State, E: Event, A> TransitionBuilder<S, E, A> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            event: None,
            target: None,
            actions: Vec::new(),
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: E) -> Self {
        self.event = Some(event);
        self
    }

    /// Set the target state (optional).
    /// Without a target the transition stays in its source state.
    pub fn to(mut self, state: S) -> Self {
        self.target = Some(state);
        self
    }

    /// Append an action.
    pub fn action(mut self, action: A) -> Self {
        self.actions.push(action);
        self
    }

    /// Append several actions, keeping their order.
    pub fn actions(mut self, actions: impl IntoIterator<Item = A>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, E, A>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;

        Ok(Transition {
            from,
            event,
            target: self.target,
            actions: self.actions,
        })
    }
}

impl<S: State, E: Event, A> Default for TransitionBuilder<S, E, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::state_enum! {
        enum Kettle {
            Cold,
            Boiling,
        }
    }

    crate::event_enum! {
        enum KettleEvent {
            Heat,
            Pour,
        }
    }

    #[test]
    fn builder_validates_missing_source() {
        let result = TransitionBuilder::<Kettle, KettleEvent, ()>::new()
            .on(KettleEvent::Heat)
            .build();

        assert!(matches!(result, Err(BuildError::MissingFromState)));
    }

    #[test]
    fn builder_validates_missing_event() {
        let result = TransitionBuilder::<Kettle, KettleEvent, ()>::new()
            .from(Kettle::Cold)
            .to(Kettle::Boiling)
            .build();

        assert!(matches!(result, Err(BuildError::MissingEvent)));
    }

    #[test]
    fn fluent_api_builds_transition() {
        let transition = TransitionBuilder::new()
            .from(Kettle::Cold)
            .on(KettleEvent::Heat)
            .to(Kettle::Boiling)
            .action("whistle")
            .build()
            .unwrap();

        assert_eq!(transition.from, Kettle::Cold);
        assert_eq!(transition.event, KettleEvent::Heat);
        assert_eq!(transition.target, Some(Kettle::Boiling));
        assert_eq!(transition.actions, vec!["whistle"]);
    }

    #[test]
    fn target_is_optional() {
        let transition = TransitionBuilder::new()
            .from(Kettle::Cold)
            .on(KettleEvent::Pour)
            .actions(["drip", "sigh"])
            .build()
            .unwrap();

        assert_eq!(transition.target, None);
        assert!(transition.is_self_transition());
        assert_eq!(transition.actions, vec!["drip", "sigh"]);
    }
}
