//! Interpreter that runs a machine definition.
//!
//! This module is the "imperative shell" around the pure machine: it owns the
//! current state and context, emits action notifications through a
//! [`Notifier`], records history and calls transition listeners.
//!
//! # Lifecycle
//!
//! A service starts out `NotStarted`. `start()` moves it to `Running`, resets
//! it to the machine's initial state and context, and reports that snapshot
//! to listeners. Events are only accepted while `Running`. `stop()` moves it
//! to `Stopped`; starting again begins from the initial state.
//!
//! History keeps the most recent [`DEFAULT_HISTORY_LIMIT`] records unless a
//! different limit is set with [`Service::with_history_limit`].

mod error;
mod notifier;
mod snapshot;

pub use error::ServiceError;
pub use notifier::{BufferedNotifier, ConsoleNotifier, Notifier};
pub use snapshot::Snapshot;

use crate::core::{Action, Context, Event, State, StateHistory, StateTransition};
use crate::machine::Machine;
use chrono::Utc;
use std::fmt;
use tracing::{debug, info, warn};

/// Number of history records a service retains by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// Callback invoked with the current state and context after every
/// processed event, and once on start.
pub type Listener<S, C> = Box<dyn FnMut(&S, &C) + Send>;

/// Lifecycle status of a [`Service`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceStatus {
    NotStarted,
    Running,
    Stopped,
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            Self::NotStarted => "not started",
            Self::Running => "running",
            Self::Stopped => "stopped",
        };
        f.write_str(status)
    }
}

/// A running instance of a [`Machine`].
pub struct Service<S, E, C, A, N>
where
    S: State,
    E: Event,
    C: Context,
    A: Action<C>,
    N: Notifier,
{
    machine: Machine<S, E, C, A>,
    state: S,
    context: C,
    history: StateHistory<S>,
    notifier: N,
    listeners: Vec<Listener<S, C>>,
    status: ServiceStatus,
}

impl<S, E, C, A, N> Service<S, E, C, A, N>
where
    S: State,
    E: Event,
    C: Context,
    A: Action<C>,
    N: Notifier,
{
    /// Create a service for `machine`. It must be started before use.
    pub fn new(machine: Machine<S, E, C, A>, notifier: N) -> Self {
        let state = machine.initial_state().clone();
        let context = machine.initial_context().clone();
        Self {
            machine,
            state,
            context,
            history: StateHistory::with_limit(DEFAULT_HISTORY_LIMIT),
            notifier,
            listeners: Vec::new(),
            status: ServiceStatus::NotStarted,
        }
    }

    /// Retain at most `limit` history records, oldest dropped first.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = StateHistory::with_limit(limit);
        self
    }

    /// Subscribe to transitions.
    pub fn on_transition<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&S, &C) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Start the service from the machine's initial state and context.
    /// Does nothing if already running.
    pub fn start(&mut self) {
        if self.status == ServiceStatus::Running {
            return;
        }

        self.state = self.machine.initial_state().clone();
        self.context = self.machine.initial_context().clone();
        self.history.clear();
        self.status = ServiceStatus::Running;

        info!(
            machine = self.machine.id(),
            state = self.state.name(),
            "Service started"
        );
        self.emit();
    }

    /// Stop accepting events. Does nothing unless running.
    pub fn stop(&mut self) {
        if self.status != ServiceStatus::Running {
            return;
        }

        self.status = ServiceStatus::Stopped;
        info!(
            machine = self.machine.id(),
            state = self.state.name(),
            transitions = self.history.len(),
            "Service stopped"
        );
    }

    /// Process one event to completion.
    ///
    /// Computes the step with the pure machine, emits each action's
    /// notification in order, applies the new state and context, records
    /// the transition and calls listeners. Returns the new state and context.
    pub fn send(&mut self, event: E) -> Result<(&S, &C), ServiceError> {
        if self.status != ServiceStatus::Running {
            warn!(
                machine = self.machine.id(),
                event = event.name(),
                status = %self.status,
                "Event sent to a service that is not running"
            );
            return Err(ServiceError::NotRunning {
                machine: self.machine.id().to_string(),
                status: self.status,
            });
        }

        let step = self
            .machine
            .transition(&self.state, &self.context, &event)
            .inspect_err(|err| warn!(machine = self.machine.id(), %err, "Transition rejected"))?;

        for action in &step.actions {
            if let Some(message) = action.notification() {
                self.notifier.notify(message);
            }
        }

        debug!(
            machine = self.machine.id(),
            from = step.from.name(),
            event = event.name(),
            to = step.to.name(),
            actions = step.actions.len(),
            "Transition"
        );

        self.history.push(StateTransition {
            from: step.from,
            to: step.to.clone(),
            event: event.name().to_string(),
            timestamp: Utc::now(),
        });
        self.state = step.to;
        self.context = step.context;

        self.emit();
        Ok((&self.state, &self.context))
    }

    /// Get current state (pure)
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Get current context (pure)
    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn status(&self) -> ServiceStatus {
        self.status
    }

    /// Get transition history since the last start (pure)
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    pub fn machine(&self) -> &Machine<S, E, C, A> {
        &self.machine
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Copy of the current state and context.
    pub fn snapshot(&self) -> Snapshot<S, C> {
        Snapshot::new(self.state.clone(), self.context.clone())
    }

    fn emit(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.state, &self.context);
        }
    }
}
