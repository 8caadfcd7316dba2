//! Gumball: a vending machine modeled as a pure finite state machine
//!
//! The crate follows the "pure core, imperative shell" philosophy. Machine
//! definitions and the transition function are pure values and functions;
//! a [`Service`](service::Service) interprets a definition, emitting action
//! notifications through a [`Notifier`](service::Notifier) and reporting
//! every transition to its listeners.
//!
//! # Core Concepts
//!
//! - **State** / **Event**: type-safe enums via the `State` and `Event` traits
//! - **Action**: a pure context update paired with a notification message
//! - **Machine**: a complete (state, event) → (next state, actions) table
//! - **Service**: the running interpreter with history and listeners
//!
//! # Example
//!
//! ```rust
//! use gumball::service::BufferedNotifier;
//! use gumball::vending::{self, GumballEvent, GumballState};
//!
//! let mut service = vending::service(BufferedNotifier::new())?;
//! service.start();
//!
//! for event in [GumballEvent::Insert, GumballEvent::TurnCrank, GumballEvent::Dispense] {
//!     service.send(event)?;
//! }
//!
//! assert_eq!(service.state(), &GumballState::NoQuarter);
//! assert_eq!(service.context().count, 0);
//! assert_eq!(service.notifier().messages().len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod service;
pub mod vending;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder, TransitionBuilder};
pub use crate::core::{Action, Context, Event, State, StateHistory, StateTransition};
pub use machine::{Machine, Step, Transition, TransitionError};
pub use service::{Service, ServiceError, Snapshot};
