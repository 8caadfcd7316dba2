//! The gumball vending machine.
//!
//! Three states, four events and one counter. Every (state, event) pair is
//! handled, so a running gumball service never rejects an event:
//!
//! | State       | Event       | Next state  | Action                       |
//! |-------------|-------------|-------------|------------------------------|
//! | no quarter  | insert      | has quarter | `insertQuarters` (count + 1) |
//! | no quarter  | eject       |             | `notifyInsertQuarter`        |
//! | no quarter  | turn crank  |             | `notifyInsertQuarter`        |
//! | no quarter  | dispense    |             | `notifyInsertQuarter`        |
//! | has quarter | insert      |             | `notifyInsertOnlyOneQuarter` |
//! | has quarter | eject       | no quarter  | `ejectQuarter` (count - 1)   |
//! | has quarter | turn crank  | sold        | `turnCrank`                  |
//! | has quarter | dispense    |             | `notifyCanNotDispense`       |
//! | sold        | insert      |             | `notifyIsDispensing`         |
//! | sold        | eject       |             | `notifyIsDispensing`         |
//! | sold        | turn crank  |             | `notifyIsDispensing`         |
//! | sold        | dispense    | no quarter  | `dispense` (count - 1)       |
//!
//! # Example
//!
//! ```rust
//! use gumball::service::BufferedNotifier;
//! use gumball::vending::{self, GumballEvent, GumballState};
//!
//! let mut service = vending::service(BufferedNotifier::new()).unwrap();
//! service.start();
//!
//! service.send(GumballEvent::Insert).unwrap();
//! let (state, context) = service.send(GumballEvent::TurnCrank).unwrap();
//!
//! assert_eq!(state, &GumballState::Sold);
//! assert_eq!(context.count, 1);
//! ```

mod action;

pub use action::GumballAction;

use crate::builder::{goto, stay, BuildError, MachineBuilder};
use crate::machine::Machine;
use crate::service::{Notifier, Service};
use crate::{event_enum, state_enum};
use serde::{Deserialize, Serialize};

/// Identifier of the gumball machine in logs.
pub const MACHINE_ID: &str = "gumballMachine";

state_enum! {
    /// Where the gumball machine is in a sale.
    pub enum GumballState {
        NoQuarter as "noQuarterState",
        HasQuarter as "hasQuarterState",
        Sold as "soldState",
    }
}

event_enum! {
    /// What a customer can do to the machine.
    pub enum GumballEvent {
        Insert as "INSERT",
        Eject as "EJECT",
        TurnCrank as "TURN_CRANK",
        Dispense as "DISPENSE",
    }
}

/// Quarters currently held by the machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GumballContext {
    pub count: u32,
}

pub type GumballMachine = Machine<GumballState, GumballEvent, GumballContext, GumballAction>;

pub type GumballService<N> =
    Service<GumballState, GumballEvent, GumballContext, GumballAction, N>;

/// Build the gumball machine definition.
///
/// Starts in `NoQuarter` with `count = 0`. The table is checked to cover
/// every state and event.
pub fn machine() -> Result<GumballMachine, BuildError> {
    use GumballEvent::*;
    use GumballState::*;

    MachineBuilder::new()
        .id(MACHINE_ID)
        .initial(NoQuarter)
        .context(GumballContext::default())
        .transitions(vec![
            goto(NoQuarter, Insert, HasQuarter, vec![GumballAction::InsertQuarters]),
            stay(NoQuarter, Eject, vec![GumballAction::NotifyInsertQuarter]),
            stay(NoQuarter, TurnCrank, vec![GumballAction::NotifyInsertQuarter]),
            stay(NoQuarter, Dispense, vec![GumballAction::NotifyInsertQuarter]),
            stay(HasQuarter, Insert, vec![GumballAction::NotifyInsertOnlyOneQuarter]),
            goto(HasQuarter, Eject, NoQuarter, vec![GumballAction::EjectQuarter]),
            goto(HasQuarter, TurnCrank, Sold, vec![GumballAction::TurnCrank]),
            stay(HasQuarter, Dispense, vec![GumballAction::NotifyCanNotDispense]),
            stay(Sold, Insert, vec![GumballAction::NotifyIsDispensing]),
            stay(Sold, Eject, vec![GumballAction::NotifyIsDispensing]),
            stay(Sold, TurnCrank, vec![GumballAction::NotifyIsDispensing]),
            goto(Sold, Dispense, NoQuarter, vec![GumballAction::Dispense]),
        ])
        .exhaustive(GumballState::ALL, GumballEvent::ALL)
        .build()
}

/// Create an unstarted service for the gumball machine.
pub fn service<N: Notifier>(notifier: N) -> Result<GumballService<N>, BuildError> {
    Ok(Service::new(machine()?, notifier))
}
