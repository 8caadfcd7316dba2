//! Actions run by the gumball machine's transitions.

use super::GumballContext;
use crate::core::Action;

pub(crate) const INSERTED: &str = "You inserted a quarter.";
pub(crate) const EJECTED: &str = "Quarter returned.";
pub(crate) const CRANK_TURNED: &str = "You turned the crank.";
pub(crate) const DISPENSED: &str = "A gumball comes rolling out the slot.";
pub(crate) const INSERT_QUARTER: &str = "Please insert a quarter.";
pub(crate) const ONLY_ONE_QUARTER: &str = "You can only insert one quarter.";
pub(crate) const CAN_NOT_DISPENSE: &str = "No gumball can be dispensed yet.";

/// Every action the gumball machine can run.
///
/// Four of them move the quarter count; the rest only notify.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GumballAction {
    InsertQuarters,
    EjectQuarter,
    TurnCrank,
    Dispense,
    NotifyInsertQuarter,
    NotifyInsertOnlyOneQuarter,
    NotifyCanNotDispense,
    NotifyIsDispensing,
}

impl Action<GumballContext> for GumballAction {
    fn name(&self) -> &str {
        match self {
            Self::InsertQuarters => "insertQuarters",
            Self::EjectQuarter => "ejectQuarter",
            Self::TurnCrank => "turnCrank",
            Self::Dispense => "dispense",
            Self::NotifyInsertQuarter => "notifyInsertQuarter",
            Self::NotifyInsertOnlyOneQuarter => "notifyInsertOnlyOneQuarter",
            Self::NotifyCanNotDispense => "notifyCanNotDispense",
            Self::NotifyIsDispensing => "notifyIsDispensing",
        }
    }

    fn assign(&self, context: &GumballContext) -> GumballContext {
        // count stays within 0..=1 under the gumball table
        match self {
            Self::InsertQuarters => GumballContext {
                count: context.count.saturating_add(1),
            },
            Self::EjectQuarter | Self::Dispense => GumballContext {
                count: context.count.saturating_sub(1),
            },
            _ => *context,
        }
    }

    fn notification(&self) -> Option<&str> {
        let message = match self {
            Self::InsertQuarters => INSERTED,
            Self::EjectQuarter => EJECTED,
            Self::TurnCrank => CRANK_TURNED,
            Self::Dispense | Self::NotifyIsDispensing => DISPENSED,
            Self::NotifyInsertQuarter => INSERT_QUARTER,
            Self::NotifyInsertOnlyOneQuarter => ONLY_ONE_QUARTER,
            Self::NotifyCanNotDispense => CAN_NOT_DISPENSE,
        };
        Some(message)
    }
}
