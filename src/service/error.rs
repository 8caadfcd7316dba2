//! Service error types.

use crate::machine::TransitionError;
use crate::service::ServiceStatus;
use thiserror::Error;

/// Errors that can occur when sending events to a service
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// Events are only processed between `start()` and `stop()`
    #[error("Service '{machine}' is not running (status: {status})")]
    NotRunning {
        machine: String,
        status: ServiceStatus,
    },

    #[error(transparent)]
    Transition(#[from] TransitionError),
}
