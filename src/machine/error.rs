//! Errors raised by engine operations.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// Errors that can occur when moving the machine between states.
///
/// Every error leaves the machine exactly as it was before the call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    /// `change_state` named a state that is not configured
    #[error("Unknown state '{state}'")]
    InvalidState { state: StateId },

    /// `trigger` named an event the current state has no transition for
    #[error("No transition for event '{event}' from state '{state}'")]
    InvalidTransition { state: StateId, event: EventId },
}
