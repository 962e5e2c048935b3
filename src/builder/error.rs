//! Build errors for configuration builders.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// Errors that can occur when building a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("State '{state}' is declared more than once")]
    DuplicateState { state: StateId },

    #[error("State '{state}' declares event '{event}' more than once")]
    DuplicateTransition { state: StateId, event: EventId },
}
