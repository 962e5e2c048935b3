//! Core identifier and history types.
//!
//! This module contains the building blocks the engine is made of:
//! - `StateId` and `EventId` identifiers
//! - `History`, the linear undo/redo stacks

mod history;
mod ids;

pub use history::History;
pub use ids::{EventId, StateId};
