//! The FSM engine.
//!
//! [`Fsm`] tracks the current state of a [`Config`](crate::config::Config)
//! and keeps linear undo/redo history over every state change. All operations
//! are synchronous in-memory mutations; failed operations change nothing.

mod engine;
mod error;

pub use engine::Fsm;
pub use error::FsmError;
