//! Rewind: a declarative finite-state machine with undo/redo history
//!
//! A machine is described by a [`Config`]: an initial state and, for each
//! state, the events it reacts to and the state each event leads to. The
//! [`Fsm`] engine tracks the current state, applies transitions and keeps a
//! linear undo/redo history of every state change.
//!
//! # Core Concepts
//!
//! - **Config**: Immutable, insertion-ordered description of states and transitions
//! - **Fsm**: The engine holding the current state and its history
//! - **History**: Two stacks; new changes clear redo, `undo` fills it
//!
//! # Example
//!
//! ```rust
//! use rewind::{Config, Fsm, FsmError};
//!
//! let config = Config::from_json(r#"{
//!     "initial": "normal",
//!     "states": {
//!         "normal":   { "transitions": { "lick": "sleeping" } },
//!         "sleeping": { "transitions": { "timeout": "normal" } }
//!     }
//! }"#)?;
//!
//! let mut cat = Fsm::new(config);
//! cat.trigger("lick")?;
//! assert_eq!(cat.get_state(), "sleeping");
//!
//! assert!(matches!(cat.trigger("lick"), Err(FsmError::InvalidTransition { .. })));
//!
//! assert!(cat.undo());
//! assert!(cat.redo());
//! assert_eq!(cat.get_state(), "sleeping");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use config::{Config, ConfigError, ConfigViolation, StateDef};
pub use core::{EventId, History, StateId};
pub use machine::{Fsm, FsmError};
