//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every state, the events
//! it reacts to and where each event leads. State declaration order is kept
//! and is observable through [`Fsm::get_states`](crate::machine::Fsm::get_states).
//!
//! The serialized shape is plain JSON:
//!
//! ```json
//! {
//!   "initial": "normal",
//!   "states": {
//!     "normal":   { "transitions": { "lick": "sleeping" } },
//!     "sleeping": { "transitions": { "timeout": "normal" } }
//!   }
//! }
//! ```

use crate::core::{EventId, StateId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub mod error;
pub mod validate;

pub use error::ConfigError;
pub use validate::ConfigViolation;

/// States keyed by identifier, in declaration order.
pub type StateMap = IndexMap<StateId, StateDef>;

/// Transitions of one state keyed by event, in declaration order.
pub type TransitionMap = IndexMap<EventId, StateId>;

/// Definition of a single state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    /// Event → target state. Targets are not checked against the state set.
    #[serde(default)]
    pub transitions: TransitionMap,
}

impl StateDef {
    /// A state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, replacing any earlier target for the same event.
    pub fn with_transition(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target of `event`, if this state has a transition for it.
    pub fn target(&self, event: &str) -> Option<&StateId> {
        self.transitions.get(event)
    }

    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Immutable configuration an [`Fsm`](crate::machine::Fsm) is built from.
///
/// # Example
///
/// ```rust
/// use rewind::config::{Config, StateDef};
///
/// let config = Config::new(
///     "normal",
///     [
///         ("normal", StateDef::new().with_transition("lick", "sleeping")),
///         ("sleeping", StateDef::new().with_transition("timeout", "normal")),
///     ],
/// );
///
/// assert!(config.contains_state("sleeping"));
/// assert_eq!(config.state("normal").unwrap().target("lick").unwrap(), "sleeping");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub initial: StateId,
    pub states: StateMap,
}

impl Config {
    /// Build a configuration from an initial state and `(id, definition)` pairs.
    ///
    /// A repeated id keeps its first position and its last definition.
    pub fn new<I, K>(initial: impl Into<StateId>, states: I) -> Self
    where
        I: IntoIterator<Item = (K, StateDef)>,
        K: Into<StateId>,
    {
        Self {
            initial: initial.into(),
            states: states.into_iter().map(|(id, def)| (id.into(), def)).collect(),
        }
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a configuration from a JSON byte stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn state(&self, id: &str) -> Option<&StateDef> {
        self.states.get(id)
    }

    pub fn contains_state(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }
}
