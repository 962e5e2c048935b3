//! Builder for a single state's transitions.

use crate::builder::error::BuildError;
use crate::config::StateDef;
use crate::core::{EventId, StateId};

/// Collects the transitions of one state.
///
/// Obtained through [`ConfigBuilder::state`](crate::builder::ConfigBuilder::state).
pub struct StateBuilder {
    id: StateId,
    transitions: Vec<(EventId, StateId)>,
}

impl StateBuilder {
    pub(crate) fn new(id: StateId) -> Self {
        Self {
            id,
            transitions: Vec::new(),
        }
    }

    /// Move to `target` when `event` fires.
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.transitions.push((event.into(), target.into()));
        self
    }

    pub(crate) fn build(self) -> Result<(StateId, StateDef), BuildError> {
        let mut def = StateDef::new();
        for (event, target) in self.transitions {
            if def.handles(event.as_str()) {
                return Err(BuildError::DuplicateTransition {
                    state: self.id,
                    event,
                });
            }
            def.transitions.insert(event, target);
        }
        Ok((self.id, def))
    }
}
