//! Builder for constructing configurations.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::config::{Config, StateMap};
use crate::core::StateId;

/// Builder for constructing configurations with a fluent API.
///
/// The builder checks its own usage (missing initial state, duplicate
/// declarations). It does not check that the initial state or transition
/// targets are declared; use [`Config::validate`] for that.
pub struct ConfigBuilder {
    initial: Option<StateId>,
    states: Vec<StateBuilder>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state and configure its transitions.
    pub fn state<F>(mut self, id: impl Into<StateId>, configure: F) -> Self
    where
        F: FnOnce(StateBuilder) -> StateBuilder,
    {
        self.states.push(configure(StateBuilder::new(id.into())));
        self
    }

    /// Declare a state with no outgoing transitions.
    pub fn terminal(self, id: impl Into<StateId>) -> Self {
        self.state(id, |s| s)
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing or a declaration repeats.
    pub fn build(self) -> Result<Config, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut states = StateMap::with_capacity(self.states.len());
        for builder in self.states {
            let (id, def) = builder.build()?;
            if states.contains_key(id.as_str()) {
                return Err(BuildError::DuplicateState { state: id });
            }
            states.insert(id, def);
        }

        Ok(Config { initial, states })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StateDef;

    #[test]
    fn builder_validates_required_fields() {
        let result = ConfigBuilder::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_states() {
        let result = ConfigBuilder::new().initial("normal").build();

        assert!(matches!(result, Err(BuildError::NoStates)));
    }

    #[test]
    fn builder_rejects_duplicate_state() {
        let result = ConfigBuilder::new()
            .initial("normal")
            .terminal("normal")
            .state("normal", |s| s.on("lick", "sleeping"))
            .build();

        assert_eq!(
            result,
            Err(BuildError::DuplicateState {
                state: StateId::from("normal"),
            })
        );
    }

    #[test]
    fn fluent_api_builds_config() {
        let config = ConfigBuilder::new()
            .initial("normal")
            .state("normal", |s| s.on("lick", "sleeping"))
            .state("sleeping", |s| s.on("timeout", "normal"))
            .build()
            .unwrap();

        let expected = Config::new(
            "normal",
            [
                ("normal", StateDef::new().with_transition("lick", "sleeping")),
                ("sleeping", StateDef::new().with_transition("timeout", "normal")),
            ],
        );
        assert_eq!(config, expected);
    }

    #[test]
    fn builder_does_not_check_membership() {
        let config = ConfigBuilder::new()
            .initial("ghost")
            .state("a", |s| s.on("go", "nowhere"))
            .build()
            .unwrap();

        assert_eq!(config.violations().unwrap_err().len(), 2);
    }
}
