//! Opt-in consistency checks for configurations.
//!
//! The engine accepts any configuration and only checks membership lazily.
//! Callers that want strict configurations run [`Config::validate`] up front
//! (or use [`Fsm::strict`](crate::machine::Fsm::strict)). All violations are
//! accumulated with Stillwater's `Validation` instead of stopping at the first.

use crate::config::Config;
use crate::core::{EventId, StateId};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;
use tracing::trace;

/// A single inconsistency found in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Initial state '{initial}' is not a declared state")]
    UnknownInitial { initial: StateId },

    #[error("Transition '{event}' from '{state}' targets undeclared state '{target}'")]
    DanglingTarget {
        state: StateId,
        event: EventId,
        target: StateId,
    },
}

impl Config {
    /// Check that the initial state and every transition target are declared.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::config::{Config, ConfigViolation, StateDef};
    /// use stillwater::validation::Validation;
    ///
    /// let config = Config::new("a", [("a", StateDef::new().with_transition("go", "nowhere"))]);
    ///
    /// match config.validate() {
    ///     Validation::Failure(violations) => {
    ///         assert_eq!(violations.len(), 1);
    ///         assert!(violations
    ///             .iter()
    ///             .all(|v| matches!(v, ConfigViolation::DanglingTarget { .. })));
    ///     }
    ///     Validation::Success(_) => panic!("expected a dangling target"),
    /// }
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.contains_state(self.initial.as_str()) {
            Validation::success(())
        } else {
            trace!(initial = %self.initial, "initial state is not declared");
            Validation::fail(ConfigViolation::UnknownInitial {
                initial: self.initial.clone(),
            })
        });

        for (state, def) in &self.states {
            for (event, target) in &def.transitions {
                checks.push(if self.contains_state(target.as_str()) {
                    Validation::success(())
                } else {
                    trace!(%state, %event, %target, "transition target is not declared");
                    Validation::fail(ConfigViolation::DanglingTarget {
                        state: state.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    })
                });
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate), flattened into a `Result`.
    pub fn violations(&self) -> Result<(), Vec<ConfigViolation>> {
        match self.validate() {
            Validation::Success(()) => Ok(()),
            Validation::Failure(violations) => Err(violations.iter().cloned().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StateDef;

    fn cat() -> Config {
        Config::new(
            "normal",
            [
                ("normal", StateDef::new().with_transition("lick", "sleeping")),
                ("sleeping", StateDef::new().with_transition("timeout", "normal")),
            ],
        )
    }

    #[test]
    fn consistent_config_passes() {
        assert!(cat().validate().is_success());
        assert_eq!(cat().violations(), Ok(()));
    }

    #[test]
    fn unknown_initial_is_reported() {
        let mut config = cat();
        config.initial = StateId::from("ghost");

        assert_eq!(
            config.violations(),
            Err(vec![ConfigViolation::UnknownInitial {
                initial: StateId::from("ghost"),
            }])
        );
    }

    #[test]
    fn accumulates_all_violations() {
        let config = Config::new(
            "ghost",
            [
                (
                    "normal",
                    StateDef::new()
                        .with_transition("lick", "sleeping")
                        .with_transition("feed", "eating"),
                ),
                ("sleeping", StateDef::new().with_transition("dream", "void")),
            ],
        );

        let result = config.validate();
        assert!(result.is_failure());

        let violations = config.violations().unwrap_err();
        assert_eq!(violations.len(), 3);
        assert!(violations
            .iter()
            .any(|v| matches!(v, ConfigViolation::UnknownInitial { .. })));
        assert!(violations.contains(&ConfigViolation::DanglingTarget {
            state: StateId::from("normal"),
            event: EventId::from("feed"),
            target: StateId::from("eating"),
        }));
        assert!(violations.contains(&ConfigViolation::DanglingTarget {
            state: StateId::from("sleeping"),
            event: EventId::from("dream"),
            target: StateId::from("void"),
        }));
    }

    #[test]
    fn violation_messages_name_the_offender() {
        let violation = ConfigViolation::DanglingTarget {
            state: StateId::from("a"),
            event: EventId::from("go"),
            target: StateId::from("b"),
        };
        assert_eq!(
            violation.to_string(),
            "Transition 'go' from 'a' targets undeclared state 'b'"
        );
    }
}
