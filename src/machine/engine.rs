//! The state machine engine.

use crate::config::{Config, ConfigError};
use crate::core::{EventId, History, StateId};
use crate::machine::error::FsmError;
use tracing::{debug, trace};

/// Finite-state machine with linear undo/redo history.
///
/// The machine holds an immutable [`Config`], the current state and a
/// [`History`]. Every successful `change_state`, `trigger` or `reset` commits
/// an undo entry and discards redo history.
///
/// # Example
///
/// ```rust
/// use rewind::{fsm_config, Fsm};
///
/// let mut fsm = Fsm::new(fsm_config! {
///     initial: normal,
///     states: {
///         normal => { lick => sleeping },
///         sleeping => { timeout => normal },
///     }
/// });
///
/// assert_eq!(fsm.get_states(None), ["normal", "sleeping"]);
/// assert_eq!(fsm.get_states(Some("lick")), ["normal"]);
///
/// fsm.trigger("lick").unwrap();
/// assert_eq!(fsm.get_state(), "sleeping");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.get_state(), "normal");
/// assert!(!fsm.undo());
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    config: Config,
    current: StateId,
    history: History,
}

impl Fsm {
    /// Create a machine in the configured initial state.
    ///
    /// The configuration is not checked. An initial state missing from the
    /// state set is accepted and only shows up later, as every `trigger`
    /// failing. Use [`Fsm::strict`] to refuse such configurations.
    pub fn new(config: Config) -> Self {
        let current = config.initial.clone();
        Self {
            config,
            current,
            history: History::new(),
        }
    }

    /// Create a machine only if [`Config::validate`] finds no violations.
    pub fn strict(config: Config) -> Result<Self, ConfigError> {
        config
            .violations()
            .map_err(|violations| ConfigError::Invalid { violations })?;
        Ok(Self::new(config))
    }

    /// The active state.
    pub fn get_state(&self) -> &StateId {
        &self.current
    }

    /// Go directly to `target`.
    ///
    /// Fails with [`FsmError::InvalidState`] if `target` is not configured.
    pub fn change_state(&mut self, target: impl AsRef<str>) -> Result<(), FsmError> {
        let target = target.as_ref();
        let Some((next, _)) = self.config.states.get_key_value(target) else {
            debug!(from = %self.current, to = target, "rejected change to unknown state");
            return Err(FsmError::InvalidState {
                state: StateId::from(target),
            });
        };
        let next = next.clone();
        self.commit(next, "change_state");
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    ///
    /// The target is taken from the configuration as-is; it is not checked
    /// against the state set. Fails with [`FsmError::InvalidTransition`] if
    /// the current state has no transition for `event`.
    pub fn trigger(&mut self, event: impl AsRef<str>) -> Result<(), FsmError> {
        let event = event.as_ref();
        let Some(next) = self
            .config
            .state(self.current.as_str())
            .and_then(|def| def.target(event))
        else {
            debug!(state = %self.current, event, "rejected event with no transition");
            return Err(FsmError::InvalidTransition {
                state: self.current.clone(),
                event: EventId::from(event),
            });
        };
        let next = next.clone();
        self.commit(next, "trigger");
        Ok(())
    }

    /// Return to the initial state.
    ///
    /// Unlike `change_state` and `trigger`, this records the *initial* state
    /// as the undo entry rather than the state being left. A single `undo`
    /// after `reset` therefore stays on the initial state; a second one
    /// reaches the state that was active before the reset.
    pub fn reset(&mut self) {
        let from = std::mem::replace(&mut self.current, self.config.initial.clone());
        self.history.commit(self.current.clone());
        debug!(%from, to = %self.current, cause = "reset", "state changed");
    }

    /// Configured state ids in declaration order.
    ///
    /// With `Some(event)`, only states that have a transition for `event`.
    pub fn get_states(&self, event: Option<&str>) -> Vec<&StateId> {
        self.config
            .states
            .iter()
            .filter(|(_, def)| event.is_none_or(|e| def.handles(e)))
            .map(|(id, _)| id)
            .collect()
    }

    /// Go back to the previous state.
    ///
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let from = self.current.clone();
        let moved = self.history.undo(&mut self.current);
        if moved {
            debug!(%from, to = %self.current, cause = "undo", "state changed");
        }
        moved
    }

    /// Re-apply the most recently undone state.
    ///
    /// Returns `false` if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let from = self.current.clone();
        let moved = self.history.redo(&mut self.current);
        if moved {
            debug!(%from, to = %self.current, cause = "redo", "state changed");
        }
        moved
    }

    /// Forget all undo and redo history. The current state is kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
        trace!(state = %self.current, "history cleared");
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn initial(&self) -> &StateId {
        &self.config.initial
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn commit(&mut self, next: StateId, cause: &'static str) {
        let from = std::mem::replace(&mut self.current, next);
        debug!(%from, to = %self.current, cause, "state changed");
        self.history.commit(from);
    }
}
