//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and the [`fsm_config!`](crate::fsm_config)
//! macro for declaring machines without writing maps by hand.

pub mod config;
pub mod error;
pub mod macros;
pub mod state;

pub use config::ConfigBuilder;
pub use error::BuildError;
pub use state::StateBuilder;

use crate::config::Config;
use crate::core::StateId;

/// Create a configuration whose states form a cycle on a single event.
///
/// Each state moves to the next one on `event`; the last moves back to the
/// first. The first state is the initial one.
///
/// # Example
///
/// ```
/// use rewind::builder::cycle;
/// use rewind::Fsm;
///
/// let mut light = Fsm::new(cycle("next", ["red", "green", "yellow"]).unwrap());
///
/// light.trigger("next").unwrap();
/// light.trigger("next").unwrap();
/// light.trigger("next").unwrap();
/// assert_eq!(light.get_state(), "red");
/// ```
pub fn cycle<I, S>(event: &str, states: I) -> Result<Config, BuildError>
where
    I: IntoIterator<Item = S>,
    S: Into<StateId>,
{
    let ids: Vec<StateId> = states.into_iter().map(Into::into).collect();
    let first = ids.first().cloned().ok_or(BuildError::NoStates)?;

    let mut builder = ConfigBuilder::new().initial(first.clone());
    for (i, id) in ids.iter().enumerate() {
        let next = ids.get(i + 1).unwrap_or(&first).clone();
        builder = builder.state(id.clone(), |s| s.on(event, next));
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_links_states_in_order() {
        let config = cycle("next", ["red", "green", "yellow"]).unwrap();

        assert_eq!(config.initial, "red");
        assert_eq!(config.state("red").unwrap().target("next").unwrap(), "green");
        assert_eq!(config.state("green").unwrap().target("next").unwrap(), "yellow");
        assert_eq!(config.state("yellow").unwrap().target("next").unwrap(), "red");
        assert!(config.validate().is_success());
    }

    #[test]
    fn cycle_of_one_loops_to_itself() {
        let config = cycle("tick", ["only"]).unwrap();
        assert_eq!(config.state("only").unwrap().target("tick").unwrap(), "only");
    }

    #[test]
    fn empty_cycle_is_rejected() {
        let result = cycle("next", Vec::<&str>::new());
        assert!(matches!(result, Err(BuildError::NoStates)));
    }

    #[test]
    fn repeated_state_in_cycle_is_rejected() {
        let result = cycle("next", ["a", "b", "a"]);
        assert!(matches!(result, Err(BuildError::DuplicateState { .. })));
    }
}
