//! Linear undo/redo history.
//!
//! History is two stacks of previously-active states, most-recent-last.
//! Committing a new change clears the redo stack; only `undo` fills it.

use super::ids::StateId;

/// Undo and redo stacks over state identifiers.
///
/// # Example
///
/// ```rust
/// use rewind::core::{History, StateId};
///
/// let mut history = History::new();
/// let mut current = StateId::from("b");
/// history.commit(StateId::from("a"));
///
/// assert!(history.undo(&mut current));
/// assert_eq!(current, "a");
/// assert_eq!(history.redo_stack(), &[StateId::from("b")]);
///
/// assert!(history.redo(&mut current));
/// assert_eq!(current, "b");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    undo: Vec<StateId>,
    redo: Vec<StateId>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a committed state change.
    ///
    /// Pushes `entry` onto the undo stack and discards any redo history.
    pub fn commit(&mut self, entry: StateId) {
        self.undo.push(entry);
        self.redo.clear();
    }

    /// Step back one entry, swapping it with `current`.
    ///
    /// Returns `false` and leaves `current` untouched when there is nothing
    /// to undo.
    pub fn undo(&mut self, current: &mut StateId) -> bool {
        Self::swap(&mut self.undo, &mut self.redo, current)
    }

    /// Step forward one undone entry, swapping it with `current`.
    ///
    /// Returns `false` and leaves `current` untouched when there is nothing
    /// to redo.
    pub fn redo(&mut self, current: &mut StateId) -> bool {
        Self::swap(&mut self.redo, &mut self.undo, current)
    }

    // Pops `from` into `current`, pushing the displaced value onto `to`.
    fn swap(from: &mut Vec<StateId>, to: &mut Vec<StateId>, current: &mut StateId) -> bool {
        let Some(previous) = from.pop() else {
            return false;
        };
        to.push(std::mem::replace(current, previous));
        true
    }

    /// Forget all undo and redo entries.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Undo entries, oldest first.
    pub fn undo_stack(&self) -> &[StateId] {
        &self.undo
    }

    /// Redo entries, oldest first.
    pub fn redo_stack(&self) -> &[StateId] {
        &self.redo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> StateId {
        StateId::from(s)
    }

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo_stack().is_empty());
        assert!(history.redo_stack().is_empty());
    }

    #[test]
    fn undo_on_empty_history_leaves_current_alone() {
        let mut history = History::new();
        let mut current = id("a");

        assert!(!history.undo(&mut current));
        assert!(!history.redo(&mut current));
        assert_eq!(current, "a");
    }

    #[test]
    fn undo_moves_current_onto_redo() {
        let mut history = History::new();
        let mut current = id("c");
        history.commit(id("a"));
        history.commit(id("b"));

        assert!(history.undo(&mut current));
        assert_eq!(current, "b");
        assert_eq!(history.undo_stack(), &[id("a")]);
        assert_eq!(history.redo_stack(), &[id("c")]);

        assert!(history.undo(&mut current));
        assert_eq!(current, "a");
        assert_eq!(history.redo_stack(), &[id("c"), id("b")]);
    }

    #[test]
    fn commit_clears_redo() {
        let mut history = History::new();
        let mut current = id("b");
        history.commit(id("a"));
        assert!(history.undo(&mut current));
        assert!(history.can_redo());

        history.commit(id("a"));
        assert!(!history.can_redo());
        assert_eq!(history.undo_stack(), &[id("a")]);
    }

    #[test]
    fn redo_is_inverse_of_undo() {
        let mut history = History::new();
        let mut current = id("b");
        history.commit(id("a"));
        let before = history.clone();

        assert!(history.undo(&mut current));
        assert!(history.redo(&mut current));

        assert_eq!(current, "b");
        assert_eq!(history, before);
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut history = History::new();
        let mut current = id("c");
        history.commit(id("a"));
        history.commit(id("b"));
        assert!(history.undo(&mut current));

        history.clear();

        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(current, "b");
    }
}
