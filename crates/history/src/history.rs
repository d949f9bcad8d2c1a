use std::fmt;

use stack::BoundedStack;

use crate::error::{Error, Result};

/// Capacity limits for a [HistoryManager]. `None` leaves a stack unbounded.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub undo_capacity: Option<usize>,
    pub redo_capacity: Option<usize>,
}

/// Two-stack undo/redo history.
///
/// Actions move between the undo and the redo stack without being copied. The only operation that
/// drops actions is [HistoryManager::push_action], which discards the redo stack once the caller
/// takes a new action, and [HistoryManager::clear].
#[derive(Clone, Debug)]
pub struct HistoryManager<A> {
    undo: BoundedStack<A>,
    redo: BoundedStack<A>,
}

impl<A> HistoryManager<A> {
    /// Create a history with unbounded undo and redo stacks.
    pub const fn new() -> Self {
        Self {
            undo: BoundedStack::unbounded(),
            redo: BoundedStack::unbounded(),
        }
    }

    pub const fn with_options(options: Options) -> Self {
        Self {
            undo: BoundedStack::empty(options.undo_capacity),
            redo: BoundedStack::empty(options.redo_capacity),
        }
    }

    pub fn options(&self) -> Options {
        Options {
            undo_capacity: self.undo.capacity(),
            redo_capacity: self.redo.capacity(),
        }
    }

    /// The undo and redo stacks, each from base to top.
    pub fn snapshot(&self) -> (&[A], &[A]) {
        (self.undo.as_slice(), self.redo.as_slice())
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    #[inline]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    #[inline]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Drop every action from both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

impl<A> HistoryManager<A>
where
    A: fmt::Display,
{
    /// Record a new action and discard the redo stack.
    ///
    /// Only fails if the undo stack is bounded and full, in which case nothing changes.
    pub fn push_action(&mut self, action: A) -> Result<()> {
        self.undo.push(action)?;
        let action = self.undo.peek()?;
        tracing::trace!(%action, "action added");
        if !self.redo.is_empty() {
            tracing::trace!(discarded = self.redo.len(), "redo history discarded");
            self.redo.clear();
        }
        Ok(())
    }

    /// Move the most recent action to the redo stack and return it.
    pub fn undo(&mut self) -> Result<&A> {
        if self.undo.is_empty() {
            return Err(Error::NothingToUndo);
        }
        let action = transfer(&mut self.undo, &mut self.redo)?;
        tracing::trace!(%action, "undo");
        Ok(action)
    }

    /// Move the most recently undone action back to the undo stack and return it.
    pub fn redo(&mut self) -> Result<&A> {
        if self.redo.is_empty() {
            return Err(Error::NothingToRedo);
        }
        let action = transfer(&mut self.redo, &mut self.undo)?;
        tracing::trace!(%action, "redo");
        Ok(action)
    }
}

impl<A> Default for HistoryManager<A> {
    fn default() -> Self {
        Self::new()
    }
}

// Checks the destination first so a full stack leaves both sides untouched.
fn transfer<'a, A>(
    from: &mut BoundedStack<A>,
    to: &'a mut BoundedStack<A>,
) -> stack::Result<&'a A> {
    if let (true, Some(capacity)) = (to.is_full(), to.capacity()) {
        return Err(stack::Error::CapacityExceeded { capacity });
    }
    let action = from.pop()?;
    to.push(action)?;
    to.peek()
}

#[cfg(test)]
mod tests {
    use super::{HistoryManager, Options};
    use crate::Error;

    #[test]
    fn undo_redo_flow() {
        let mut history = HistoryManager::new();
        history.push_action("A").unwrap();
        history.push_action("B").unwrap();
        history.undo().unwrap();
        history.undo().unwrap();
        history.redo().unwrap();

        let (undo, redo) = history.snapshot();
        assert_eq!(undo, ["A"]);
        assert_eq!(redo, ["B"]);
    }

    #[test]
    fn undo_returns_most_recent() {
        let mut history = HistoryManager::new();
        history.push_action(1).unwrap();
        history.push_action(2).unwrap();
        history.push_action(3).unwrap();
        assert_eq!(history.undo(), Ok(&3));
        assert_eq!(history.undo(), Ok(&2));
        assert_eq!(history.redo(), Ok(&2));
        assert_eq!(history.redo(), Ok(&3));
        assert_eq!(history.redo(), Err(Error::NothingToRedo));
    }

    #[test]
    fn empty_history() {
        let mut history = HistoryManager::<String>::default();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo(), Err(Error::NothingToUndo));
        assert_eq!(history.redo(), Err(Error::NothingToRedo));
        assert_eq!(history.snapshot(), (&[][..], &[][..]));
    }

    #[test]
    fn push_clears_redo() {
        let mut history = HistoryManager::new();
        history.push_action('a').unwrap();
        history.push_action('b').unwrap();
        history.undo().unwrap();
        assert!(history.can_redo());

        history.push_action('c').unwrap();
        assert!(!history.can_redo());
        assert_eq!(history.snapshot(), (&['a', 'c'][..], &[][..]));
    }

    #[test]
    fn push_after_undo_keeps_added_action_on_top() {
        let mut history = HistoryManager::new();
        history.push_action("first".to_owned()).unwrap();
        history.undo().unwrap();
        history.push_action("second".to_owned()).unwrap();
        assert_eq!(history.undo().map(String::as_str), Ok("second"));
        assert_eq!(history.redo_len(), 1);
        assert_eq!(history.undo_len(), 0);
    }

    #[test]
    fn clear_drops_both_stacks() {
        let mut history = HistoryManager::new();
        history.push_action(1).unwrap();
        history.push_action(2).unwrap();
        history.undo().unwrap();
        history.clear();
        assert_eq!(history.undo_len(), 0);
        assert_eq!(history.redo_len(), 0);
    }

    #[test]
    fn full_undo_stack_rejects_push() {
        let options = Options {
            undo_capacity: Some(2),
            redo_capacity: None,
        };
        let mut history = HistoryManager::with_options(options);
        assert_eq!(history.options(), options);
        history.push_action(1).unwrap();
        history.push_action(2).unwrap();
        assert_eq!(
            history.push_action(3),
            Err(Error::Stack(stack::Error::CapacityExceeded { capacity: 2 }))
        );
        assert_eq!(history.snapshot(), (&[1, 2][..], &[][..]));

        history.undo().unwrap();
        history.push_action(3).unwrap();
        assert_eq!(history.snapshot(), (&[1, 3][..], &[][..]));
    }

    #[test]
    fn full_redo_stack_blocks_undo() {
        let mut history = HistoryManager::with_options(Options {
            undo_capacity: None,
            redo_capacity: Some(1),
        });
        history.push_action("x").unwrap();
        history.push_action("y").unwrap();
        history.undo().unwrap();
        assert_eq!(
            history.undo(),
            Err(Error::Stack(stack::Error::CapacityExceeded { capacity: 1 }))
        );
        assert_eq!(history.snapshot(), (&["x"][..], &["y"][..]));
        assert_eq!(history.redo(), Ok(&"y"));
    }
}
