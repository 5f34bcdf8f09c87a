#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Undo stack for player-committed moves.
//!
//! Every player-initiated commit pushes its inverse onto the stack; undoing
//! pops one entry and feeds it straight back through the animator, so an
//! undo goes through the same slide-then-commit path as a regular move.
//! Undo commits are never pushed back, so there is no redo.

use toroidal_core::{Event, MoveIntent, MoveSource};
use toroidal_system_animation::MoveAnimator;

/// Stack of inverse moves in commit order.
#[derive(Clone, Debug, Default)]
pub struct UndoStack {
    entries: Vec<MoveIntent>,
}

impl UndoStack {
    /// Creates an empty undo stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of undoable moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pushes an already-inverted entry, newest last.
    pub fn push(&mut self, entry: MoveIntent) {
        self.entries.push(entry);
    }

    /// Removes and returns the most recent entry, if any.
    pub fn pop(&mut self) -> Option<MoveIntent> {
        self.entries.pop()
    }

    /// Drops all entries, used on puzzle reset.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Records the inverses of player-committed moves from a world event
    /// batch. Undo- and replay-sourced commits are deliberately not
    /// recorded.
    pub fn observe(&mut self, events: &[Event]) {
        for event in events {
            match event {
                Event::MoveCommitted {
                    intent,
                    source: MoveSource::Player,
                } => self.push(intent.inverse()),
                Event::PuzzleReset => self.clear(),
                _ => {}
            }
        }
    }

    /// Replays the most recent inverse through the animator.
    ///
    /// A no-op returning `false` while an animation is in flight or the
    /// stack is empty; the popped entry is otherwise handed to the animator
    /// with [`MoveSource::Undo`] so counters can tell it apart.
    pub fn undo(&mut self, animator: &mut MoveAnimator) -> bool {
        if animator.is_animating() {
            return false;
        }
        match self.entries.pop() {
            Some(entry) => animator.begin(entry, MoveSource::Undo),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UndoStack;
    use std::time::Duration;
    use toroidal_core::{Axis, Event, MoveIntent, MoveSource, Rotation};
    use toroidal_system_animation::MoveAnimator;

    fn row_forward(index: usize) -> MoveIntent {
        MoveIntent::new(Axis::Row, index, Rotation::Forward)
    }

    #[test]
    fn observe_records_only_player_commits() {
        let mut stack = UndoStack::new();
        stack.observe(&[
            Event::MoveCommitted {
                intent: row_forward(0),
                source: MoveSource::Player,
            },
            Event::MoveCommitted {
                intent: row_forward(1),
                source: MoveSource::Replay,
            },
            Event::MoveCommitted {
                intent: row_forward(2),
                source: MoveSource::Undo,
            },
        ]);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.pop(), Some(row_forward(0).inverse()));
    }

    #[test]
    fn undo_is_rejected_while_animating() {
        let mut stack = UndoStack::new();
        stack.push(row_forward(0).inverse());

        let mut animator = MoveAnimator::new();
        assert!(animator.begin(row_forward(1), MoveSource::Player));
        assert!(!stack.undo(&mut animator));
        // The entry is still there for when the animation settles.
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn undo_on_an_empty_stack_is_a_no_op() {
        let mut stack = UndoStack::new();
        let mut animator = MoveAnimator::new();
        assert!(!stack.undo(&mut animator));
        assert!(!animator.is_animating());
    }

    #[test]
    fn undo_feeds_the_inverse_through_the_animator() {
        let mut stack = UndoStack::new();
        stack.push(row_forward(0).inverse());

        let mut animator = MoveAnimator::new();
        assert!(stack.undo(&mut animator));
        assert!(stack.is_empty());
        assert!(animator.is_animating());

        let mut commands = Vec::new();
        let _ = animator.advance(Duration::from_secs(1), &mut commands);
        assert_eq!(
            commands,
            vec![toroidal_core::Command::ApplyMove {
                intent: row_forward(0).inverse(),
                source: MoveSource::Undo,
            }]
        );
    }

    #[test]
    fn reset_event_clears_the_stack() {
        let mut stack = UndoStack::new();
        stack.push(row_forward(0));
        stack.observe(&[Event::PuzzleReset]);
        assert!(stack.is_empty());
    }
}
