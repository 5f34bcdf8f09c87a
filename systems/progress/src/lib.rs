#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Move and step counters driven by committed-move events.
//!
//! Player commits raise the move counter, undo commits lower it, and
//! replay commits raise a separate step counter. The medal lookup walks the
//! rating bands in order: a value must exceed the lower bound and not exceed
//! the upper bound of a band, so a count of zero earns no medal.

use toroidal_core::{Event, MoveSource, Rating};

/// Medal earned for a finished puzzle, best first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Medal {
    /// Solved within the gold threshold.
    Gold,
    /// Solved within the silver threshold.
    Silver,
    /// Solved within the bronze threshold.
    Bronze,
    /// Outside every threshold.
    None,
}

/// Pure counter system fed from world event batches.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProgressMonitor {
    moves: u32,
    steps: u32,
    solved: bool,
    rating: Rating,
}

impl ProgressMonitor {
    /// Creates a monitor with the default rating thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a monitor with the level's own rating thresholds.
    #[must_use]
    pub fn with_rating(rating: Rating) -> Self {
        Self {
            rating,
            ..Self::default()
        }
    }

    /// Net number of player moves: commits minus undos.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Number of replay steps consumed.
    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Whether a goal-reached event has been observed since the last reset.
    #[must_use]
    pub fn solved(&self) -> bool {
        self.solved
    }

    /// Consumes a world event batch and updates the counters.
    pub fn observe(&mut self, events: &[Event]) {
        for event in events {
            match event {
                Event::MoveCommitted { source, .. } => match source {
                    MoveSource::Player => self.moves = self.moves.saturating_add(1),
                    MoveSource::Undo => self.moves = self.moves.saturating_sub(1),
                    MoveSource::Replay => self.steps = self.steps.saturating_add(1),
                },
                Event::GoalReached => self.solved = true,
                Event::PuzzleReset => {
                    self.moves = 0;
                    self.steps = 0;
                    self.solved = false;
                }
            }
        }
    }

    /// Medal band the current move counter falls into.
    #[must_use]
    pub fn medal(&self) -> Medal {
        let bands = [
            (self.rating.gold, Medal::Gold),
            (self.rating.silver, Medal::Silver),
            (self.rating.bronze, Medal::Bronze),
        ];

        let mut left = 0;
        for (right, medal) in bands {
            if self.moves > left && self.moves <= right {
                return medal;
            }
            left = right;
        }
        Medal::None
    }
}
