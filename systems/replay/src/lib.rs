#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Replay step-sequencer and the recorded-action token codec.
//!
//! A replay is a space-separated token string such as `"R0 U2 L1"`: one
//! axis letter followed immediately by a non-negative row or column index,
//! consumed left-to-right, one token per step. The sequencer feeds tokens
//! into the animator one at a time, either manually per [`ReplaySequencer::step`]
//! or automatically while playing, paced by the animator's slide duration.

use std::time::Duration;

use thiserror::Error;
use toroidal_core::{Axis, MoveIntent, MoveSource, Rotation};
use toroidal_system_animation::MoveAnimator;

/// Decodes a recorded action string into move intents.
///
/// Token letters map `R`/`L` to forward/backward row rotations and `D`/`U`
/// to forward/backward column rotations. Whitespace-only input yields an
/// empty list.
pub fn parse_actions(actions: &str) -> Result<Vec<MoveIntent>, TokenError> {
    actions.split_whitespace().map(parse_token).collect()
}

fn parse_token(token: &str) -> Result<MoveIntent, TokenError> {
    let mut chars = token.chars();
    let symbol = chars.next().ok_or_else(|| TokenError::MissingIndex {
        token: token.to_owned(),
    })?;

    let (axis, rotation) = match symbol {
        'R' => (Axis::Row, Rotation::Forward),
        'L' => (Axis::Row, Rotation::Backward),
        'D' => (Axis::Column, Rotation::Forward),
        'U' => (Axis::Column, Rotation::Backward),
        _ => {
            return Err(TokenError::UnknownAxis {
                symbol,
                token: token.to_owned(),
            })
        }
    };

    let digits = chars.as_str();
    if digits.is_empty() {
        return Err(TokenError::MissingIndex {
            token: token.to_owned(),
        });
    }
    let index: usize = digits.parse().map_err(|_| TokenError::InvalidIndex {
        token: token.to_owned(),
    })?;

    Ok(MoveIntent::new(axis, index, rotation))
}

/// Defects in a recorded action string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token's leading letter is not one of `U`, `D`, `L`, `R`.
    #[error("unknown axis symbol {symbol:?} in token {token:?}")]
    UnknownAxis {
        /// The unrecognized leading character.
        symbol: char,
        /// The complete offending token.
        token: String,
    },
    /// The token ends after the axis letter.
    #[error("token {token:?} is missing its index")]
    MissingIndex {
        /// The complete offending token.
        token: String,
    },
    /// The characters after the axis letter are not a non-negative integer.
    #[error("token {token:?} has a malformed index")]
    InvalidIndex {
        /// The complete offending token.
        token: String,
    },
}

/// Signals that the sequencer was advanced past its last action.
///
/// Recoverable by design: `step` surfaces it as a plain no-op and only
/// direct [`ReplaySequencer::next`] callers see the error value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("replay action list is exhausted")]
pub struct ReplayExhausted;

/// Ordered list of recorded moves plus a monotonic cursor.
#[derive(Clone, Debug)]
pub struct ReplaySequencer {
    actions: Vec<MoveIntent>,
    cursor: usize,
    playing: bool,
    since_step: Duration,
}

impl ReplaySequencer {
    /// Creates a sequencer over an already-decoded action list.
    #[must_use]
    pub fn from_actions(actions: Vec<MoveIntent>) -> Self {
        Self {
            actions,
            cursor: 0,
            playing: false,
            since_step: Duration::ZERO,
        }
    }

    /// Creates a sequencer by decoding a recorded action string.
    pub fn parse(actions: &str) -> Result<Self, TokenError> {
        Ok(Self::from_actions(parse_actions(actions)?))
    }

    /// Total number of recorded actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the recorded list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Zero-based position of the next action to consume.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Whether auto-play is currently running.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether any recorded actions remain.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor < self.actions.len()
    }

    /// Returns the action at the cursor and advances it by one.
    pub fn next(&mut self) -> Result<MoveIntent, ReplayExhausted> {
        let intent = self.actions.get(self.cursor).ok_or(ReplayExhausted)?;
        self.cursor += 1;
        Ok(*intent)
    }

    /// Consumes one action and arms the animator with it.
    ///
    /// A no-op returning `false` when the list is exhausted or an animation
    /// is already in flight; the skipped attempt is dropped, never queued.
    pub fn step(&mut self, animator: &mut MoveAnimator) -> bool {
        if !self.has_next() || animator.is_animating() {
            return false;
        }
        match self.next() {
            Ok(intent) => animator.begin(intent, MoveSource::Replay),
            Err(ReplayExhausted) => false,
        }
    }

    /// Starts auto-play with an immediate first step.
    ///
    /// A no-op while already playing or animating. Subsequent steps are
    /// driven by [`ReplaySequencer::poll`].
    pub fn play(&mut self, animator: &mut MoveAnimator) {
        if self.playing || animator.is_animating() {
            return;
        }
        self.playing = true;
        self.since_step = Duration::ZERO;
        if !self.step(animator) && !self.has_next() {
            self.playing = false;
        }
    }

    /// Advances auto-play by `dt` of simulated time.
    ///
    /// One step is attempted per elapsed slide interval; an attempt that
    /// collides with an in-flight animation is dropped and retried on the
    /// next interval. Playback stops by itself once the list is exhausted.
    pub fn poll(&mut self, dt: Duration, animator: &mut MoveAnimator) {
        if !self.playing {
            return;
        }

        self.since_step = self.since_step.saturating_add(dt);
        let pace = animator.slide_time();
        while self.since_step >= pace {
            self.since_step -= pace;
            if !self.has_next() {
                self.playing = false;
                return;
            }
            let _ = self.step(animator);
        }
    }

    /// Rewinds the cursor and stops playback; the recorded list is kept.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.playing = false;
        self.since_step = Duration::ZERO;
    }
}
