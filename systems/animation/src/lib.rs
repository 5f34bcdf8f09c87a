#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Tick-driven slide animation with a single-flight guarantee.
//!
//! The animator interpolates a row or column's visual offset from 0 to one
//! full cell, then emits the logical commit as a [`Command`] once the final
//! tick lands. The two phases are deliberately decoupled: consumers that
//! query the grid mid-slide always observe the pre-move arrangement, and the
//! commit is atomic. Scheduling is the caller's problem; the animator only
//! answers "advance by this much simulated time, here is the current frame".

use std::time::Duration;

use toroidal_core::{Command, MoveIntent, MoveSource};

/// Base slide duration before the speed factor divides it.
const MAX_SLIDE_TIME: Duration = Duration::from_millis(1000);

/// Speed factor applied when none is configured, yielding a 100 ms slide.
const DEFAULT_SPEED_FACTOR: f32 = 10.0;

/// Bounds for the configurable playback speed factor.
const SPEED_FACTOR_RANGE: (f32, f32) = (1.0, 100.0);

/// Drives at most one slide animation at a time.
///
/// A second `begin` while a slide is in flight is silently dropped, never
/// queued, so a move can never double-commit.
#[derive(Debug)]
pub struct MoveAnimator {
    active: Option<ActiveSlide>,
    slide_time: Duration,
}

#[derive(Debug)]
struct ActiveSlide {
    intent: MoveIntent,
    source: MoveSource,
    elapsed: Duration,
}

/// Result of advancing the animator by one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlideFrame {
    /// No slide is in flight.
    Idle,
    /// A slide is mid-flight; `progress` is in `(0, 1)`.
    Sliding {
        /// The move being animated.
        intent: MoveIntent,
        /// Fraction of the slide completed, clamped to 1 on late ticks.
        progress: f32,
    },
    /// The slide just finished and its commit command was emitted.
    Finished {
        /// The move that was committed.
        intent: MoveIntent,
    },
}

impl MoveAnimator {
    /// Creates an animator with the default slide duration.
    #[must_use]
    pub fn new() -> Self {
        let mut animator = Self {
            active: None,
            slide_time: MAX_SLIDE_TIME,
        };
        animator.set_speed(DEFAULT_SPEED_FACTOR);
        animator
    }

    /// Whether a slide is currently in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Duration one full slide takes at the current speed.
    #[must_use]
    pub fn slide_time(&self) -> Duration {
        self.slide_time
    }

    /// Adjusts the playback speed factor; the base duration is divided by it.
    pub fn set_speed(&mut self, factor: f32) {
        let factor = factor.clamp(SPEED_FACTOR_RANGE.0, SPEED_FACTOR_RANGE.1);
        let millis = (MAX_SLIDE_TIME.as_millis() as f32 / factor).round() as u64;
        self.slide_time = Duration::from_millis(millis.max(1));
    }

    /// Arms a slide for the provided move.
    ///
    /// Returns `false` without side effects when a slide is already in
    /// flight.
    pub fn begin(&mut self, intent: MoveIntent, source: MoveSource) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(ActiveSlide {
            intent,
            source,
            elapsed: Duration::ZERO,
        });
        true
    }

    /// Advances the in-flight slide by `dt` of simulated time.
    ///
    /// Returns the frame the renderer should present. When the slide
    /// completes, the logical commit is pushed into `out` exactly once and
    /// the animator returns to idle; a late tick that overshoots the slide
    /// duration clamps to the final frame instead of overshooting visually.
    pub fn advance(&mut self, dt: Duration, out: &mut Vec<Command>) -> SlideFrame {
        let Some(active) = self.active.as_mut() else {
            return SlideFrame::Idle;
        };

        active.elapsed = active.elapsed.saturating_add(dt);
        let progress =
            (active.elapsed.as_secs_f32() / self.slide_time.as_secs_f32()).clamp(0.0, 1.0);
        if progress < 1.0 {
            return SlideFrame::Sliding {
                intent: active.intent,
                progress,
            };
        }

        let intent = active.intent;
        let source = active.source;
        self.active = None;
        out.push(Command::ApplyMove { intent, source });
        SlideFrame::Finished { intent }
    }

    /// Abandons any in-flight slide without committing it.
    pub fn reset(&mut self) {
        self.active = None;
    }
}

impl Default for MoveAnimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{MoveAnimator, SlideFrame};
    use std::time::Duration;
    use toroidal_core::{Axis, Command, MoveIntent, MoveSource, Rotation};

    fn intent() -> MoveIntent {
        MoveIntent::new(Axis::Row, 0, Rotation::Forward)
    }

    #[test]
    fn slide_progresses_then_commits_exactly_once() {
        let mut animator = MoveAnimator::new();
        let mut out = Vec::new();
        assert!(animator.begin(intent(), MoveSource::Player));

        let frame = animator.advance(Duration::from_millis(50), &mut out);
        let SlideFrame::Sliding { progress, .. } = frame else {
            panic!("expected mid-flight frame, got {frame:?}");
        };
        assert!(progress > 0.4 && progress < 0.6);
        assert!(out.is_empty());

        let frame = animator.advance(Duration::from_millis(50), &mut out);
        assert_eq!(frame, SlideFrame::Finished { intent: intent() });
        assert_eq!(
            out,
            vec![Command::ApplyMove {
                intent: intent(),
                source: MoveSource::Player,
            }]
        );
        assert!(!animator.is_animating());
    }

    #[test]
    fn second_begin_while_in_flight_is_dropped() {
        let mut animator = MoveAnimator::new();
        let mut out = Vec::new();
        assert!(animator.begin(intent(), MoveSource::Player));
        assert!(!animator.begin(
            MoveIntent::new(Axis::Column, 1, Rotation::Backward),
            MoveSource::Player,
        ));

        // Run the first slide to completion; only its commit may appear.
        while animator.is_animating() {
            let _ = animator.advance(Duration::from_millis(25), &mut out);
        }
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0],
            Command::ApplyMove {
                intent: intent(),
                source: MoveSource::Player,
            }
        );
    }

    #[test]
    fn late_tick_clamps_to_the_final_frame() {
        let mut animator = MoveAnimator::new();
        let mut out = Vec::new();
        assert!(animator.begin(intent(), MoveSource::Replay));

        let frame = animator.advance(Duration::from_secs(5), &mut out);
        assert_eq!(frame, SlideFrame::Finished { intent: intent() });
        assert_eq!(out.len(), 1);

        // A stray tick after completion is a no-op.
        assert_eq!(
            animator.advance(Duration::from_millis(16), &mut out),
            SlideFrame::Idle
        );
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn speed_factor_divides_the_base_duration() {
        let mut animator = MoveAnimator::new();
        assert_eq!(animator.slide_time(), Duration::from_millis(100));
        animator.set_speed(20.0);
        assert_eq!(animator.slide_time(), Duration::from_millis(50));
        animator.set_speed(0.0);
        assert_eq!(animator.slide_time(), Duration::from_secs(1));
    }

    #[test]
    fn reset_abandons_the_slide_without_committing() {
        let mut animator = MoveAnimator::new();
        let mut out = Vec::new();
        assert!(animator.begin(intent(), MoveSource::Player));
        animator.reset();
        assert!(!animator.is_animating());
        assert_eq!(animator.advance(Duration::from_secs(1), &mut out), SlideFrame::Idle);
        assert!(out.is_empty());
    }
}
