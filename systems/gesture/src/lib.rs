#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Drag-gesture state machine that turns pointer samples into move intents.
//!
//! A gesture walks `Idle → Pressed → {CommittedHorizontal |
//! CommittedVertical} → Idle`. The horizontal/vertical ambiguity is resolved
//! exactly once per gesture: once an axis is committed, the other axis stays
//! disabled until release, no matter how the pointer moves afterwards.
//! Before commitment the recognizer produces nothing; after commitment each
//! move sample yields an incremental pixel delta for the drag preview, and
//! release yields at most one [`MoveIntent`].

use toroidal_core::{Axis, CellCoord, MoveIntent, PointerPhase, PointerSample, Rotation};

/// Border inset applied around the board before hit-testing presses.
const DEFAULT_PADDING: f32 = 5.0;

/// Minimum capped displacement, in pixels, before a drag commits to an axis.
const SWIPE_THRESHOLD: f32 = 10.0;

/// Pixel layout of the board the recognizer hit-tests against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardGeometry {
    left: f32,
    top: f32,
    cell_width: f32,
    cell_height: f32,
    rows: usize,
    cols: usize,
    padding: f32,
}

impl BoardGeometry {
    /// Describes a board whose outer rectangle starts at `(left, top)`.
    ///
    /// The active area is the outer rectangle inset by the default border
    /// padding; `(left + padding, top + padding)` is the pixel origin of cell
    /// `(0, 0)`.
    #[must_use]
    pub const fn new(
        left: f32,
        top: f32,
        cell_width: f32,
        cell_height: f32,
        rows: usize,
        cols: usize,
    ) -> Self {
        Self {
            left,
            top,
            cell_width,
            cell_height,
            rows,
            cols,
            padding: DEFAULT_PADDING,
        }
    }

    /// Width of one cell in pixels.
    #[must_use]
    pub const fn cell_width(&self) -> f32 {
        self.cell_width
    }

    /// Height of one cell in pixels.
    #[must_use]
    pub const fn cell_height(&self) -> f32 {
        self.cell_height
    }

    fn active_left(&self) -> f32 {
        self.left + self.padding
    }

    fn active_top(&self) -> f32 {
        self.top + self.padding
    }

    fn contains(&self, x: f32, y: f32) -> bool {
        let right = self.active_left() + self.cols as f32 * self.cell_width;
        let bottom = self.active_top() + self.rows as f32 * self.cell_height;
        x > self.active_left() && x < right && y > self.active_top() && y < bottom
    }

    fn cell_at(&self, x: f32, y: f32) -> CellCoord {
        let col = ((x - self.active_left()) / self.cell_width).floor() as usize;
        let row = ((y - self.active_top()) / self.cell_height).floor() as usize;
        CellCoord::new(row.min(self.rows - 1), col.min(self.cols - 1))
    }
}

/// Externally observable phase of the gesture state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// No gesture is active.
    Idle,
    /// The pointer is down but no axis has been committed yet.
    Pressed,
    /// The gesture committed to a horizontal row slide.
    CommittedHorizontal,
    /// The gesture committed to a vertical column slide.
    CommittedVertical,
}

/// What a pointer sample produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    /// Nothing to act on: pre-commitment motion, taps, or presses outside
    /// the board.
    Ignored,
    /// Incremental drag-preview delta for the committed strip, in pixels.
    ///
    /// This is the change since the previous sample, not the absolute
    /// displacement, and it is not a move intent.
    Preview {
        /// Axis the committed strip slides along.
        axis: Axis,
        /// Row or column index of the strip.
        index: usize,
        /// Pixel delta to add to the strip's visual offset.
        delta: f32,
    },
    /// The gesture completed and produced exactly one move intent.
    Move(MoveIntent),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ActivePhase {
    Pressed,
    CommittedHorizontal,
    CommittedVertical,
}

#[derive(Clone, Copy, Debug)]
struct ActiveGesture {
    phase: ActivePhase,
    start_x: f32,
    start_y: f32,
    // Last capped absolute position, so preview deltas stay incremental and
    // stop accumulating once the swipe exceeds one cell.
    dragged_x: f32,
    dragged_y: f32,
    cell: CellCoord,
}

/// Recognizes one drag gesture at a time over a fixed board geometry.
#[derive(Clone, Copy, Debug)]
pub struct GestureRecognizer {
    geometry: BoardGeometry,
    active: Option<ActiveGesture>,
}

impl GestureRecognizer {
    /// Creates a recognizer for the provided board geometry.
    #[must_use]
    pub const fn new(geometry: BoardGeometry) -> Self {
        Self {
            geometry,
            active: None,
        }
    }

    /// Current phase, exposed for composition and tests.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self.active {
            None => GesturePhase::Idle,
            Some(active) => match active.phase {
                ActivePhase::Pressed => GesturePhase::Pressed,
                ActivePhase::CommittedHorizontal => GesturePhase::CommittedHorizontal,
                ActivePhase::CommittedVertical => GesturePhase::CommittedVertical,
            },
        }
    }

    /// Cell the active gesture selected at press time, if any.
    #[must_use]
    pub fn selected_cell(&self) -> Option<CellCoord> {
        self.active.map(|active| active.cell)
    }

    /// Feeds one normalized pointer sample through the state machine.
    pub fn sample(&mut self, sample: PointerSample) -> GestureOutcome {
        match sample.phase {
            PointerPhase::Press => self.press(sample.x, sample.y),
            PointerPhase::Move => self.drag(sample.x, sample.y),
            PointerPhase::Release => self.release(sample.x, sample.y),
        }
    }

    /// Handles the pointer leaving the tracked area mid-gesture.
    ///
    /// Treated as an implicit release at the last known position, so a
    /// gesture can never be left stuck in `Pressed`.
    pub fn pointer_left(&mut self) -> GestureOutcome {
        let Some(active) = self.active else {
            return GestureOutcome::Ignored;
        };
        self.release(active.dragged_x, active.dragged_y)
    }

    /// Abandons any active gesture, used on puzzle reset.
    pub fn reset(&mut self) {
        self.active = None;
    }

    fn press(&mut self, x: f32, y: f32) -> GestureOutcome {
        // One gesture at a time; a press mid-gesture is dropped.
        if self.active.is_some() || !self.geometry.contains(x, y) {
            return GestureOutcome::Ignored;
        }

        self.active = Some(ActiveGesture {
            phase: ActivePhase::Pressed,
            start_x: x,
            start_y: y,
            dragged_x: x,
            dragged_y: y,
            cell: self.geometry.cell_at(x, y),
        });
        GestureOutcome::Ignored
    }

    fn drag(&mut self, x: f32, y: f32) -> GestureOutcome {
        let Some(active) = self.active.as_mut() else {
            return GestureOutcome::Ignored;
        };

        // A swipe moves at most one full cell logically, regardless of how
        // far the pointer travels.
        let capped_dx = cap(x - active.start_x, self.geometry.cell_width);
        let capped_dy = cap(y - active.start_y, self.geometry.cell_height);
        let capped_x = active.start_x + capped_dx;
        let capped_y = active.start_y + capped_dy;
        let delta_x = capped_x - active.dragged_x;
        let delta_y = capped_y - active.dragged_y;

        match active.phase {
            ActivePhase::Pressed => {
                // Axis commitment, decided exactly once. The horizontal test
                // is strict while the vertical one is not: an exact tie in
                // magnitudes commits vertical.
                if capped_dx.abs() > capped_dy.abs() && capped_dx.abs() > SWIPE_THRESHOLD {
                    active.phase = ActivePhase::CommittedHorizontal;
                    active.dragged_x = capped_x;
                    active.dragged_y = capped_y;
                    GestureOutcome::Preview {
                        axis: Axis::Row,
                        index: active.cell.row(),
                        delta: delta_x,
                    }
                } else if capped_dy.abs() >= capped_dx.abs() && capped_dy.abs() > SWIPE_THRESHOLD {
                    active.phase = ActivePhase::CommittedVertical;
                    active.dragged_x = capped_x;
                    active.dragged_y = capped_y;
                    GestureOutcome::Preview {
                        axis: Axis::Column,
                        index: active.cell.col(),
                        delta: delta_y,
                    }
                } else {
                    // Could be an ambiguous nudge; decide on a later sample.
                    GestureOutcome::Ignored
                }
            }
            ActivePhase::CommittedHorizontal => {
                active.dragged_x = capped_x;
                active.dragged_y = capped_y;
                GestureOutcome::Preview {
                    axis: Axis::Row,
                    index: active.cell.row(),
                    delta: delta_x,
                }
            }
            ActivePhase::CommittedVertical => {
                active.dragged_x = capped_x;
                active.dragged_y = capped_y;
                GestureOutcome::Preview {
                    axis: Axis::Column,
                    index: active.cell.col(),
                    delta: delta_y,
                }
            }
        }
    }

    fn release(&mut self, x: f32, y: f32) -> GestureOutcome {
        let Some(active) = self.active.take() else {
            return GestureOutcome::Ignored;
        };

        match active.phase {
            // Never committed: a tap, not a move.
            ActivePhase::Pressed => GestureOutcome::Ignored,
            ActivePhase::CommittedHorizontal => {
                let rotation = rotation_for(x - active.start_x);
                GestureOutcome::Move(MoveIntent::new(Axis::Row, active.cell.row(), rotation))
            }
            ActivePhase::CommittedVertical => {
                let rotation = rotation_for(y - active.start_y);
                GestureOutcome::Move(MoveIntent::new(Axis::Column, active.cell.col(), rotation))
            }
        }
    }
}

fn cap(displacement: f32, limit: f32) -> f32 {
    displacement.signum() * displacement.abs().min(limit)
}

fn rotation_for(net_displacement: f32) -> Rotation {
    if net_displacement > 0.0 {
        Rotation::Forward
    } else {
        Rotation::Backward
    }
}
