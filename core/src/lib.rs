#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the toroidal puzzle engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. The gesture recognizer and the
//! replay sequencer produce [`MoveIntent`] values, the animator turns a
//! finished slide into a [`Command`], the world executes commands via its
//! `apply` entry point and broadcasts [`Event`] values that counters and
//! renderers react to deterministically.

pub mod level;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use level::{LevelDefinition, LevelError, Rating, ReplayDefinition};

/// The two directions a row or column can rotate along its axis.
///
/// `Forward` moves the element at index 0 to the last index of the axis and
/// shifts every other element down one index; `Backward` is the exact
/// inverse. Both wrap, so four forward rotations of a 4-length axis are the
/// identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    /// Rotation that carries the element at index 0 to the end of the axis.
    Forward,
    /// Rotation that carries the element at the end of the axis to index 0.
    Backward,
}

impl Rotation {
    /// Returns the rotation that exactly reverses this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    /// Sign of the visual offset a slide in this rotation applies, matching
    /// the drag direction that produces it on release.
    #[must_use]
    pub const fn offset_sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// The axis a move operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// A whole row slides horizontally.
    Row,
    /// A whole column slides vertically.
    Column,
}

/// A single discrete move: one row or column rotated one cell.
///
/// Produced exactly once per committed gesture, read from a replay token
/// list, or popped from the undo stack; consumed exactly once by the
/// animator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveIntent {
    axis: Axis,
    index: usize,
    rotation: Rotation,
}

impl MoveIntent {
    /// Creates a new move intent.
    #[must_use]
    pub const fn new(axis: Axis, index: usize, rotation: Rotation) -> Self {
        Self {
            axis,
            index,
            rotation,
        }
    }

    /// Axis the move rotates along.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Zero-based row or column index the move applies to.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Direction of the rotation.
    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// The move that exactly undoes this one: same axis and index, opposite
    /// rotation.
    #[must_use]
    pub const fn inverse(&self) -> Self {
        Self {
            axis: self.axis,
            index: self.index,
            rotation: self.rotation.opposite(),
        }
    }
}

/// Where a committed move originated, distinguishing counter updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveSource {
    /// The player completed a drag gesture.
    Player,
    /// The undo stack replayed an inverse entry.
    Undo,
    /// The replay sequencer consumed a recorded token.
    Replay,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Commits one finished slide into the logical grid.
    ApplyMove {
        /// The move whose animation just completed.
        intent: MoveIntent,
        /// Origin of the move, carried through to the resulting event.
        source: MoveSource,
    },
    /// Restores the puzzle to its initial arrangement.
    ResetPuzzle,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that a move was committed into the logical grid.
    MoveCommitted {
        /// The move that was applied.
        intent: MoveIntent,
        /// Origin of the move, used by counters.
        source: MoveSource,
    },
    /// Announces that the grid now matches the goal arrangement.
    GoalReached,
    /// Confirms that the puzzle was restored to its initial arrangement.
    PuzzleReset,
}

/// Location of a single grid cell expressed as row and column indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    row: usize,
    col: usize,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }
}

/// Identifier of a tile image occupying one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(u16);

impl TileId {
    /// Creates a new tile identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }
}

/// Stage of a pointer gesture, normalized from mouse or touch input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// The pointer went down.
    Press,
    /// The pointer moved while down.
    Move,
    /// The pointer was lifted.
    Release,
}

/// One raw pointer sample in the board's coordinate space.
///
/// Adapters translate both mouse and touch events into this shape before
/// feeding the gesture recognizer; the recognizer never sees the original
/// event source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Stage of the gesture this sample belongs to.
    pub phase: PointerPhase,
    /// Horizontal pixel position.
    pub x: f32,
    /// Vertical pixel position.
    pub y: f32,
}

impl PointerSample {
    /// Convenience constructor for a sample at the given position.
    #[must_use]
    pub const fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self { phase, x, y }
    }
}

/// Contract violations raised by grid operations.
///
/// These are programmer errors: a correctly bounded gesture recognizer and a
/// validated level definition never produce them, but they must fail loudly
/// when they do occur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// A rotation or lookup named an index outside the grid bounds.
    #[error("index {index} out of range for {axis:?} axis of length {len}")]
    OutOfRange {
        /// Axis the offending index addressed.
        axis: Axis,
        /// The out-of-range index.
        index: usize,
        /// Number of valid indices along that axis.
        len: usize,
    },
    /// Two grids of different shape were compared or copied.
    #[error("grid dimensions differ: {expected_rows}x{expected_cols} vs {actual_rows}x{actual_cols}")]
    DimensionMismatch {
        /// Row count of the grid the operation was invoked on.
        expected_rows: usize,
        /// Column count of the grid the operation was invoked on.
        expected_cols: usize,
        /// Row count of the other grid.
        actual_rows: usize,
        /// Column count of the other grid.
        actual_cols: usize,
    },
}
