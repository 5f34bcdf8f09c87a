#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for toroidal puzzle adapters.
//!
//! The core notifies renderers through two shapes: incremental per-strip
//! pixel offsets while a drag preview or slide animation is in flight, and a
//! full-redraw signal once a move commits or the puzzle resets. This crate
//! defines those shapes and the pixel geometry, keeping every concrete
//! backend behind the [`ScenePresenter`] trait.

use anyhow::Result as AnyResult;
use glam::Vec2;
use toroidal_core::{Axis, CellCoord, MoveIntent};

/// Pixel layout of the rendered board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardPresentation {
    rows: usize,
    cols: usize,
    cell_size: Vec2,
    padding: f32,
}

impl BoardPresentation {
    /// Creates a presentation for a `rows` x `cols` board with the provided
    /// cell pixel size and border padding.
    #[must_use]
    pub const fn new(rows: usize, cols: usize, cell_size: Vec2, padding: f32) -> Self {
        Self {
            rows,
            cols,
            cell_size,
            padding,
        }
    }

    /// Pixel size of one cell.
    #[must_use]
    pub const fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// Total pixel size of the board including the border padding.
    #[must_use]
    pub fn board_size(&self) -> Vec2 {
        Vec2::new(
            self.cols as f32 * self.cell_size.x + 2.0 * self.padding,
            self.rows as f32 * self.cell_size.y + 2.0 * self.padding,
        )
    }

    /// Resting pixel origin of the named cell, relative to the board's
    /// top-left corner.
    #[must_use]
    pub fn tile_origin(&self, cell: CellCoord) -> Vec2 {
        Vec2::new(
            self.padding + cell.col() as f32 * self.cell_size.x,
            self.padding + cell.row() as f32 * self.cell_size.y,
        )
    }

    /// Pixel extent of one cell along the slide direction of the axis.
    ///
    /// A row slides horizontally, so its extent is the cell width; a column
    /// slides vertically.
    #[must_use]
    pub const fn cell_extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Row => self.cell_size.x,
            Axis::Column => self.cell_size.y,
        }
    }
}

/// Notification a renderer reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneUpdate {
    /// One row or column is visually displaced; redraw only that strip.
    StripOffset {
        /// Axis the strip slides along.
        axis: Axis,
        /// Row or column index of the strip.
        index: usize,
        /// Pixel offset to apply to every tile in the strip.
        offset: Vec2,
    },
    /// The logical grid changed; redraw everything at resting positions.
    FullRedraw,
}

/// Converts an incremental drag-preview delta into a strip update.
#[must_use]
pub fn drag_update(axis: Axis, index: usize, delta: f32) -> SceneUpdate {
    SceneUpdate::StripOffset {
        axis,
        index,
        offset: along(axis, delta),
    }
}

/// Converts an animation tick into a strip update.
///
/// The offset is `direction * progress * cell_extent` along the move's
/// axis, so the strip lands exactly one cell over when progress reaches 1.
#[must_use]
pub fn slide_update(intent: MoveIntent, progress: f32, board: &BoardPresentation) -> SceneUpdate {
    let displacement =
        intent.rotation().offset_sign() * progress * board.cell_extent(intent.axis());
    SceneUpdate::StripOffset {
        axis: intent.axis(),
        index: intent.index(),
        offset: along(intent.axis(), displacement),
    }
}

fn along(axis: Axis, displacement: f32) -> Vec2 {
    match axis {
        Axis::Row => Vec2::new(displacement, 0.0),
        Axis::Column => Vec2::new(0.0, displacement),
    }
}

/// Backend that turns scene updates into visible output.
pub trait ScenePresenter {
    /// Applies one update to the backend's output.
    fn present(&mut self, update: &SceneUpdate) -> AnyResult<()>;
}
