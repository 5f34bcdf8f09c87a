#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative puzzle state for the toroidal tile game.
//!
//! The world owns the logical grid, the goal arrangement, and the initial
//! arrangement used on reset. Systems never mutate it directly: the animator
//! emits [`Command`] values once a slide finishes, the world executes them
//! via [`apply`], and broadcasts [`Event`] values for counters and renderers.
//! The grid therefore never exposes an intermediate state mid-animation; a
//! commit is atomic.

pub mod grid;

pub use grid::ToroidalGrid;

use toroidal_core::{Command, Event, GridError, LevelDefinition, LevelError, TileId};

/// Authoritative state of one puzzle instance.
///
/// A play level and a replay level are distinct `World` instances; nothing is
/// shared between them.
#[derive(Debug)]
pub struct World {
    grid: ToroidalGrid<TileId>,
    goal: ToroidalGrid<TileId>,
    initial: Vec<Vec<TileId>>,
    tile_count: usize,
}

impl World {
    /// Builds a world from a validated level definition.
    ///
    /// Validation enforces matching dimensions and that the goal holds a
    /// permutation of the initial grid's values, so later win-condition
    /// comparisons can never hit a dimension mismatch.
    pub fn from_level(level: &LevelDefinition) -> Result<Self, LevelError> {
        level.validate()?;

        let initial: Vec<Vec<TileId>> = level
            .initial
            .iter()
            .map(|row| row.iter().map(|value| TileId::new(*value)).collect())
            .collect();
        let goal_tiles: Vec<Vec<TileId>> = level
            .goal
            .iter()
            .map(|row| row.iter().map(|value| TileId::new(*value)).collect())
            .collect();

        let grid = ToroidalGrid::from_rows(&initial).map_err(|_| LevelError::Empty)?;
        let goal = ToroidalGrid::from_rows(&goal_tiles).map_err(|_| LevelError::Empty)?;

        Ok(Self {
            grid,
            goal,
            initial,
            tile_count: level.ntiles,
        })
    }
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// Grid contract violations abort the command and propagate; they are
/// unreachable when commands come from a correctly bounded recognizer or a
/// validated replay, but fail loudly otherwise.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) -> Result<(), GridError> {
    match command {
        Command::ApplyMove { intent, source } => {
            world.grid.rotate(intent)?;
            out_events.push(Event::MoveCommitted { intent, source });
            if world.grid.matches(&world.goal)? {
                out_events.push(Event::GoalReached);
            }
        }
        Command::ResetPuzzle => {
            world.grid.reset_from(&world.initial)?;
            out_events.push(Event::PuzzleReset);
        }
    }
    Ok(())
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::{TileId, ToroidalGrid, World};

    /// Provides read-only access to the current logical grid.
    #[must_use]
    pub fn grid(world: &World) -> &ToroidalGrid<TileId> {
        &world.grid
    }

    /// Provides read-only access to the goal arrangement.
    #[must_use]
    pub fn goal(world: &World) -> &ToroidalGrid<TileId> {
        &world.goal
    }

    /// Grid dimensions as `(rows, cols)`.
    #[must_use]
    pub fn dimensions(world: &World) -> (usize, usize) {
        (world.grid.rows(), world.grid.cols())
    }

    /// Number of distinct tile images the puzzle references.
    #[must_use]
    pub fn tile_count(world: &World) -> usize {
        world.tile_count
    }

    /// Whether the current grid matches the goal arrangement.
    ///
    /// The dimension check can never fail for a world built through
    /// [`World::from_level`], so a mismatch reads as "not solved".
    #[must_use]
    pub fn solved(world: &World) -> bool {
        world.grid.matches(&world.goal).unwrap_or(false)
    }
}
