//! Serde-backed puzzle and replay definitions decoded from JSON level files.
//!
//! A level file carries the grid dimensions, an initial arrangement, a goal
//! arrangement holding a permutation of the same tile values, and the number
//! of distinct tile images. Replay files add the recorded action token
//! string. Everything else in the original files (image paths, blurbs) is
//! presentation data the core never reads.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Medal thresholds for the move counter, measured in committed moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Maximum move count that still earns gold.
    pub gold: u32,
    /// Maximum move count that still earns silver.
    pub silver: u32,
    /// Maximum move count that still earns bronze.
    pub bronze: u32,
}

impl Default for Rating {
    fn default() -> Self {
        Self {
            gold: 10,
            silver: 20,
            bronze: 30,
        }
    }
}

/// Declarative puzzle definition as stored in a level file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDefinition {
    /// Number of tile rows in the puzzle grid.
    pub rows: usize,
    /// Number of tile columns in the puzzle grid.
    pub cols: usize,
    /// Starting arrangement of tile values, row-major.
    pub initial: Vec<Vec<u16>>,
    /// Goal arrangement the player must reach; a permutation of `initial`.
    #[serde(rename = "final")]
    pub goal: Vec<Vec<u16>>,
    /// Number of distinct tile images referenced by the grids.
    pub ntiles: usize,
    /// Optional medal thresholds for the move counter.
    #[serde(default)]
    pub rating: Option<Rating>,
}

impl LevelDefinition {
    /// Checks the structural contract every playable level must satisfy.
    ///
    /// Both grids must match the declared dimensions, contain the same value
    /// multiset, and reference only tile values below `ntiles`.
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LevelError::Empty);
        }

        check_shape("initial", &self.initial, self.rows, self.cols)?;
        check_shape("final", &self.goal, self.rows, self.cols)?;

        for value in self.initial.iter().flatten() {
            if usize::from(*value) >= self.ntiles {
                return Err(LevelError::UnknownTile {
                    value: *value,
                    tile_count: self.ntiles,
                });
            }
        }

        let mut initial_values: Vec<u16> = self.initial.iter().flatten().copied().collect();
        let mut goal_values: Vec<u16> = self.goal.iter().flatten().copied().collect();
        initial_values.sort_unstable();
        goal_values.sort_unstable();
        if initial_values != goal_values {
            return Err(LevelError::NotAPermutation);
        }

        Ok(())
    }
}

/// Recorded replay: the level it was played on plus the action token string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayDefinition {
    /// The puzzle the recorded actions apply to.
    #[serde(flatten)]
    pub level: LevelDefinition,
    /// Space-separated move tokens, e.g. `"R0 U2 L1"`.
    pub actions: String,
}

fn check_shape(
    field: &'static str,
    grid: &[Vec<u16>],
    rows: usize,
    cols: usize,
) -> Result<(), LevelError> {
    if grid.len() != rows {
        return Err(LevelError::ShapeMismatch {
            field,
            declared_rows: rows,
            declared_cols: cols,
            actual_rows: grid.len(),
        });
    }
    for (row, cells) in grid.iter().enumerate() {
        if cells.len() != cols {
            return Err(LevelError::RaggedRow {
                field,
                row,
                expected: cols,
                actual: cells.len(),
            });
        }
    }
    Ok(())
}

/// Structural defects that make a level definition unplayable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LevelError {
    /// The declared dimensions contain a zero.
    #[error("level must have at least one row and one column")]
    Empty,
    /// A grid's row count disagrees with the declared dimensions.
    #[error("{field} grid has {actual_rows} rows, declared {declared_rows}x{declared_cols}")]
    ShapeMismatch {
        /// Which grid failed the check.
        field: &'static str,
        /// Declared row count.
        declared_rows: usize,
        /// Declared column count.
        declared_cols: usize,
        /// Actual row count found in the file.
        actual_rows: usize,
    },
    /// A grid row holds the wrong number of cells.
    #[error("{field} grid row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        /// Which grid failed the check.
        field: &'static str,
        /// Index of the offending row.
        row: usize,
        /// Declared column count.
        expected: usize,
        /// Actual cell count found in the row.
        actual: usize,
    },
    /// The goal grid does not hold the same value multiset as the initial grid.
    #[error("final grid is not a permutation of the initial grid")]
    NotAPermutation,
    /// A grid references a tile image index outside the declared tile count.
    #[error("tile value {value} exceeds tile count {tile_count}")]
    UnknownTile {
        /// The out-of-range tile value.
        value: u16,
        /// Declared number of distinct tile images.
        tile_count: usize,
    },
}
