//! Dense 2-D buffer with wrap-around row and column rotation.

use toroidal_core::{Axis, GridError};

/// A rectangular grid whose rows and columns rotate cyclically.
///
/// Moving past the last row or column wraps to the first, so rotations are
/// bijections on the stored values: nothing is created or lost. Storage is a
/// single row-major buffer and every rotation is an in-place ring shift that
/// allocates nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToroidalGrid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> ToroidalGrid<T> {
    /// Builds a grid by deep-copying the provided row-major data.
    ///
    /// The input must be non-empty and rectangular; ragged or empty input
    /// fails with [`GridError::DimensionMismatch`].
    pub fn from_rows(data: &[Vec<T>]) -> Result<Self, GridError> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(GridError::DimensionMismatch {
                expected_rows: rows,
                expected_cols: cols,
                actual_rows: rows,
                actual_cols: 0,
            });
        }
        for row in data {
            if row.len() != cols {
                return Err(GridError::DimensionMismatch {
                    expected_rows: rows,
                    expected_cols: cols,
                    actual_rows: rows,
                    actual_cols: row.len(),
                });
            }
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for row in data {
            cells.extend_from_slice(row);
        }
        Ok(Self { rows, cols, cells })
    }

    /// Replaces every cell from the provided row-major data, used on puzzle
    /// reset. The replacement must match the grid's dimensions.
    pub fn reset_from(&mut self, data: &[Vec<T>]) -> Result<(), GridError> {
        let actual_rows = data.len();
        let actual_cols = data.first().map_or(0, Vec::len);
        if actual_rows != self.rows || data.iter().any(|row| row.len() != self.cols) {
            return Err(GridError::DimensionMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                actual_rows,
                actual_cols,
            });
        }

        for (target, source) in self.cells.chunks_mut(self.cols).zip(data) {
            target.clone_from_slice(source);
        }
        Ok(())
    }
}

impl<T> ToroidalGrid<T> {
    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Length of the named axis: a row holds `cols` cells and vice versa.
    #[must_use]
    pub const fn axis_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.cols,
            Axis::Column => self.rows,
        }
    }

    /// Reads the value stored at the named cell.
    pub fn value_at(&self, row: usize, col: usize) -> Result<&T, GridError> {
        if row >= self.rows {
            return Err(GridError::OutOfRange {
                axis: Axis::Column,
                index: row,
                len: self.rows,
            });
        }
        if col >= self.cols {
            return Err(GridError::OutOfRange {
                axis: Axis::Row,
                index: col,
                len: self.cols,
            });
        }
        Ok(&self.cells[row * self.cols + col])
    }

    /// Rotates the named row one cell along the row axis.
    ///
    /// Forward carries the element at column 0 to the last column and shifts
    /// every other element down one column; Backward is the inverse.
    pub fn rotate_row(
        &mut self,
        index: usize,
        rotation: toroidal_core::Rotation,
    ) -> Result<(), GridError> {
        if index >= self.rows {
            // A row index runs along the column axis, as in `value_at`.
            return Err(GridError::OutOfRange {
                axis: Axis::Column,
                index,
                len: self.rows,
            });
        }

        let start = index * self.cols;
        let row = &mut self.cells[start..start + self.cols];
        match rotation {
            toroidal_core::Rotation::Forward => row.rotate_left(1),
            toroidal_core::Rotation::Backward => row.rotate_right(1),
        }
        Ok(())
    }

    /// Rotates the named column one cell along the column axis.
    ///
    /// Forward carries the element at row 0 to the last row; Backward is the
    /// inverse. Implemented as successive swaps so no temporary storage is
    /// needed.
    pub fn rotate_column(
        &mut self,
        index: usize,
        rotation: toroidal_core::Rotation,
    ) -> Result<(), GridError> {
        if index >= self.cols {
            return Err(GridError::OutOfRange {
                axis: Axis::Row,
                index,
                len: self.cols,
            });
        }

        match rotation {
            toroidal_core::Rotation::Forward => {
                for row in 0..self.rows - 1 {
                    self.cells
                        .swap(row * self.cols + index, (row + 1) * self.cols + index);
                }
            }
            toroidal_core::Rotation::Backward => {
                for row in (1..self.rows).rev() {
                    self.cells
                        .swap(row * self.cols + index, (row - 1) * self.cols + index);
                }
            }
        }
        Ok(())
    }

    /// Applies the rotation a move intent describes.
    pub fn rotate(&mut self, intent: toroidal_core::MoveIntent) -> Result<(), GridError> {
        match intent.axis() {
            Axis::Row => self.rotate_row(intent.index(), intent.rotation()),
            Axis::Column => self.rotate_column(intent.index(), intent.rotation()),
        }
    }
}

impl<T: PartialEq> ToroidalGrid<T> {
    /// Element-wise comparison against another grid of identical dimensions,
    /// used to detect the win condition.
    pub fn matches(&self, other: &Self) -> Result<bool, GridError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(GridError::DimensionMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                actual_rows: other.rows,
                actual_cols: other.cols,
            });
        }
        Ok(self.cells == other.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::ToroidalGrid;
    use toroidal_core::{Axis, GridError, MoveIntent, Rotation};

    fn numbered(rows: usize, cols: usize) -> ToroidalGrid<u16> {
        let data: Vec<Vec<u16>> = (0..rows)
            .map(|row| (0..cols).map(|col| (row * cols + col) as u16).collect())
            .collect();
        ToroidalGrid::from_rows(&data).expect("rectangular input")
    }

    fn snapshot(grid: &ToroidalGrid<u16>) -> Vec<Vec<u16>> {
        (0..grid.rows())
            .map(|row| {
                (0..grid.cols())
                    .map(|col| *grid.value_at(row, col).expect("in range"))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn forward_row_rotation_matches_reference_scenario() {
        let mut grid = numbered(3, 3);
        grid.rotate_row(0, Rotation::Forward).expect("in range");
        assert_eq!(
            snapshot(&grid),
            vec![vec![1, 2, 0], vec![3, 4, 5], vec![6, 7, 8]]
        );
        grid.rotate_row(0, Rotation::Backward).expect("in range");
        assert_eq!(
            snapshot(&grid),
            vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]]
        );
    }

    #[test]
    fn forward_moves_first_element_to_end_of_axis() {
        let mut grid = numbered(2, 4);
        grid.rotate_row(1, Rotation::Forward).expect("in range");
        assert_eq!(*grid.value_at(1, 3).expect("in range"), 4);
        assert_eq!(*grid.value_at(1, 0).expect("in range"), 5);
    }

    #[test]
    fn column_rotation_is_the_transpose_of_row_rotation() {
        let mut grid = numbered(3, 2);
        grid.rotate_column(1, Rotation::Forward).expect("in range");
        assert_eq!(snapshot(&grid), vec![vec![0, 3], vec![2, 5], vec![4, 1]]);
        grid.rotate_column(1, Rotation::Backward).expect("in range");
        assert_eq!(snapshot(&grid), vec![vec![0, 1], vec![2, 3], vec![4, 5]]);
    }

    #[test]
    fn four_forward_rotations_on_a_four_length_axis_are_identity() {
        let mut grid = numbered(4, 4);
        let original = snapshot(&grid);
        for _ in 0..4 {
            grid.rotate_column(2, Rotation::Forward).expect("in range");
        }
        assert_eq!(snapshot(&grid), original);
    }

    #[test]
    fn rotations_conserve_the_value_multiset() {
        let mut grid = numbered(3, 5);
        let mut before: Vec<u16> = snapshot(&grid).into_iter().flatten().collect();
        before.sort_unstable();

        grid.rotate_row(2, Rotation::Forward).expect("in range");
        grid.rotate_column(4, Rotation::Backward).expect("in range");

        let mut after: Vec<u16> = snapshot(&grid).into_iter().flatten().collect();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn out_of_range_indices_fail_loudly() {
        let mut grid = numbered(2, 3);
        // The reported axis is the one the index runs along, so its `len`
        // always agrees with `axis_len`.
        assert_eq!(
            grid.rotate_row(2, Rotation::Forward),
            Err(GridError::OutOfRange {
                axis: Axis::Column,
                index: 2,
                len: grid.axis_len(Axis::Column),
            })
        );
        assert_eq!(
            grid.rotate_column(3, Rotation::Forward),
            Err(GridError::OutOfRange {
                axis: Axis::Row,
                index: 3,
                len: grid.axis_len(Axis::Row),
            })
        );
        assert_eq!(
            grid.value_at(2, 0),
            Err(GridError::OutOfRange {
                axis: Axis::Column,
                index: 2,
                len: 2,
            })
        );
    }

    #[test]
    fn rotate_dispatches_on_the_intent_axis() {
        let mut by_intent = numbered(3, 3);
        let mut direct = numbered(3, 3);
        by_intent
            .rotate(MoveIntent::new(Axis::Column, 1, Rotation::Backward))
            .expect("in range");
        direct.rotate_column(1, Rotation::Backward).expect("in range");
        assert_eq!(snapshot(&by_intent), snapshot(&direct));
    }

    #[test]
    fn matches_detects_a_single_differing_cell() {
        let grid = numbered(3, 3);
        let same = numbered(3, 3);
        assert_eq!(grid.matches(&same), Ok(true));

        let mut other = numbered(3, 3);
        other.rotate_row(1, Rotation::Forward).expect("in range");
        assert_eq!(grid.matches(&other), Ok(false));
    }

    #[test]
    fn matches_rejects_shape_mismatch() {
        let grid = numbered(2, 3);
        let other = numbered(3, 2);
        assert!(matches!(
            grid.matches(&other),
            Err(GridError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn ragged_input_is_rejected() {
        let data = vec![vec![0u16, 1], vec![2]];
        assert!(matches!(
            ToroidalGrid::from_rows(&data),
            Err(GridError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn reset_restores_the_provided_arrangement() {
        let mut grid = numbered(2, 2);
        grid.rotate_row(0, Rotation::Forward).expect("in range");
        grid.reset_from(&[vec![0, 1], vec![2, 3]]).expect("same shape");
        assert_eq!(snapshot(&grid), vec![vec![0, 1], vec![2, 3]]);
    }
}
