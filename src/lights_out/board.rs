//! Lights-Out board: an immutable N×N grid of boolean cell states.
//!
//! Cells are stored row-major in a persistent vector, so `toggled` returns
//! a fresh board sharing structure with the old one. UI layers that
//! re-render off value equality can hold both without copying the grid.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the Lights-Out engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LightsOutError {
    /// Toggle requested outside the board.
    #[error("cell index {index} out of range for a board of {cell_count} cells")]
    InvalidIndex { index: usize, cell_count: usize },
}

/// Lights-Out board of `size × size` cells, row-major.
///
/// `true` means the light is on. The board is solved when every light is
/// off. All transitions are functional: the receiver is never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vector<bool>,
    size: usize,
}

impl Board {
    /// Create an all-off (solved) board.
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn all_off(size: usize) -> Self {
        assert!(size >= 1, "Board size must be at least 1");

        Self {
            cells: std::iter::repeat(false).take(size * size).collect(),
            size,
        }
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size²`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get a cell state, or `None` if `index` is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.cells.get(index).copied()
    }

    /// Convert (row, col) to a linear cell index.
    #[must_use]
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Convert a linear cell index to (row, col).
    #[must_use]
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Iterate over cell states in index order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.cells.iter().copied()
    }

    /// Toggle the cell at `index` and its in-bounds axis neighbors.
    ///
    /// Edge and corner cells flip fewer neighbors. Returns the new board;
    /// the receiver is untouched. Fails with `InvalidIndex` if `index` is
    /// outside the board.
    pub fn toggled(&self, index: usize) -> Result<Board, LightsOutError> {
        if index >= self.cell_count() {
            return Err(LightsOutError::InvalidIndex {
                index,
                cell_count: self.cell_count(),
            });
        }

        Ok(self.toggled_in_bounds(index))
    }

    /// Toggle without the range check. Callers must have validated `index`.
    pub(crate) fn toggled_in_bounds(&self, index: usize) -> Board {
        debug_assert!(index < self.cell_count());

        let size = self.size as isize;
        let (row, col) = self.position(index);
        let (row, col) = (row as isize, col as isize);

        let mut cells = self.cells.clone();
        let mut flip = |r: isize, c: isize| {
            if r >= 0 && r < size && c >= 0 && c < size {
                let i = (r * size + c) as usize;
                let lit = cells[i];
                cells.set(i, !lit);
            }
        };

        flip(row, col); // self
        flip(row - 1, col); // up
        flip(row + 1, col); // down
        flip(row, col - 1); // left
        flip(row, col + 1); // right

        Board {
            cells,
            size: self.size,
        }
    }

    /// True iff every light is off.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    /// Number of lights currently on.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }
}
