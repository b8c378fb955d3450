//! Adjacent swaps between two grid cells

use crate::io::error::{GameError, Result};
use crate::spatial::grid::Position;

/// An exchange of two 4-connected neighbouring cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// First cell of the swap
    pub from: Position,
    /// Second cell of the swap
    pub to: Position,
}

impl Move {
    /// Create a move, checking that the two cells are neighbours
    ///
    /// Bounds are not known here; see [`Move::fits`].
    ///
    /// # Errors
    ///
    /// Returns an error if the cells are not horizontally or vertically adjacent
    pub fn new(from: Position, to: Position) -> Result<Self> {
        let swap = Self { from, to };
        if swap.is_adjacent() {
            Ok(swap)
        } else {
            Err(GameError::NotAdjacent { swap })
        }
    }

    /// Swap a cell with its right-hand neighbour
    pub const fn rightward(from: Position) -> Self {
        Self {
            from,
            to: Position::new(from.row, from.col + 1),
        }
    }

    /// Swap a cell with the neighbour below it
    pub const fn downward(from: Position) -> Self {
        Self {
            from,
            to: Position::new(from.row + 1, from.col),
        }
    }

    /// Test 4-connectivity of the two cells
    pub const fn is_adjacent(&self) -> bool {
        let same_row = self.from.row == self.to.row && self.from.col.abs_diff(self.to.col) == 1;
        let same_col = self.from.col == self.to.col && self.from.row.abs_diff(self.to.row) == 1;
        same_row || same_col
    }

    /// Test that both cells lie inside an `n x n` grid
    pub const fn fits(&self, dimension: usize) -> bool {
        self.from.within(dimension) && self.to.within(dimension)
    }
}
