//! Run detection and clearing
//!
//! Detection is split in two phases. Both scans (a width-3 window along
//! every row, then down every column) only mark a [`MatchMask`]; the grid is
//! cleared afterwards in a single pass. Clearing while scanning would break
//! comparisons for runs crossing an already-cleared cell.

use bitvec::prelude::*;

use crate::io::configuration::MIN_RUN_LENGTH;
use crate::spatial::grid::{Cell, Grid, Position};

/// Row-major mask of cells slated for clearing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchMask {
    bits: BitVec,
    dimension: usize,
}

impl MatchMask {
    /// Create a mask with no marked cells
    pub fn new(dimension: usize) -> Self {
        Self {
            bits: bitvec![0; dimension * dimension],
            dimension,
        }
    }

    /// Mark a cell, ignoring positions outside the grid
    pub fn mark(&mut self, position: Position) {
        if position.within(self.dimension) {
            self.bits
                .set(position.row * self.dimension + position.col, true);
        }
    }

    /// Test whether a cell is marked
    pub fn is_marked(&self, position: Position) -> bool {
        position.within(self.dimension)
            && self
                .bits
                .get(position.row * self.dimension + position.col)
                .as_deref()
                == Some(&true)
    }

    /// Number of marked cells; intersections of two runs count once
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no cell is marked
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Marked positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.bits
            .iter_ones()
            .map(|index| Position::new(index / self.dimension, index % self.dimension))
    }
}

// Three filled cells holding the same candy
fn is_run(cells: [Option<Cell>; MIN_RUN_LENGTH]) -> bool {
    match cells {
        [Some(Cell::Filled(a)), Some(Cell::Filled(b)), Some(Cell::Filled(c))] => a == b && b == c,
        _ => false,
    }
}

/// Mark every cell belonging to a horizontal or vertical run of three or more
///
/// The grid is not modified. With fewer than three rows no window fits and the
/// mask stays empty.
pub fn find_matches(grid: &Grid) -> MatchMask {
    let dimension = grid.dimension();
    let mut mask = MatchMask::new(dimension);
    let windows = dimension.saturating_sub(MIN_RUN_LENGTH - 1);

    for row in 0..dimension {
        for col in 0..windows {
            let window = [0, 1, 2].map(|offset| Position::new(row, col + offset));
            if is_run(window.map(|position| grid.get(position))) {
                window.into_iter().for_each(|position| mask.mark(position));
            }
        }
    }

    for col in 0..dimension {
        for row in 0..windows {
            let window = [0, 1, 2].map(|offset| Position::new(row + offset, col));
            if is_run(window.map(|position| grid.get(position))) {
                window.into_iter().for_each(|position| mask.mark(position));
            }
        }
    }

    mask
}

/// Test whether the grid holds at least one run
pub fn has_matches(grid: &Grid) -> bool {
    !find_matches(grid).is_empty()
}

/// Replace every cell of every run with the empty marker
///
/// Returns the number of cells turned from a candy into the empty marker.
pub fn clear_matches(grid: &mut Grid) -> usize {
    let mask = find_matches(grid);
    for position in mask.positions() {
        grid.set(position, Cell::Empty);
    }
    mask.count()
}
