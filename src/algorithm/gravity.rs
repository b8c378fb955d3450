use std::iter::repeat_n;

use crate::spatial::grid::{Cell, Grid};

/// Let candies fall to the bottom of their column
///
/// Candies keep their top-to-bottom order and every cell above them becomes
/// empty, so the number of empty cells per column is unchanged. Returns the
/// total number of empty cells, which is what the refiller has to fill.
pub fn collapse(grid: &mut Grid) -> usize {
    let mut empty = 0;

    for mut column in grid.cells_mut().columns_mut() {
        let settled: Vec<Cell> = column.iter().copied().filter(|cell| !cell.is_empty()).collect();
        let gap = column.len() - settled.len();
        empty += gap;

        for (slot, cell) in column
            .iter_mut()
            .zip(repeat_n(Cell::Empty, gap).chain(settled))
        {
            *slot = cell;
        }
    }

    empty
}
