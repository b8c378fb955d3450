//! Best-effort refill of empty cells
//!
//! Empty cells are visited in row-major order, so the avoidance check for a
//! cell reads neighbours that were refilled earlier in the same pass.

use crate::io::configuration::REFILL_ATTEMPTS;
use crate::math::random::SymbolSource;
use crate::spatial::grid::{Candy, Cell, Grid, Position};

/// Test whether placing `candy` at `position` completes a run of three with
/// the two cells to its left or the two cells above it
pub fn completes_run(grid: &Grid, position: Position, candy: Candy) -> bool {
    let filled = Some(Cell::Filled(candy));
    let Position { row, col } = position;

    let left = col >= 2
        && grid.get(Position::new(row, col - 1)) == filled
        && grid.get(Position::new(row, col - 2)) == filled;
    let above = row >= 2
        && grid.get(Position::new(row - 1, col)) == filled
        && grid.get(Position::new(row - 2, col)) == filled;

    left || above
}

// After REFILL_ATTEMPTS draws the last candy is kept even if it completes a
// run; the next detection pass clears it.
fn draw_candy<S>(grid: &Grid, position: Position, source: &mut S) -> Candy
where
    S: SymbolSource + ?Sized,
{
    let mut candy = source.next_candy();
    let mut attempts = 1;
    while attempts < REFILL_ATTEMPTS && completes_run(grid, position, candy) {
        candy = source.next_candy();
        attempts += 1;
    }
    candy
}

/// Fill every empty cell with a candy from `source`
///
/// Returns the number of cells filled. No empty cell remains afterwards.
pub fn refill<S>(grid: &mut Grid, source: &mut S) -> usize
where
    S: SymbolSource + ?Sized,
{
    let dimension = grid.dimension();
    let mut filled = 0;

    for row in 0..dimension {
        for col in 0..dimension {
            let position = Position::new(row, col);
            if grid.get(position) != Some(Cell::Empty) {
                continue;
            }

            let candy = draw_candy(grid, position, source);
            grid.set(position, Cell::Filled(candy));
            filled += 1;
        }
    }

    filled
}
