//! Isolated cascade simulation for a single candidate move
//!
//! A simulation never touches the caller's grid: it clones it, applies the
//! swap to the clone and runs detect, collapse and refill until a cycle
//! clears nothing. The clone is dropped when the score is returned.

use crate::algorithm::detection::clear_matches;
use crate::algorithm::gravity::collapse;
use crate::algorithm::refill::refill;
use crate::io::configuration::MAX_CASCADE_CYCLES;
use crate::io::error::{GameError, Result};
use crate::math::random::SymbolSource;
use crate::spatial::grid::Grid;
use crate::spatial::moves::Move;

/// Number of cells cleared across a whole cascade
pub type Score = u32;

/// Per-cycle breakdown of a cascade
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cascade {
    /// Cells cleared by each cycle that cleared anything, in order
    pub cleared_per_cycle: Vec<usize>,
}

impl Cascade {
    /// Total cells cleared, saturating at `Score::MAX`
    pub fn score(&self) -> Score {
        self.cleared_per_cycle.iter().fold(0, |total: Score, &cleared| {
            total.saturating_add(Score::try_from(cleared).unwrap_or(Score::MAX))
        })
    }

    /// Number of cycles that cleared at least one cell
    pub fn depth(&self) -> usize {
        self.cleared_per_cycle.len()
    }
}

/// Run detect, collapse and refill on `grid` until a cycle clears nothing
///
/// # Errors
///
/// Returns `CascadeLimit` if the cascade is still clearing cells after
/// `MAX_CASCADE_CYCLES` cycles
pub fn run_cascade<S>(grid: &mut Grid, source: &mut S) -> Result<Cascade>
where
    S: SymbolSource + ?Sized,
{
    let mut cascade = Cascade::default();

    for _ in 0..MAX_CASCADE_CYCLES {
        let cleared = clear_matches(grid);
        if cleared == 0 {
            return Ok(cascade);
        }
        cascade.cleared_per_cycle.push(cleared);

        collapse(grid);
        refill(grid, source);
    }

    Err(GameError::CascadeLimit {
        cycles: MAX_CASCADE_CYCLES,
    })
}

/// Simulate `swap` on a private copy of `grid` and report the full cascade
///
/// # Errors
///
/// Returns an error if the move lies outside the grid or the cascade does
/// not settle
pub fn simulate_cascade<S>(grid: &Grid, swap: Move, source: &mut S) -> Result<Cascade>
where
    S: SymbolSource + ?Sized,
{
    let mut scratch = grid.clone();
    scratch.swap(swap)?;
    run_cascade(&mut scratch, source)
}

/// Score `swap` by the number of cells its cascade clears
///
/// A swap that completes no run scores 0.
///
/// # Errors
///
/// Returns an error if the move lies outside the grid or the cascade does
/// not settle
pub fn simulate<S>(grid: &Grid, swap: Move, source: &mut S) -> Result<Score>
where
    S: SymbolSource + ?Sized,
{
    simulate_cascade(grid, swap, source).map(|cascade| cascade.score())
}
