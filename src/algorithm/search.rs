//! Exhaustive one-ply search for the best adjacent swap
//!
//! Every adjacent pair is simulated once, which costs `O(n^2)` candidates
//! times up to `O(n^3)` per cascade, `O(n^5)` overall.

use crate::algorithm::simulation::{Score, simulate};
use crate::io::error::Result;
use crate::math::random::SymbolSource;
use crate::spatial::grid::{Grid, Position};
use crate::spatial::moves::Move;

/// A candidate move together with its simulated score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    /// The swap that was simulated
    pub swap: Move,
    /// Cells cleared by the swap's cascade
    pub score: Score,
}

/// Every adjacent swap of an `n x n` grid, each pair exactly once
///
/// Cells are visited row-major; each proposes its right neighbour first,
/// then the one below.
pub fn candidate_moves(dimension: usize) -> Vec<Move> {
    let mut moves = Vec::with_capacity(2 * dimension * dimension.saturating_sub(1));
    for row in 0..dimension {
        for col in 0..dimension {
            let from = Position::new(row, col);
            if col + 1 < dimension {
                moves.push(Move::rightward(from));
            }
            if row + 1 < dimension {
                moves.push(Move::downward(from));
            }
        }
    }
    moves
}

/// Simulate every candidate move in enumeration order
///
/// Each simulation starts from the unmodified `grid` and a fresh clone of
/// `source`, so all candidates see the same refill stream.
///
/// # Errors
///
/// Returns an error if a simulated cascade does not settle
pub fn evaluate_moves<S>(grid: &Grid, source: &S) -> Result<Vec<ScoredMove>>
where
    S: SymbolSource + Clone,
{
    candidate_moves(grid.dimension())
        .into_iter()
        .map(|swap| {
            let score = simulate(grid, swap, &mut source.clone())?;
            Ok(ScoredMove { swap, score })
        })
        .collect()
}

/// Find the adjacent swap with the highest simulated score
///
/// Ties keep the first candidate in enumeration order. Returns `None` when no
/// swap scores above zero, including grids too small to hold a run.
///
/// # Errors
///
/// Returns an error if a simulated cascade does not settle
pub fn search<S>(grid: &Grid, source: &S) -> Result<Option<ScoredMove>>
where
    S: SymbolSource + Clone,
{
    let mut best: Option<ScoredMove> = None;

    for swap in candidate_moves(grid.dimension()) {
        let score = simulate(grid, swap, &mut source.clone())?;
        let best_score = best.map_or(0, |current| current.score);
        if score > best_score {
            best = Some(ScoredMove { swap, score });
        }
    }

    Ok(best)
}
