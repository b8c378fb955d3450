//! Initial random grid construction

use ndarray::Array2;

use crate::io::configuration::{MAX_DIMENSION, MIN_DIMENSION};
use crate::io::error::{GameError, Result};
use crate::math::random::SymbolSource;
use crate::spatial::grid::{Cell, Grid};

/// Check a requested dimension against the supported range
///
/// # Errors
///
/// Returns an error if the dimension is below `MIN_DIMENSION` or above `MAX_DIMENSION`
pub fn validate_dimension(dimension: usize) -> Result<usize> {
    if dimension < MIN_DIMENSION || dimension > MAX_DIMENSION {
        return Err(GameError::InvalidDimension {
            dimension,
            minimum: MIN_DIMENSION,
            maximum: MAX_DIMENSION,
        });
    }
    Ok(dimension)
}

/// Build an `n x n` grid with every cell drawn independently from `source`
///
/// Cells are drawn in row-major order. The result may already contain runs;
/// stabilization clears them before play starts.
///
/// # Errors
///
/// Returns an error if the dimension is outside the supported range
pub fn generate_grid<S>(dimension: usize, source: &mut S) -> Result<Grid>
where
    S: SymbolSource + ?Sized,
{
    let dimension = validate_dimension(dimension)?;
    let cells = Array2::from_shape_fn((dimension, dimension), |_| {
        Cell::Filled(source.next_candy())
    });
    Grid::from_cells(cells)
}
