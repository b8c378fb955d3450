//! PNG export of a grid with one colored square per cell

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::io::error::{GameError, Result};
use crate::spatial::grid::{Candy, Cell, Grid};

/// RGBA color for each candy in alphabet order
pub const CANDY_PALETTE: [[u8; 4]; 5] = [
    [230, 57, 70, 255],
    [69, 123, 157, 255],
    [244, 162, 97, 255],
    [42, 157, 143, 255],
    [181, 101, 167, 255],
];

/// Color of the empty marker
pub const EMPTY_COLOR: [u8; 4] = [0, 0, 0, 0];

/// Color used for a cell
pub fn cell_color(cell: Cell) -> Rgba<u8> {
    match cell {
        Cell::Empty => Rgba(EMPTY_COLOR),
        Cell::Filled(candy) => Rgba(candy_color(candy)),
    }
}

fn candy_color(candy: Candy) -> [u8; 4] {
    CANDY_PALETTE
        .get(candy.index())
        .copied()
        .unwrap_or(EMPTY_COLOR)
}

/// Paint the grid as `cell_pixels x cell_pixels` squares
pub fn grid_to_image(grid: &Grid, cell_pixels: u32) -> RgbaImage {
    let cell_pixels = cell_pixels.max(1);
    let side = grid.dimension() as u32 * cell_pixels;

    RgbaImage::from_fn(side, side, |x, y| {
        let row = (y / cell_pixels) as usize;
        let col = (x / cell_pixels) as usize;
        grid.cells()
            .get([row, col])
            .copied()
            .map_or(Rgba(EMPTY_COLOR), cell_color)
    })
}

/// Create the parent directory of `path` if it is missing
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if parent.as_os_str().is_empty() {
            return Ok(());
        }
        std::fs::create_dir_all(parent).map_err(|e| GameError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The grid has no cells
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, cell_pixels: u32, output_path: &Path) -> Result<()> {
    if grid.dimension() == 0 {
        return Err(GameError::InvalidParameter {
            parameter: "grid",
            value: "0x0".to_string(),
            reason: "cannot export an empty grid".to_string(),
        });
    }

    ensure_parent_dir(output_path)?;

    grid_to_image(grid, cell_pixels)
        .save(output_path)
        .map_err(|e| GameError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
