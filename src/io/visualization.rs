//! Frame capture and GIF generation for cascade visualization

use std::path::Path;

use image::{Delay, Frame};

use crate::algorithm::executor::{CycleStep, Observer};
use crate::io::configuration::{CELL_PIXELS, FINAL_FRAME_HOLD};
use crate::io::error::{GameError, Result};
use crate::io::image::{ensure_parent_dir, grid_to_image};
use crate::spatial::grid::Grid;
use crate::spatial::moves::Move;

/// Records a snapshot of the grid for every step of every cycle
///
/// Consecutive identical snapshots are stored once, so a stable board does
/// not stall the animation.
pub struct CascadeRecorder {
    frames: Vec<Grid>,
    cell_pixels: u32,
}

impl Default for CascadeRecorder {
    fn default() -> Self {
        Self::new(CELL_PIXELS)
    }
}

impl CascadeRecorder {
    /// Create a recorder painting each cell as a square of `cell_pixels`
    pub const fn new(cell_pixels: u32) -> Self {
        Self {
            frames: Vec::new(),
            cell_pixels,
        }
    }

    /// Store a snapshot unless it equals the previous one
    pub fn record(&mut self, grid: &Grid) {
        if self.frames.last() != Some(grid) {
            self.frames.push(grid.clone());
        }
    }

    /// Recorded snapshots in order
    pub fn frames(&self) -> &[Grid] {
        &self.frames
    }

    /// Number of recorded snapshots
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the recorded snapshots as an animated GIF
    ///
    /// The final frame is held `FINAL_FRAME_HOLD` times longer than the others.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were recorded
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(GameError::InvalidParameter {
                parameter: "frames",
                value: "0".to_string(),
                reason: "No frames captured for visualization".to_string(),
            });
        }

        let last = self.frames.len() - 1;
        let frames = self.frames.iter().enumerate().map(|(index, grid)| {
            let delay_ms = if index == last {
                frame_delay_ms.saturating_mul(FINAL_FRAME_HOLD)
            } else {
                frame_delay_ms
            };
            Frame::from_parts(
                grid_to_image(grid, self.cell_pixels),
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms, 1),
            )
        });

        ensure_parent_dir(output_path)?;

        let file = std::fs::File::create(output_path).map_err(|e| GameError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| GameError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }
}

impl Observer for CascadeRecorder {
    fn on_step(&mut self, _step: CycleStep, grid: &Grid) -> Result<()> {
        self.record(grid);
        Ok(())
    }

    fn on_move(&mut self, _swap: Move, grid: &Grid) -> Result<()> {
        self.record(grid);
        Ok(())
    }
}
